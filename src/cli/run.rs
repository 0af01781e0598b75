use crate::{
    cli::{
        command::{Cli, Commands},
        display_contact, resolve_position, shell,
    },
    config,
    domain::{ContactStore, autosave::AutoSaver, contact::validate_contact},
    errors::AppError,
    logging,
    sinks::{PrintSendSink, SystemClipboard, copy_address, send_to_contact},
    storage::{
        ContactStorage, StorageMediums,
        csv_port::{export_contacts_to_csv, import_contacts_from_csv},
        parse_storage_type,
    },
};
use clap::Parser;
use std::io;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage)?;
    let data_dir = config::get_data_dir(cli.data_dir);
    logging::init(&data_dir)?;

    let storage = parse_storage_type(medium, &data_dir);
    let mut store = storage.load()?;

    info!(
        medium = storage.get_medium(),
        contacts = store.count(),
        "address book opened"
    );

    match cli.command {
        Commands::Add { name, address } => {
            validate_contact(&name, &address)?;

            if !store.add(name.clone(), address) {
                println!("A contact named '{}' already exists, nothing added", name);
                return Ok(());
            }

            persist(storage.as_ref(), &mut store)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in store.iter().enumerate() {
                println!("{}", display_contact(i + 1, c));
            }
            Ok(())
        }

        Commands::Delete { index, name } => {
            let idx = match (index, name) {
                (Some(position), _) => resolve_position(&store, position)?,
                (None, Some(name)) => store
                    .position(&name)
                    .ok_or_else(|| AppError::NotFound("Contact".to_string()))?,
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide --index or --name of the contact to delete".to_string(),
                    ));
                }
            };

            let removed = store.remove(idx)?;
            persist(storage.as_ref(), &mut store)?;

            println!("Contact '{}' deleted successfully", removed.name());
            Ok(())
        }

        Commands::Copy { index } => {
            let idx = resolve_position(&store, index)?;
            let mut clipboard = SystemClipboard::new();

            copy_address(&store, idx, &mut clipboard)?;

            let contact = store.get(idx)?;
            if clipboard.is_available() {
                println!("Copied address of '{}' to clipboard", contact.name());
            } else {
                // No clipboard to hand it to; show it instead
                println!("Clipboard unavailable, address: {}", contact.address());
            }
            Ok(())
        }

        Commands::Send { index } => {
            let idx = resolve_position(&store, index)?;
            let mut sink = PrintSendSink::new(io::stdout().lock());

            send_to_contact(&store, idx, &mut sink)
        }

        Commands::Import { src } => {
            let contacts = import_contacts_from_csv(&src)?;

            let mut added: u64 = 0;
            let mut skipped: u64 = 0;
            for contact in contacts {
                validate_contact(contact.name(), contact.address())?;

                if store.add(contact.name(), contact.address()) {
                    added += 1;
                } else {
                    skipped += 1;
                }
            }

            persist(storage.as_ref(), &mut store)?;

            println!(
                "Successfully imported {} contacts from {} ({} duplicates skipped)",
                added,
                src.display(),
                skipped
            );
            Ok(())
        }

        Commands::Export { des } => {
            let (path, count) = export_contacts_to_csv(store.contacts(), &des)?;

            println!(
                "Successfully exported {} contacts to {}",
                count,
                path.display()
            );
            Ok(())
        }

        Commands::Shell => {
            let saver = AutoSaver::spawn(storage)?;
            let mut clipboard = SystemClipboard::new();

            let stdin = io::stdin();
            shell::run_shell(
                &mut store,
                &saver,
                stdin.lock(),
                io::stdout().lock(),
                &mut clipboard,
            )
        }
    }
}

/// Writes the book if it changed. The store stays dirty when the write fails.
fn persist(storage: &dyn ContactStorage, store: &mut ContactStore) -> Result<(), AppError> {
    if !store.is_dirty() {
        return Ok(());
    }

    storage.save(store.contacts())?;
    store.mark_clean();
    Ok(())
}
