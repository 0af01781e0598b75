use super::*;

use crate::domain::autosave::AutoSaver;
use crate::domain::contact::validate_contact;
use crate::sinks::{ClipboardSink, PrintSendSink, copy_address, send_to_contact};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  add <address> <name>   add a contact (name may contain spaces and commas)
  list                   show contacts
  delete <n>             delete contact n
  copy <n>               copy address of contact n
  send <n>               hand address of contact n to the send flow
  save                   wait for pending saves
  exit                   save and leave";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Add { address: String, name: String },
    List,
    Delete(usize),
    Copy(usize),
    Send(usize),
    Save,
    Help,
    Exit,
}

pub fn parse_shell_command(line: &str) -> Result<ShellCommand, AppError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "add" => {
            let (address, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| AppError::ParseCommand(line.to_string()))?;
            Ok(ShellCommand::Add {
                address: address.to_string(),
                name: name.trim().to_string(),
            })
        }
        "list" | "ls" => Ok(ShellCommand::List),
        "delete" | "rm" => Ok(ShellCommand::Delete(rest.parse()?)),
        "copy" => Ok(ShellCommand::Copy(rest.parse()?)),
        "send" => Ok(ShellCommand::Send(rest.parse()?)),
        "save" => Ok(ShellCommand::Save),
        "help" | "?" => Ok(ShellCommand::Help),
        "exit" | "quit" => Ok(ShellCommand::Exit),
        _ => Err(AppError::ParseCommand(line.to_string())),
    }
}

/// Reads commands from `input` until `exit` or end of input.
///
/// Every mutation schedules a snapshot on `saver` instead of writing inline.
/// Unsaved changes are flushed on every way out, including I/O errors on
/// `input` or `out`; a failed save wins over any other error.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut ContactStore,
    saver: &AutoSaver,
    input: R,
    mut out: W,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let session = read_commands(store, saver, input, &mut out, clipboard);

    save_pending(store, saver)?;
    session
}

fn read_commands<R: BufRead, W: Write>(
    store: &mut ContactStore,
    saver: &AutoSaver,
    input: R,
    out: &mut W,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    writeln!(out, "{} contacts loaded, 'help' for commands", store.count())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_shell_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        if command == ShellCommand::Exit {
            break;
        }

        if let Err(e) = execute(command, store, saver, out, clipboard) {
            writeln!(out, "Error: {e}")?;
        }
    }

    Ok(())
}

/// Waits for background saves. A dirty store is queued again first, since a
/// failed write is reported only once and nothing else would retry it. The
/// store stays dirty unless the write went through.
fn save_pending(store: &mut ContactStore, saver: &AutoSaver) -> Result<(), AppError> {
    if store.is_dirty() {
        saver.schedule(store.snapshot())?;
    }

    saver.flush()?;
    store.mark_clean();
    Ok(())
}

fn execute<W: Write>(
    command: ShellCommand,
    store: &mut ContactStore,
    saver: &AutoSaver,
    out: &mut W,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    match command {
        ShellCommand::Add { address, name } => {
            validate_contact(&name, &address)?;

            if store.add(name.clone(), address) {
                saver.schedule(store.snapshot())?;
                writeln!(out, "Contact added successfully")?;
            } else {
                writeln!(out, "A contact named '{}' already exists, nothing added", name)?;
            }
        }
        ShellCommand::List => {
            if store.is_empty() {
                writeln!(out, "No contact yet")?;
            }
            for (i, c) in store.iter().enumerate() {
                writeln!(out, "{}", display_contact(i + 1, c))?;
            }
        }
        ShellCommand::Delete(position) => {
            let idx = resolve_position(store, position)?;
            let removed = store.remove(idx)?;
            saver.schedule(store.snapshot())?;
            writeln!(out, "Contact '{}' deleted successfully", removed.name())?;
        }
        ShellCommand::Copy(position) => {
            let idx = resolve_position(store, position)?;
            copy_address(store, idx, clipboard)?;
            writeln!(out, "Copied address of '{}'", store.get(idx)?.name())?;
        }
        ShellCommand::Send(position) => {
            let idx = resolve_position(store, position)?;
            send_to_contact(store, idx, &mut PrintSendSink::new(&mut *out))?;
        }
        ShellCommand::Save => {
            save_pending(store, saver)?;
            writeln!(out, "Saved")?;
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Exit => {}
    }
    Ok(())
}
