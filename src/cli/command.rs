use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", version, about = "Wallet address book")]
pub struct Cli {
    /// Directory holding addressBook.csv
    #[arg(long, env = "ADDRESS_BOOK_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name, may contain commas
        #[arg(long)]
        name: String,

        /// Payment address
        #[arg(long)]
        address: String,
    },
    /// List contacts in address book order
    List,
    /// Delete a contact by position or by name
    Delete {
        /// Position as shown by `list`
        #[arg(long, conflicts_with = "name")]
        index: Option<usize>,

        /// Exact contact name
        #[arg(long)]
        name: Option<String>,
    },
    /// Copy a contact's address to the clipboard
    Copy {
        /// Position as shown by `list`
        #[arg(long)]
        index: usize,
    },
    /// Print a contact's address for the send flow
    Send {
        /// Position as shown by `list`
        #[arg(long)]
        index: usize,
    },
    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path (or directory) for the export file
        #[arg(short, long)]
        des: PathBuf,
    },
    /// Interactive session; saves happen in the background
    Shell,
}
