use std::path::PathBuf;

use directories::ProjectDirs;
use dotenv::dotenv;

pub const ADDRESS_BOOK_FILE: &str = "addressBook.csv";
pub const DATA_DIR_ENV: &str = "ADDRESS_BOOK_DIR";
pub const LOG_FILE: &str = "addressbook.log";

/// Resolves the settings directory holding the address book.
///
/// An explicit directory wins, then `ADDRESS_BOOK_DIR` (a `.env` file is read
/// first), then the platform data directory, then `./.instance`.
pub fn get_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    dotenv().ok();

    if let Ok(s) = std::env::var(DATA_DIR_ENV) {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("org", "walletbook", "wallet-addressbook") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".instance")
    }
}

pub fn address_book_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(ADDRESS_BOOK_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = get_data_dir(Some(PathBuf::from("/srv/wallet")));

        assert_eq!(dir, PathBuf::from("/srv/wallet"));
        assert_eq!(
            address_book_path(&dir),
            PathBuf::from("/srv/wallet/addressBook.csv")
        );
    }
}
