pub mod csv_port;
pub mod file;
pub mod memory;

use crate::config;
use crate::domain::{Contact, ContactStore};
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use file::FileStorage;
pub use memory::MemStorage;

/// A place the address book lives between runs.
pub trait ContactStorage: Send {
    fn load(&self) -> Result<ContactStore, AppError>;

    /// Replaces the stored book with `contacts`, in order.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    File,
    Mem,
}

impl StorageMediums {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "file" => Ok(StorageMediums::File),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

/// Picks the backend for `medium`; file storage lives in `data_dir`.
pub fn parse_storage_type(
    medium: StorageMediums,
    data_dir: &Path,
) -> Box<dyn ContactStorage> {
    match medium {
        StorageMediums::File => Box::new(FileStorage::new(config::address_book_path(data_dir))),
        StorageMediums::Mem => Box::new(MemStorage::new()),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_medium() -> Result<(), AppError> {
        assert!(StorageMediums::from("file")?.is_file());
        assert!(StorageMediums::from("FILE")?.is_file());
        assert!(StorageMediums::from("mem")?.is_mem());
        assert!(StorageMediums::from("txt").is_err());
        assert!(StorageMediums::from("json").is_err());
        Ok(())
    }

    #[test]
    fn file_medium_uses_data_dir() {
        let storage = parse_storage_type(StorageMediums::File, Path::new("/tmp/book"));
        assert_eq!(storage.get_medium(), "file");

        let storage = parse_storage_type(StorageMediums::Mem, Path::new("/tmp/book"));
        assert_eq!(storage.get_medium(), "mem");
    }
}
