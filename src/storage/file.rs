use super::*;

use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{error, info};

/// The address book's backing file: `address,name` per line.
pub struct FileStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "file".to_string(),
            path: path.into(),
        }
    }

    fn write_atomic(&self, data: &[u8]) -> Result<(), AppError> {
        create_file_parent(&self.path).map_err(AppError::persistence)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // Write beside the target, then rename over it, so readers see either
        // the old book or the new one
        let mut tmp = NamedTempFile::new_in(&dir).map_err(AppError::persistence)?;
        tmp.write_all(data).map_err(AppError::persistence)?;
        tmp.as_file().sync_all().map_err(AppError::persistence)?;
        tmp.persist(&self.path).map_err(AppError::persistence)?;

        Ok(())
    }
}

impl ContactStorage for FileStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no address book yet");
                return Ok(ContactStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        ContactStore::load(BufReader::new(file))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        info!("saving {} addresses to {}", contacts.len(), self.path.display());

        let data = crate::helper::serialize_contacts(contacts);
        self.write_atomic(data.as_bytes()).inspect_err(|e| {
            error!("saving address book failed: {e}");
        })
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
