use super::*;

use std::io::Cursor;
use std::sync::Mutex;

/// Keeps the serialized book in memory. Nothing survives the process.
#[derive(Default)]
pub struct MemStorage {
    data: Mutex<String>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing backing-file text.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Mutex::new(data.into()),
        }
    }

    pub fn data(&self) -> String {
        self.data
            .lock()
            .map(|data| data.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ContactStorage for MemStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        ContactStore::load(Cursor::new(self.data()))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let serialized = crate::helper::serialize_contacts(contacts);
        let mut data = self
            .data
            .lock()
            .map_err(|e| AppError::persistence(e.to_string()))?;
        *data = serialized;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
