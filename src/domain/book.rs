use super::*;

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// The address book held in memory.
///
/// Contacts keep the order they were loaded or added in, and no two share a
/// name. `names` mirrors the names in `entries` so the uniqueness check does
/// not scan the list.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    entries: Vec<Contact>,
    names: HashSet<String>,
    dirty: bool,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `address,name` lines from `source`.
    ///
    /// A line without a comma, or one that is not valid UTF-8, fails the whole
    /// load with [`AppError::CorruptData`]. Later lines repeating an earlier
    /// name are dropped. The returned store is clean.
    pub fn load<R: BufRead>(source: R) -> Result<Self, AppError> {
        let mut store = Self::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => AppError::CorruptData {
                    line: idx + 1,
                    content: e.to_string(),
                },
                _ => AppError::Io(e),
            })?;

            let Some(contact) = helper::parse_contact_line(&line, idx + 1)? else {
                continue;
            };

            if store.names.contains(contact.name()) {
                debug!(name = contact.name(), line = idx + 1, "skipping duplicate entry");
                continue;
            }

            store.names.insert(contact.name().to_string());
            store.entries.push(contact);
        }

        info!("loaded {} address book entries", store.entries.len());
        Ok(store)
    }

    /// Writes every contact to `sink` in order. Atomic replacement of a file
    /// is up to the storage backend.
    pub fn save<W: Write>(&self, mut sink: W) -> Result<(), AppError> {
        info!("saving {} addresses", self.entries.len());

        let data = helper::serialize_contacts(&self.entries);
        sink.write_all(data.as_bytes())
            .map_err(AppError::persistence)?;
        sink.flush().map_err(AppError::persistence)?;

        Ok(())
    }

    /// Appends a contact unless one with the same name exists.
    pub fn add(&mut self, name: impl Into<String>, address: impl Into<String>) -> bool {
        let name = name.into();

        if self.names.contains(&name) {
            debug!(name = %name, "contact name already taken");
            return false;
        }

        self.names.insert(name.clone());
        self.entries.push(Contact::new(name, address));
        self.dirty = true;
        true
    }

    pub fn remove(&mut self, index: usize) -> Result<Contact, AppError> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }

        let removed = self.entries.remove(index);
        self.names.remove(removed.name());
        self.dirty = true;

        debug!(name = removed.name(), index, "contact removed");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<&Contact, AppError> {
        self.entries
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.entries.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        if !self.contains(name) {
            return None;
        }
        self.entries.iter().position(|c| c.name() == name)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.entries
    }

    /// Owned copy of the contents, for saving after the store moves on.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.entries.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn out_of_range(&self, index: usize) -> AppError {
        AppError::OutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Contact> for ContactStore {
    /// Builds a store the way `load` would: first occurrence of a name wins.
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut store = Self::new();
        for contact in iter {
            if store.names.insert(contact.name().to_string()) {
                store.entries.push(contact);
            }
        }
        store
    }
}
