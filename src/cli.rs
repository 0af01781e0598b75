pub mod command;
pub mod run;
pub mod shell;

use crate::domain::{Contact, ContactStore};
use crate::errors::AppError;

pub use run::run_app;

/// One row of a listing. `position` is what the user types back to select it.
pub fn display_contact(position: usize, contact: &Contact) -> String {
    format!("{position:>3}. {:<30} {}", contact.name(), contact.address())
}

/// Turns a 1-based position typed by the user into a store index.
pub fn resolve_position(store: &ContactStore, position: usize) -> Result<usize, AppError> {
    if position == 0 || position > store.count() {
        return Err(AppError::OutOfRange {
            index: position,
            len: store.count(),
        });
    }
    Ok(position - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_row_format() {
        let contact = Contact::new("Bob, Jr.", "4D5e6F");

        let row = display_contact(2, &contact);

        assert!(row.starts_with("  2. Bob, Jr. "));
        assert!(row.ends_with(" 4D5e6F"));
        // Names are padded to a 30 column field
        assert_eq!(row.len(), 5 + 30 + 1 + 6);
    }

    #[test]
    fn positions_are_one_based() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        store.add("Alice", "1A2b3C");
        store.add("Bob", "4D5e6F");

        assert_eq!(resolve_position(&store, 1)?, 0);
        assert_eq!(resolve_position(&store, 2)?, 1);
        assert!(resolve_position(&store, 0).is_err());
        assert!(matches!(
            resolve_position(&store, 3),
            Err(AppError::OutOfRange { index: 3, len: 2 })
        ));
        Ok(())
    }
}
