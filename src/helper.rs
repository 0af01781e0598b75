use crate::domain::Contact;
use crate::errors::AppError;

pub const FIELD_SEPARATOR: char = ',';

/// Renders contacts in backing-file form, one `address,name` line each.
pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        data.push_str(contact.address());
        data.push(FIELD_SEPARATOR);
        data.push_str(contact.name());
        data.push('\n');
    }
    data
}

/// Parses one backing-file line. `line_no` is 1-based and only used for the
/// error. Blank lines yield `None`.
///
/// One trailing `\r` is dropped so CRLF files load. A name that itself ends
/// in `\r` therefore comes back without it after a save and reload.
pub fn parse_contact_line(line: &str, line_no: usize) -> Result<Option<Contact>, AppError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.is_empty() {
        return Ok(None);
    }

    // Everything after the first comma is the name, so names may hold commas
    match line.split_once(FIELD_SEPARATOR) {
        Some((address, name)) => Ok(Some(Contact::new(name, address))),
        None => Err(AppError::CorruptData {
            line: line_no,
            content: line.to_string(),
        }),
    }
}
