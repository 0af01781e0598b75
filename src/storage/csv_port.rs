use super::*;

use csv::{Reader, Writer};
use std::path::PathBuf;

const EXPORT_FILE_NAME: &str = "addressBook-export.csv";

/// Writes `contacts` as quoted CSV with a `name,address` header.
///
/// `des` may be a directory, in which case a default file name is used inside
/// it. Returns the path written and the number of records.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: &Path,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = des.to_path_buf();

    if file_path.is_dir() {
        file_path = file_path.join(EXPORT_FILE_NAME);
    } else if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}

/// Reads contacts written by [`export_contacts_to_csv`] (or any CSV with
/// `name` and `address` columns).
pub fn import_contacts_from_csv(src: &Path) -> Result<Vec<Contact>, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if src.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(src)?;

    let mut contacts = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let record: Contact = result?;

        if record.name().is_empty() || record.address().is_empty() {
            // Header is row 1
            return Err(AppError::Validation(format!(
                "CSV row {} has an empty name or address",
                idx + 2
            )));
        }
        contacts.push(record);
    }

    Ok(contacts)
}
