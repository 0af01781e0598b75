use crate::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 100;

/// A named payment address. Both fields are fixed once the contact exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    address: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        format!(
            "Name must not be empty, must fit on one line and must not exceed {} characters",
            MAX_NAME_LEN
        )
    }

    pub fn address_req() -> String {
        "Address must not be empty and may only contain letters, digits and ':'".to_string()
    }
}

impl Contact {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

pub fn validate_name(name: &str) -> bool {
    // Names are free text, commas included, but a line break would split the record
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && !name.contains(['\n', '\r'])
}

pub fn validate_address(address: &str) -> Result<bool, AppError> {
    // Base58, bech32 and "scheme:payload" style addresses all pass.
    // A comma would break the backing file's first-comma split.
    let re = Regex::new(r"^[A-Za-z0-9:]+$")?;
    Ok(re.is_match(address))
}

/// Checks user input before it reaches the store. The store itself accepts
/// anything; keeping the file parseable is the caller's job.
pub fn validate_contact(name: &str, address: &str) -> Result<(), AppError> {
    if !validate_name(name) {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }

    if !validate_address(address)? {
        return Err(AppError::Validation(ValidationReq::address_req()));
    }

    Ok(())
}

// TEST
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_may_contain_commas() {
        assert!(validate_name("Bob, Jr."));
        assert!(validate_name("Ünïcödé Näme"));
        assert!(!validate_name(""));
        assert!(!validate_name("two\nlines"));
        assert!(!validate_name(&"x".repeat(MAX_NAME_LEN + 1)));
    }

    #[test]
    fn address_validation() -> Result<(), AppError> {
        assert!(validate_address("b1KJ3pvWj9Vx7DPi2SnsBmtUmC9UNPBkfHq")?);
        assert!(validate_address("bitcoin:1A2b3C")?);
        assert!(!validate_address("")?);
        assert!(!validate_address("1A2b,3C")?);
        assert!(!validate_address("1A2b 3C")?);
        Ok(())
    }

    #[test]
    fn validate_contact_reports_requirement() {
        let err = validate_contact("Alice", "bad,address").unwrap_err();
        assert_eq!(
            format!("{}", err),
            format!("Validation failed: {}", ValidationReq::address_req())
        );

        let err = validate_contact("", "1A2b3C").unwrap_err();
        assert!(format!("{}", err).contains("Name must not be empty"));
    }
}
