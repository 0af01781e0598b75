use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    CorruptData { line: usize, content: String },
    OutOfRange { index: usize, len: usize },
    PersistenceFailure(String),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Validation(String),
    Csv(csv::Error),
}

/// Coarse classification of [`AppError`], for callers that only care which
/// family a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    CorruptData,
    OutOfRange,
    PersistenceFailure,
    NotFound,
    Input,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_) => ErrorKind::Io,
            AppError::CorruptData { .. } => ErrorKind::CorruptData,
            AppError::OutOfRange { .. } => ErrorKind::OutOfRange,
            AppError::PersistenceFailure(_) => ErrorKind::PersistenceFailure,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ParseCommand(_)
            | AppError::ParseInt(_)
            | AppError::Validation(_)
            | AppError::Csv(_) => ErrorKind::Input,
        }
    }

    pub fn persistence(err: impl fmt::Display) -> Self {
        AppError::PersistenceFailure(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::CorruptData { line, content } => {
                write!(
                    f,
                    "Address book is corrupt: line {} has no separator: '{}'",
                    line, content
                )
            }
            AppError::OutOfRange { index, len } => {
                write!(f, "No contact at position {} (address book has {})", index, len)
            }
            AppError::PersistenceFailure(msg) => {
                write!(f, "Saving address book failed: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {}
