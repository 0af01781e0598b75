pub mod autosave;
pub mod book;
pub mod contact;

use crate::errors::AppError;
use crate::helper;

pub use book::ContactStore;
pub use contact::Contact;
