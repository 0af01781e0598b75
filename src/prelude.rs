pub use crate::cli::{command, run_app};
pub use crate::domain::{
    autosave::AutoSaver,
    contact::{self, Contact},
    ContactStore,
};
pub use crate::errors::{AppError, ErrorKind};
pub use crate::sinks::{ClipboardSink, SendSink, copy_address, send_to_contact};
pub use crate::storage::{self, ContactStorage, FileStorage, MemStorage, StorageMediums};
