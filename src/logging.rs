use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::{
    self, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::LOG_FILE;
use crate::errors::AppError;

/// Sends tracing output to `<data_dir>/addressbook.log`. `RUST_LOG` adds
/// directives on top of the crate's default `info` level.
pub fn init(data_dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let directive: Directive = "wallet_addressbook=info"
        .parse()
        .map_err(|e| AppError::Validation(format!("bad log directive: {e}")))?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::from_default_env().add_directive(directive));

    // A subscriber may already be set (tests, embedding apps); keep theirs
    let _ = tracing_subscriber::registry()
        .with(file_subscriber)
        .try_init();

    Ok(())
}
