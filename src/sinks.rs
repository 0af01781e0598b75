use crate::domain::ContactStore;
use crate::errors::AppError;
use std::io::Write;
use tracing::{info, warn};

/// Receives the address of a contact the user wants to pay.
pub trait SendSink {
    fn prepare_for_sending(&mut self, address: &str);
}

/// Places text on a clipboard. Fire and forget.
pub trait ClipboardSink {
    fn set_contents(&mut self, text: &str);
}

/// The desktop clipboard. If the platform has none (headless session), copies
/// are logged and dropped.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_contents(&mut self, text: &str) {
        let Some(clipboard) = self.inner.as_mut() else {
            warn!("no clipboard, dropping copy");
            return;
        };

        if let Err(e) = clipboard.set_text(text) {
            warn!("copy to clipboard failed: {e}");
        }
    }
}

/// Hands the payment target to whatever reads `out`, one address per line,
/// e.g. a wallet's send form fed over a pipe.
pub struct PrintSendSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSendSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SendSink for PrintSendSink<W> {
    fn prepare_for_sending(&mut self, address: &str) {
        if let Err(e) = writeln!(self.out, "{address}") {
            warn!("send flow did not receive address: {e}");
        }
    }
}

/// Hands the address at `index` to the send flow.
pub fn send_to_contact(
    store: &ContactStore,
    index: usize,
    sink: &mut dyn SendSink,
) -> Result<(), AppError> {
    let contact = store.get(index)?;
    info!(name = contact.name(), "preparing payment to contact");

    let address = contact.address().to_string();
    sink.prepare_for_sending(&address);
    Ok(())
}

/// Copies the address at `index` to the clipboard.
pub fn copy_address(
    store: &ContactStore,
    index: usize,
    sink: &mut dyn ClipboardSink,
) -> Result<(), AppError> {
    let address = store.get(index)?.address().to_string();
    sink.set_contents(&address);
    Ok(())
}
