use std::time::Duration;

use log::{debug, info};
use ppcheck_core::error::{Error, Result};

/// Somewhere to put a copied command line.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;

    /// Keeps the last copied text available once the session is over.
    fn hold(&mut self) -> Result<()> {
        Ok(())
    }
}

fn clipboard_error(error: arboard::Error) -> Error {
    Error::Clipboard(error.to_string())
}

/// The system clipboard.
///
/// On Linux the clipboard content lives only as long as its owner, so the
/// connection is kept open for the session and [`ClipboardSink::hold`] serves
/// the last copy until a clipboard manager takes it or `hold_for` runs out.
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
    last_copied: Option<String>,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    hold_for: Duration,
}

impl SystemClipboard {
    pub fn new(hold_for: Duration) -> Self {
        Self {
            clipboard: None,
            last_copied: None,
            hold_for,
        }
    }

    fn connection(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().map_err(clipboard_error)?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.connection()?.set_text(text).map_err(clipboard_error)?;
        self.last_copied = Some(text.to_string());
        debug!("Copied `{text}` to clipboard");
        Ok(())
    }

    #[cfg(target_os = "linux")]
    fn hold(&mut self) -> Result<()> {
        use arboard::SetExtLinux;
        use std::time::Instant;

        let Some(text) = self.last_copied.take() else {
            return Ok(());
        };
        let deadline = Instant::now() + self.hold_for;

        info!("Serving `{text}` on the clipboard for up to {:?}", self.hold_for);
        self.connection()?
            .set()
            .wait_until(deadline)
            .text(text)
            .map_err(clipboard_error)
    }

    #[cfg(not(target_os = "linux"))]
    fn hold(&mut self) -> Result<()> {
        if let Some(text) = self.last_copied.take() {
            info!("`{text}` stays on the clipboard");
        }
        Ok(())
    }
}
