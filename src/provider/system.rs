//! System clipboard provider — read/write via `arboard`.
//!
//! Wraps an [`arboard::Clipboard`] handle behind a mutex: the handle
//! itself is `Send` but not `Sync`, and the trait requires shared
//! access from async task contexts.

use std::sync::Mutex;

use super::{ClipboardProvider, ProviderError};

/// `arboard`-backed implementation of [`ClipboardProvider`].
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Open the platform clipboard, or `None` where no clipboard
    /// capability exists (headless session, unsupported platform).
    pub fn probe() -> Option<Self> {
        arboard::Clipboard::new()
            .map(|clipboard| Self {
                inner: Mutex::new(clipboard),
            })
            .ok()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ProviderError> {
        let mut clipboard = self
            .inner
            .lock()
            .map_err(|_| ProviderError::Write("clipboard handle poisoned".into()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ProviderError::Write(e.to_string()))
    }

    fn read(&self) -> Result<String, ProviderError> {
        let mut clipboard = self
            .inner
            .lock()
            .map_err(|_| ProviderError::Read("clipboard handle poisoned".into()))?;
        clipboard
            .get_text()
            .map_err(|e| ProviderError::Read(e.to_string()))
    }
}
