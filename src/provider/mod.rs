//! Clipboard capability abstraction — pluggable platform adapters.
//!
//! All platform-specific clipboard access lives behind the
//! [`ClipboardProvider`] trait. The manager never touches the system
//! clipboard directly; it is handed a provider at construction, which
//! also makes the capability substitutable in tests.

pub mod system;

pub use system::SystemClipboard;

/// Errors returned by clipboard providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Clipboard write was rejected (e.g. selection owner gone,
    /// platform denied access).
    #[error("write: {0}")]
    Write(String),

    /// Clipboard read was rejected (e.g. empty selection, non-text
    /// content, platform denied access).
    #[error("read: {0}")]
    Read(String),
}

/// Reads and writes the system clipboard.
///
/// Platform adapters implement this trait to abstract clipboard access.
/// The manager loop delegates all clipboard I/O to its injected
/// provider instead of manipulating platform mechanisms directly.
///
/// `Send + Sync` is required because the manager invokes clipboard
/// operations from an async task context.
pub trait ClipboardProvider: Send + Sync {
    /// Set the system clipboard content to the given text.
    fn write(&self, text: &str) -> Result<(), ProviderError>;

    /// Read the current system clipboard content as text.
    fn read(&self) -> Result<String, ProviderError>;
}
