//! In-process clipboard history with expiring entries.
//!
//! Wraps the platform clipboard behind an injectable
//! [`ClipboardProvider`] and adds an in-memory history of copied
//! items, optional per-entry time-based expiry, and `"copy"` /
//! `"expire"` events with handle-based unsubscription.
//!
//! ```no_run
//! use std::time::Duration;
//! use clipvault::{ClipboardManager, CopyOptions, EVENT_EXPIRE};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), clipvault::ClipboardError> {
//! let manager = ClipboardManager::new();
//! manager
//!     .on(EVENT_EXPIRE, |_, text| println!("expired: {text}"))
//!     .await?;
//! manager
//!     .copy_with(
//!         "secret",
//!         CopyOptions {
//!             key: Some("token".into()),
//!             expires_after: Some(Duration::from_secs(30)),
//!         },
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod manager;
pub mod provider;

pub use manager::{
    ClipboardError, ClipboardManager, ClipboardRecord, CopyOptions, EVENT_COPY, EVENT_EXPIRE,
    ListenerId, ManagerConfig, WriteFailurePolicy,
};
pub use provider::{ClipboardProvider, ProviderError, SystemClipboard};
