//! History state — copy records, identity-based removal, capacity bound.
//!
//! All methods are pure state transitions with no I/O. Timestamps are
//! supplied by the caller so transitions stay deterministic under test.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Stable identity for a history record.
///
/// Monotonically increasing counter. Expiry triggers carry a
/// `RecordId` so that removal matches exactly the record that armed
/// the trigger, never a later entry that happens to share its key or
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// One copy operation stored in history.
///
/// Records are immutable once inserted; they leave history only
/// through expiry, an explicit clear, or capacity eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardRecord {
    /// Internal identity used for expiry matching.
    #[serde(skip)]
    pub(crate) id: RecordId,
    /// Caller-supplied label. Uniqueness is not enforced; key lookup
    /// returns the first match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Textual payload, absent for payload-only records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Opaque binary payload, absent for text records.
    #[serde(skip_serializing_if = "Option::is_none", with = "serde_bytes")]
    pub payload: Option<Vec<u8>>,
    /// Unix epoch milliseconds at insertion time.
    pub created_at: u64,
}

/// How a rejected clipboard write is surfaced to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteFailurePolicy {
    /// Fail the copy operation with `ClipboardError::WriteFailed`.
    #[default]
    Propagate,
    /// Log the failure and report success. Nothing is appended to
    /// history and no event fires.
    LogOnly,
}

/// Manager configuration.
#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    /// Policy for rejected clipboard writes.
    pub write_failures: WriteFailurePolicy,
    /// Optional bound on history size. When full, the oldest entry is
    /// silently evicted on append. `None` means unbounded.
    pub max_entries: Option<usize>,
}

/// Ordered history of copy records, oldest at the front.
///
/// Owned exclusively by the manager loop. Callers only ever receive
/// cloned snapshots.
#[derive(Debug, Default)]
pub struct HistoryState {
    entries: VecDeque<ClipboardRecord>,
    max_entries: Option<usize>,
}

impl HistoryState {
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Append a new record, evicting the oldest entry if the history
    /// is at capacity. Returns the identity of the inserted record.
    pub fn push(
        &mut self,
        key: Option<String>,
        text: Option<String>,
        payload: Option<Vec<u8>>,
        created_at: u64,
    ) -> RecordId {
        if let Some(max) = self.max_entries {
            while self.entries.len() >= max.max(1) {
                self.entries.pop_front();
            }
        }
        let id = RecordId::new();
        self.entries.push_back(ClipboardRecord {
            id,
            key,
            text,
            payload,
            created_at,
        });
        id
    }

    /// Remove the record with the given identity, returning it if it
    /// was still present. Idempotent — a record already gone (cleared,
    /// evicted, expired) yields `None`.
    pub fn remove(&mut self, id: RecordId) -> Option<ClipboardRecord> {
        let index = self.entries.iter().position(|r| r.id == id)?;
        self.entries.remove(index)
    }

    /// Drop every record. Pending expiry triggers are unaffected and
    /// later fire as no-ops.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cloned snapshot of the full history in insertion order.
    pub fn snapshot(&self) -> Vec<ClipboardRecord> {
        self.entries.iter().cloned().collect()
    }

    /// First record whose key equals `key`, if any.
    pub fn find_by_key(&self, key: &str) -> Option<ClipboardRecord> {
        self.entries
            .iter()
            .find(|r| r.key.as_deref() == Some(key))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
