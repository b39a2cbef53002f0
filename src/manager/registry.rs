//! Listener registry — event name to ordered callbacks.
//!
//! Event names are an open set of strings; [`EVENT_COPY`] and
//! [`EVENT_EXPIRE`] are the two the manager itself fires. Listeners
//! are invoked in registration order, synchronously, from the manager
//! loop. Each registration yields a [`ListenerId`] handle for removal.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fired after a successful text copy, with the copied text.
pub const EVENT_COPY: &str = "copy";

/// Fired when an expiry trigger removes a record, with the record's
/// text (empty string for payload-only records).
pub const EVENT_EXPIRE: &str = "expire";

/// Callback invoked with `(event_name, data)`.
pub type EventCallback = Box<dyn Fn(&str, &str) + Send>;

/// Handle identifying one registration.
///
/// Monotonically increasing counter, unique across all event names,
/// so removal needs only the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Mapping from event name to its listeners, in registration order.
///
/// Owned exclusively by the manager loop. Duplicate registrations of
/// an equivalent callback are distinct entries and fire separately.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<String, Vec<(ListenerId, EventCallback)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for an event. Returns its removal handle.
    pub fn subscribe(&mut self, event: String, callback: EventCallback) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.entry(event).or_default().push((id, callback));
        id
    }

    /// Remove a listener by handle. Idempotent — returns whether the
    /// listener was still registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for callbacks in self.listeners.values_mut() {
            if let Some(index) = callbacks.iter().position(|(entry, _)| *entry == id) {
                callbacks.remove(index);
                return true;
            }
        }
        false
    }

    /// Invoke every listener for `event`, in registration order.
    /// Events with no listeners are a no-op.
    pub fn notify(&self, event: &str, data: &str) {
        if let Some(callbacks) = self.listeners.get(event) {
            for (_, callback) in callbacks {
                callback(event, data);
            }
        }
    }

    /// Number of listeners registered for an event.
    #[cfg(test)]
    fn count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}
