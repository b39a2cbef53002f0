//! Clipboard manager — history, expiry, and events over an injected
//! clipboard capability.
//!
//! Architecture: channel-based actor. A single spawned loop owns all
//! mutable state ([`state::HistoryState`], [`registry::ListenerRegistry`],
//! the provider). Handle methods send a command with a oneshot reply
//! channel and await the reply, so history mutation and listener
//! dispatch are serialized, and listeners for an operation finish
//! before that operation's result reaches its caller.
//!
//! Expiry is a one-shot trigger per record: a spawned task sleeps for
//! the configured delay, then sends an internal `Expire` command back
//! to the loop through a weak sender. Removal is identity-based and
//! idempotent, so a trigger firing after the record is gone is a no-op.

pub mod registry;
pub mod state;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::{mpsc, oneshot};

use crate::provider::{ClipboardProvider, ProviderError, SystemClipboard};

pub use registry::{EVENT_COPY, EVENT_EXPIRE, EventCallback, ListenerId};
pub use state::{ClipboardRecord, ManagerConfig, WriteFailurePolicy};

use registry::ListenerRegistry;
use state::{HistoryState, RecordId};

/// Errors surfaced by manager operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The text to copy was empty.
    #[error("Text is required to copy to clipboard.")]
    EmptyText,

    /// No clipboard capability exists in this environment.
    #[error("clipboard capability is not available in this environment")]
    Unavailable,

    /// The clipboard write was rejected. Only surfaced under
    /// [`WriteFailurePolicy::Propagate`].
    #[error("clipboard write failed: {0}")]
    WriteFailed(ProviderError),

    /// The clipboard read was rejected.
    #[error("clipboard read failed: {0}")]
    ReadFailed(ProviderError),

    /// The manager loop has stopped.
    #[error("clipboard manager stopped")]
    Closed,
}

/// Per-copy options.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// History key for later [`ClipboardManager::lookup`].
    pub key: Option<String>,
    /// Remove the entry from history after this delay. `None` or a
    /// zero duration means the entry never expires.
    pub expires_after: Option<Duration>,
}

/// Command sent from a handle to the manager loop.
enum Command {
    Copy {
        text: String,
        options: CopyOptions,
        reply: oneshot::Sender<Result<(), ClipboardError>>,
    },
    CopyFile {
        payload: Vec<u8>,
        key: Option<String>,
        reply: oneshot::Sender<()>,
    },
    Paste {
        reply: oneshot::Sender<Result<String, ClipboardError>>,
    },
    History {
        reply: oneshot::Sender<Vec<ClipboardRecord>>,
    },
    Lookup {
        key: String,
        reply: oneshot::Sender<Option<ClipboardRecord>>,
    },
    Subscribe {
        event: String,
        callback: EventCallback,
        reply: oneshot::Sender<ListenerId>,
    },
    Unsubscribe {
        id: ListenerId,
        reply: oneshot::Sender<bool>,
    },
    Clear {
        reply: oneshot::Sender<()>,
    },
    /// Internal — sent by an expiry trigger task.
    Expire { id: RecordId },
}

/// Handle to a running clipboard manager.
///
/// Cheap to clone; all clones address the same loop and state. The
/// loop stops once every handle is dropped (pending expiry triggers
/// hold only weak senders and do not keep it alive).
#[derive(Clone)]
pub struct ClipboardManager {
    cmd_tx: mpsc::UnboundedSender<Command>,
    supported: bool,
}

impl ClipboardManager {
    /// Probe the system clipboard and run with the default
    /// configuration. Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Probe the system clipboard and run with a custom configuration.
    pub fn with_config(config: ManagerConfig) -> Self {
        match SystemClipboard::probe() {
            Some(provider) => Self::spawn(Some(Box::new(provider)), config),
            None => Self::spawn(None, config),
        }
    }

    /// Run with an explicitly injected clipboard provider. This is the
    /// seam tests use to substitute the capability.
    pub fn with_provider(
        provider: impl ClipboardProvider + 'static,
        config: ManagerConfig,
    ) -> Self {
        Self::spawn(Some(Box::new(provider)), config)
    }

    /// Run without any clipboard capability: [`Self::is_supported`]
    /// reports `false` and clipboard operations fail with
    /// [`ClipboardError::Unavailable`]. History and events still work.
    pub fn without_provider(config: ManagerConfig) -> Self {
        Self::spawn(None, config)
    }

    fn spawn(provider: Option<Box<dyn ClipboardProvider>>, config: ManagerConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let supported = provider.is_some();
        let manager_loop = ManagerLoop {
            history: HistoryState::new(config.max_entries),
            listeners: ListenerRegistry::new(),
            provider,
            config,
            timer_tx: cmd_tx.downgrade(),
        };
        tokio::spawn(manager_loop.run(cmd_rx));
        Self { cmd_tx, supported }
    }

    /// Copy text to the clipboard with default options.
    pub async fn copy(&self, text: impl Into<String>) -> Result<(), ClipboardError> {
        self.copy_with(text, CopyOptions::default()).await
    }

    /// Copy text to the clipboard, append it to history, and notify
    /// `"copy"` listeners.
    ///
    /// # Errors
    ///
    /// - [`ClipboardError::EmptyText`] for empty input (checked before
    ///   the capability probe).
    /// - [`ClipboardError::Unavailable`] without a clipboard capability.
    /// - [`ClipboardError::WriteFailed`] when the write is rejected and
    ///   the policy is [`WriteFailurePolicy::Propagate`]. Under
    ///   [`WriteFailurePolicy::LogOnly`] the rejection is logged, the
    ///   call succeeds, and nothing is appended to history.
    pub async fn copy_with(
        &self,
        text: impl Into<String>,
        options: CopyOptions,
    ) -> Result<(), ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Copy {
            text: text.into(),
            options,
            reply,
        })?;
        rx.await.map_err(|_| ClipboardError::Closed)?
    }

    /// Store an opaque payload in history without touching the
    /// clipboard capability. Best-effort: failures are logged, never
    /// surfaced, and no event fires.
    pub async fn copy_file(&self, payload: Vec<u8>, key: Option<String>) {
        let (reply, rx) = oneshot::channel();
        if self
            .send(Command::CopyFile {
                payload,
                key,
                reply,
            })
            .is_err()
        {
            tracing::warn!("manager stopped, file payload dropped");
            return;
        }
        let _ = rx.await;
    }

    /// Read the current clipboard text. Does not consult or mutate
    /// history.
    ///
    /// # Errors
    ///
    /// [`ClipboardError::Unavailable`] without a capability,
    /// [`ClipboardError::ReadFailed`] when the read is rejected.
    pub async fn paste(&self) -> Result<String, ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Paste { reply })?;
        rx.await.map_err(|_| ClipboardError::Closed)?
    }

    /// Cloned snapshot of the full history in insertion order.
    /// Mutating the returned vector does not affect internal state.
    pub async fn history(&self) -> Result<Vec<ClipboardRecord>, ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::History { reply })?;
        rx.await.map_err(|_| ClipboardError::Closed)
    }

    /// First history record with the given key, if any.
    pub async fn lookup(
        &self,
        key: impl Into<String>,
    ) -> Result<Option<ClipboardRecord>, ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Lookup {
            key: key.into(),
            reply,
        })?;
        rx.await.map_err(|_| ClipboardError::Closed)
    }

    /// Register a listener for an event. Listeners fire in
    /// registration order; registering the same callback twice fires
    /// it twice. Returns a handle for [`Self::off`].
    pub async fn on(
        &self,
        event: impl Into<String>,
        callback: impl Fn(&str, &str) + Send + 'static,
    ) -> Result<ListenerId, ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Subscribe {
            event: event.into(),
            callback: Box::new(callback),
            reply,
        })?;
        rx.await.map_err(|_| ClipboardError::Closed)
    }

    /// Remove a listener by handle. Idempotent — returns whether it
    /// was still registered.
    pub async fn off(&self, id: ListenerId) -> Result<bool, ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Unsubscribe { id, reply })?;
        rx.await.map_err(|_| ClipboardError::Closed)
    }

    /// Empty the history immediately. Pending expiry triggers are not
    /// cancelled; they later fire as no-ops.
    pub async fn clear_history(&self) -> Result<(), ClipboardError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Clear { reply })?;
        rx.await.map_err(|_| ClipboardError::Closed)
    }

    /// Whether a clipboard capability was present at construction.
    /// Pure probe, no side effects.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    fn send(&self, command: Command) -> Result<(), ClipboardError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| ClipboardError::Closed)
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

/// The manager loop — sole owner of history, listeners, and provider.
struct ManagerLoop {
    history: HistoryState,
    listeners: ListenerRegistry,
    provider: Option<Box<dyn ClipboardProvider>>,
    config: ManagerConfig,
    /// Weak sender handed to expiry trigger tasks.
    timer_tx: mpsc::WeakUnboundedSender<Command>,
}

impl ManagerLoop {
    async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<Command>) {
        tracing::debug!("clipboard manager started");
        while let Some(command) = cmd_rx.recv().await {
            self.handle(command);
        }
        tracing::debug!("clipboard manager stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Copy {
                text,
                options,
                reply,
            } => {
                let _ = reply.send(self.copy(text, options));
            }
            Command::CopyFile {
                payload,
                key,
                reply,
            } => {
                let bytes = payload.len();
                self.history.push(key, None, Some(payload), now_millis());
                tracing::debug!(bytes, "file payload added to history");
                let _ = reply.send(());
            }
            Command::Paste { reply } => {
                let _ = reply.send(self.paste());
            }
            Command::History { reply } => {
                let _ = reply.send(self.history.snapshot());
            }
            Command::Lookup { key, reply } => {
                let _ = reply.send(self.history.find_by_key(&key));
            }
            Command::Subscribe {
                event,
                callback,
                reply,
            } => {
                let _ = reply.send(self.listeners.subscribe(event, callback));
            }
            Command::Unsubscribe { id, reply } => {
                let _ = reply.send(self.listeners.unsubscribe(id));
            }
            Command::Clear { reply } => {
                self.history.clear();
                tracing::debug!("clipboard history cleared");
                let _ = reply.send(());
            }
            Command::Expire { id } => self.expire(id),
        }
    }

    fn copy(&mut self, text: String, options: CopyOptions) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }
        let provider = self
            .provider
            .as_deref()
            .ok_or(ClipboardError::Unavailable)?;

        if let Err(e) = provider.write(&text) {
            match self.config.write_failures {
                WriteFailurePolicy::Propagate => return Err(ClipboardError::WriteFailed(e)),
                WriteFailurePolicy::LogOnly => {
                    tracing::error!(error = %e, "clipboard write failed");
                    return Ok(());
                }
            }
        }

        let id = self
            .history
            .push(options.key, Some(text.clone()), None, now_millis());
        if let Some(delay) = options.expires_after.filter(|d| !d.is_zero()) {
            self.arm_expiry(id, delay);
        }
        tracing::debug!(bytes = text.len(), "copied to clipboard");
        self.listeners.notify(EVENT_COPY, &text);
        Ok(())
    }

    fn paste(&self) -> Result<String, ClipboardError> {
        let provider = self
            .provider
            .as_deref()
            .ok_or(ClipboardError::Unavailable)?;
        let text = provider.read().map_err(ClipboardError::ReadFailed)?;
        tracing::debug!(bytes = text.len(), "pasted from clipboard");
        Ok(text)
    }

    /// Arm a one-shot expiry trigger. The task holds only a weak
    /// sender, so pending triggers never keep a dropped manager alive.
    fn arm_expiry(&self, id: RecordId, delay: Duration) {
        let timer_tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(tx) = timer_tx.upgrade() {
                let _ = tx.send(Command::Expire { id });
            }
        });
    }

    fn expire(&mut self, id: RecordId) {
        // The record may already be gone (cleared, evicted, or removed
        // by an earlier trigger) — then this is a no-op with no event.
        if let Some(record) = self.history.remove(id) {
            let text = record.text.as_deref().unwrap_or("");
            tracing::debug!(key = record.key.as_deref(), "expired clipboard record removed");
            self.listeners.notify(EVENT_EXPIRE, text);
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test double for the clipboard capability. The cell is shared so
    /// tests can observe and seed clipboard content from outside.
    #[derive(Default)]
    struct MockClipboard {
        cell: Arc<Mutex<Option<String>>>,
        fail_writes: bool,
        fail_reads: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn write(&self, text: &str) -> Result<(), ProviderError> {
            if self.fail_writes {
                return Err(ProviderError::Write("simulated rejection".into()));
            }
            *self.cell.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        fn read(&self) -> Result<String, ProviderError> {
            if self.fail_reads {
                return Err(ProviderError::Read("simulated rejection".into()));
            }
            self.cell
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| ProviderError::Read("clipboard empty".into()))
        }
    }

    fn manager() -> (ClipboardManager, Arc<Mutex<Option<String>>>) {
        let mock = MockClipboard::default();
        let cell = Arc::clone(&mock.cell);
        (
            ClipboardManager::with_provider(mock, ManagerConfig::default()),
            cell,
        )
    }

    type EventLog = Arc<Mutex<Vec<String>>>;

    fn recorder(log: &EventLog) -> impl Fn(&str, &str) + Send + 'static {
        let log = Arc::clone(log);
        move |event, data| log.lock().unwrap().push(format!("{event}:{data}"))
    }

    // -- Copy --

    #[tokio::test]
    async fn copy_writes_through_and_appends_history() {
        let (m, cell) = manager();
        m.copy("Hello, world!").await.unwrap();

        assert_eq!(cell.lock().unwrap().as_deref(), Some("Hello, world!"));
        let history = m.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text.as_deref(), Some("Hello, world!"));
        assert!(history[0].created_at > 0);
    }

    #[tokio::test]
    async fn copy_empty_text_rejected() {
        let (m, _cell) = manager();
        let err = m.copy("").await.unwrap_err();
        assert!(matches!(err, ClipboardError::EmptyText));
        assert_eq!(err.to_string(), "Text is required to copy to clipboard.");
        assert!(m.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_text_checked_before_capability() {
        let m = ClipboardManager::without_provider(ManagerConfig::default());
        assert!(matches!(m.copy("").await, Err(ClipboardError::EmptyText)));
    }

    #[tokio::test]
    async fn copy_notifies_listeners_in_order() {
        let (m, _cell) = manager();
        let log: EventLog = Arc::default();
        {
            let log = Arc::clone(&log);
            m.on(EVENT_COPY, move |event, data| {
                log.lock().unwrap().push(format!("first/{event}:{data}"));
            })
            .await
            .unwrap();
        }
        {
            let log = Arc::clone(&log);
            m.on(EVENT_COPY, move |event, data| {
                log.lock().unwrap().push(format!("second/{event}:{data}"));
            })
            .await
            .unwrap();
        }

        m.copy("Hello, world!").await.unwrap();

        // Notification completes before copy() returns, so no wait.
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first/copy:Hello, world!", "second/copy:Hello, world!"]
        );
    }

    #[tokio::test]
    async fn duplicate_listeners_fire_twice() {
        let (m, _cell) = manager();
        let log: EventLog = Arc::default();
        m.on(EVENT_COPY, recorder(&log)).await.unwrap();
        m.on(EVENT_COPY, recorder(&log)).await.unwrap();

        m.copy("x").await.unwrap();

        assert_eq!(log.lock().unwrap().len(), 2);
    }

    // -- Capability --

    #[tokio::test]
    async fn missing_capability_fails_copy_and_paste() {
        let m = ClipboardManager::without_provider(ManagerConfig::default());
        assert!(!m.is_supported());
        assert!(matches!(m.copy("x").await, Err(ClipboardError::Unavailable)));
        assert!(matches!(m.paste().await, Err(ClipboardError::Unavailable)));
    }

    #[tokio::test]
    async fn injected_capability_reports_supported() {
        let (m, _cell) = manager();
        assert!(m.is_supported());
    }

    // -- Write failures --

    #[tokio::test]
    async fn write_failure_propagates_by_default() {
        let mock = MockClipboard {
            fail_writes: true,
            ..Default::default()
        };
        let m = ClipboardManager::with_provider(mock, ManagerConfig::default());

        let err = m.copy("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::WriteFailed(_)));
        assert!(m.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_failure_swallowed_under_log_only() {
        let mock = MockClipboard {
            fail_writes: true,
            ..Default::default()
        };
        let config = ManagerConfig {
            write_failures: WriteFailurePolicy::LogOnly,
            ..Default::default()
        };
        let m = ClipboardManager::with_provider(mock, config);
        let log: EventLog = Arc::default();
        m.on(EVENT_COPY, recorder(&log)).await.unwrap();

        // Caller sees success, but nothing was appended and no event fired.
        m.copy("x").await.unwrap();
        assert!(m.history().await.unwrap().is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    // -- Paste --

    #[tokio::test]
    async fn paste_reads_text_without_touching_history() {
        let (m, cell) = manager();
        *cell.lock().unwrap() = Some("from elsewhere".into());

        assert_eq!(m.paste().await.unwrap(), "from elsewhere");
        assert!(m.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn paste_read_failure_propagates() {
        let mock = MockClipboard {
            fail_reads: true,
            ..Default::default()
        };
        let m = ClipboardManager::with_provider(mock, ManagerConfig::default());
        assert!(matches!(m.paste().await, Err(ClipboardError::ReadFailed(_))));
    }

    // -- Expiry --

    #[tokio::test]
    async fn expiry_removes_record_and_fires_event_once() {
        let (m, _cell) = manager();
        let log: EventLog = Arc::default();
        m.on(EVENT_EXPIRE, recorder(&log)).await.unwrap();

        m.copy_with(
            "short-lived",
            CopyOptions {
                key: None,
                expires_after: Some(Duration::from_millis(40)),
            },
        )
        .await
        .unwrap();
        assert_eq!(m.history().await.unwrap().len(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(m.history().await.unwrap().is_empty());
        assert_eq!(*log.lock().unwrap(), vec!["expire:short-lived"]);
    }

    #[tokio::test]
    async fn zero_expiry_means_no_expiry() {
        let (m, _cell) = manager();
        m.copy_with(
            "durable",
            CopyOptions {
                key: None,
                expires_after: Some(Duration::ZERO),
            },
        )
        .await
        .unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(m.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clear_then_pending_trigger_is_noop() {
        let (m, _cell) = manager();
        let log: EventLog = Arc::default();
        m.on(EVENT_EXPIRE, recorder(&log)).await.unwrap();

        m.copy_with(
            "cleared first",
            CopyOptions {
                key: None,
                expires_after: Some(Duration::from_millis(40)),
            },
        )
        .await
        .unwrap();
        m.clear_history().await.unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        // The trigger fired against an absent record: no event, no panic.
        assert!(m.history().await.unwrap().is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    // -- History access --

    #[tokio::test]
    async fn history_snapshot_is_structurally_independent() {
        let (m, _cell) = manager();
        m.copy("stable").await.unwrap();

        let mut snapshot = m.history().await.unwrap();
        snapshot.clear();

        assert_eq!(m.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookup_by_key() {
        let (m, _cell) = manager();
        m.copy_with(
            "secret",
            CopyOptions {
                key: Some("token".into()),
                expires_after: None,
            },
        )
        .await
        .unwrap();

        let record = m.lookup("token").await.unwrap().unwrap();
        assert_eq!(record.text.as_deref(), Some("secret"));
        assert!(m.lookup("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn capacity_bound_evicts_oldest() {
        let mock = MockClipboard::default();
        let config = ManagerConfig {
            max_entries: Some(2),
            ..Default::default()
        };
        let m = ClipboardManager::with_provider(mock, config);

        m.copy("a").await.unwrap();
        m.copy("b").await.unwrap();
        m.copy("c").await.unwrap();

        let history = m.history().await.unwrap();
        let texts: Vec<_> = history.iter().map(|r| r.text.as_deref()).collect();
        assert_eq!(texts, vec![Some("b"), Some("c")]);
    }

    // -- copy_file --

    #[tokio::test]
    async fn copy_file_stores_payload_without_clipboard_write() {
        let (m, cell) = manager();
        let log: EventLog = Arc::default();
        m.on(EVENT_COPY, recorder(&log)).await.unwrap();

        m.copy_file(vec![1, 2, 3], Some("blob".into())).await;

        assert!(cell.lock().unwrap().is_none());
        assert!(log.lock().unwrap().is_empty());
        let record = m.lookup("blob").await.unwrap().unwrap();
        assert_eq!(record.payload.as_deref(), Some([1, 2, 3].as_slice()));
        assert!(record.text.is_none());
    }

    // -- Unsubscription --

    #[tokio::test]
    async fn off_stops_delivery() {
        let (m, _cell) = manager();
        let log: EventLog = Arc::default();
        let id = m.on(EVENT_COPY, recorder(&log)).await.unwrap();

        assert!(m.off(id).await.unwrap());
        m.copy("unheard").await.unwrap();

        assert!(log.lock().unwrap().is_empty());
        assert!(!m.off(id).await.unwrap());
    }

    // -- Loop internals --

    fn test_loop() -> ManagerLoop {
        let (tx, _rx) = mpsc::unbounded_channel();
        ManagerLoop {
            history: HistoryState::new(None),
            listeners: ListenerRegistry::new(),
            provider: None,
            config: ManagerConfig::default(),
            timer_tx: tx.downgrade(),
        }
    }

    #[test]
    fn expire_without_text_notifies_empty_string() {
        let mut manager_loop = test_loop();
        let id = manager_loop
            .history
            .push(Some("blob".into()), None, Some(vec![1]), 1000);

        let log: EventLog = Arc::default();
        manager_loop
            .listeners
            .subscribe(EVENT_EXPIRE.into(), Box::new(recorder(&log)));

        manager_loop.expire(id);

        assert_eq!(*log.lock().unwrap(), vec!["expire:"]);
        assert!(manager_loop.history.is_empty());
    }

    #[test]
    fn expire_absent_record_fires_nothing() {
        let mut manager_loop = test_loop();
        let id = manager_loop.history.push(None, Some("gone".into()), None, 1000);
        manager_loop.history.clear();

        let log: EventLog = Arc::default();
        manager_loop
            .listeners
            .subscribe(EVENT_EXPIRE.into(), Box::new(recorder(&log)));

        manager_loop.expire(id);

        assert!(log.lock().unwrap().is_empty());
    }
}
