//! Auto-expiring success/error messages.
//!
//! Each kind has one slot. Arming a slot replaces its message and aborts the
//! pending clear task, so only the latest arm ever fires.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// The two display channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A visible message. `expires_at` is `None` for messages that stay until superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Option<Instant>,
}

impl Notification {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Slot {
    /// Replace the message and cancel any pending clear. Returns the new generation.
    fn replace(&mut self, notification: Option<Notification>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.current = notification;
        self.generation
    }
}

#[derive(Default)]
struct Slots {
    success: Slot,
    error: Slot,
}

impl Slots {
    fn slot_mut(&mut self, kind: NotificationKind) -> &mut Slot {
        match kind {
            NotificationKind::Success => &mut self.success,
            NotificationKind::Error => &mut self.error,
        }
    }

    fn slot(&self, kind: NotificationKind) -> &Slot {
        match kind {
            NotificationKind::Success => &self.success,
            NotificationKind::Error => &self.error,
        }
    }
}

impl Drop for Slots {
    fn drop(&mut self) {
        for slot in [&mut self.success, &mut self.error] {
            if let Some(handle) = slot.pending.take() {
                handle.abort();
            }
        }
    }
}

/// Owner of the two notification slots and their clear timers.
///
/// Cloning shares the slots. Timers are aborted when the last clone is dropped.
/// Arming requires a running tokio runtime.
#[derive(Clone, Default)]
pub struct NotificationTimer {
    slots: Arc<Mutex<Slots>>,
}

impl NotificationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for `duration`, displacing any message of the same kind.
    pub fn arm(&self, kind: NotificationKind, message: impl Into<String>, duration: Duration) {
        let expires_at = Instant::now() + duration;
        let mut slots = self.slots.lock();
        let slot = slots.slot_mut(kind);
        let generation = slot.replace(Some(Notification {
            kind,
            message: message.into(),
            expires_at: Some(expires_at),
        }));

        let weak = Arc::downgrade(&self.slots);
        slot.pending = Some(tokio::spawn(expire(weak, kind, generation, expires_at)));
    }

    /// Show `message` until it is cleared or superseded.
    pub fn pin(&self, kind: NotificationKind, message: impl Into<String>) {
        self.slots.lock().slot_mut(kind).replace(Some(Notification {
            kind,
            message: message.into(),
            expires_at: None,
        }));
    }

    /// Empty the slot immediately and cancel its pending clear.
    pub fn clear(&self, kind: NotificationKind) {
        self.slots.lock().slot_mut(kind).replace(None);
    }

    pub fn clear_all(&self) {
        let mut slots = self.slots.lock();
        slots.success.replace(None);
        slots.error.replace(None);
    }

    /// The live notification of `kind`, if any.
    pub fn current(&self, kind: NotificationKind) -> Option<Notification> {
        let now = Instant::now();
        self.slots
            .lock()
            .slot(kind)
            .current
            .clone()
            .filter(|n| n.is_live(now))
    }

    /// Message text of `kind`, or an empty string.
    pub fn message(&self, kind: NotificationKind) -> String {
        self.current(kind).map(|n| n.message).unwrap_or_default()
    }

    /// The message area's content: the error if one is showing, else the success.
    pub fn visible(&self) -> Option<Notification> {
        self.current(NotificationKind::Error)
            .or_else(|| self.current(NotificationKind::Success))
    }
}

async fn expire(slots: Weak<Mutex<Slots>>, kind: NotificationKind, generation: u64, at: Instant) {
    tokio::time::sleep_until(at).await;

    let Some(slots) = slots.upgrade() else {
        return;
    };
    let mut slots = slots.lock();
    let slot = slots.slot_mut(kind);
    if slot.generation == generation {
        slot.current = None;
        slot.pending = None;
        tracing::trace!(?kind, "Notification expired");
    }
}
