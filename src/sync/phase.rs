use std::sync::Arc;

use parking_lot::Mutex;

/// What the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    Refreshing,
    /// Create or delete in flight.
    Mutating,
    Evaluating,
}

/// In-flight operations, most recent last.
#[derive(Debug, Default)]
pub(crate) struct Activity {
    next_token: u64,
    active: Vec<(u64, SyncPhase)>,
}

impl Activity {
    pub(crate) fn enter(&mut self, phase: SyncPhase) -> u64 {
        self.next_token += 1;
        self.active.push((self.next_token, phase));
        self.next_token
    }

    pub(crate) fn leave(&mut self, token: u64) {
        self.active.retain(|(t, _)| *t != token);
    }

    /// Phase of the most recently started operation still in flight.
    pub(crate) fn phase(&self) -> SyncPhase {
        self.active
            .last()
            .map(|(_, phase)| *phase)
            .unwrap_or(SyncPhase::Idle)
    }
}

/// Something that owns an [`Activity`] behind a lock.
pub(crate) trait HasActivity: Send + 'static {
    fn activity_mut(&mut self) -> &mut Activity;
}

/// Leaves the phase on drop, so a cancelled action future still returns to `Idle`.
///
/// Must not be dropped while the owning lock is held.
pub(crate) struct PhaseGuard<S: HasActivity> {
    owner: Arc<Mutex<S>>,
    token: u64,
}

impl<S: HasActivity> PhaseGuard<S> {
    pub(crate) fn new(owner: Arc<Mutex<S>>, token: u64) -> Self {
        Self { owner, token }
    }
}

impl<S: HasActivity> Drop for PhaseGuard<S> {
    fn drop(&mut self) {
        self.owner.lock().activity_mut().leave(self.token);
    }
}
