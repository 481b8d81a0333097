//! Request sequencing.
//!
//! Every issued request gets a [`Ticket`]. A response is applied only if its
//! ticket is still current when it arrives:
//! - `is_latest`: no newer request of the same kind was issued since
//! - `is_current_epoch`: the identity has not changed and the controller
//!   has not been detached since

/// Kinds of remote operation the controller sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Refresh,
    Create,
    Delete,
    Evaluate,
    SignIn,
}

impl OperationKind {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            OperationKind::Refresh => 0,
            OperationKind::Create => 1,
            OperationKind::Delete => 2,
            OperationKind::Evaluate => 3,
            OperationKind::SignIn => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: OperationKind,
    pub seq: u64,
    pub epoch: u64,
}

/// Monotonic per-kind counters plus an epoch bumped on invalidation.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    epoch: u64,
    latest: [u64; OperationKind::COUNT],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, kind: OperationKind) -> Ticket {
        let slot = &mut self.latest[kind.index()];
        *slot += 1;
        Ticket {
            kind,
            seq: *slot,
            epoch: self.epoch,
        }
    }

    pub fn is_current_epoch(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.epoch
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.is_current_epoch(ticket) && self.latest[ticket.kind.index()] == ticket.seq
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }
}
