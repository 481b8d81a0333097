//! Transition functions for the local mirror.

use super::intent::Intent;
use super::state::MirrorState;

/// Applies one intent to one slice of the mirror.
///
/// Reducers never see the network, the clock, or the notification slots;
/// the controller decides when an intent is issued and whether a response
/// is still current. Given the same slice and intent, a reducer always
/// produces the same slice.
pub trait Reducer {
    type State: MirrorState;
    type Intent: Intent;

    /// Consume the previous slice and return its successor.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
