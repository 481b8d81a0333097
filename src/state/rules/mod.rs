//! Local mirror of the rule collection for the current identity.
//!
//! The service is the system of record; this is a cache that can be
//! patched locally between refreshes.

mod intent;
mod reducer;
mod state;

pub use intent::RuleListIntent;
pub use reducer::RuleListReducer;
pub use state::RuleListState;
