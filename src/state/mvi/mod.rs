//! Model-View-Intent (MVI) primitives for the local mirror.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── SyncController ←─────────┘
//! ```
//!
//! - **State**: Plain data the view renders from
//! - **Intent**: A local mutation requested by the controller
//! - **Reducer**: Pure function that applies an intent to a state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::MirrorState;
