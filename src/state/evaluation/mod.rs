//! Rule text, user data, and the last evaluation outcome.

mod intent;
mod reducer;
mod state;

pub use intent::EvaluationIntent;
pub use reducer::EvaluationReducer;
pub use state::EvaluationState;
