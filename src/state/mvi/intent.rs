//! Requested changes to the local mirror.

/// A change to one slice of the mirror.
///
/// Intents are always issued by the sync controller, either in response to
/// a user edit or after a remote call resolved and passed its staleness check.
pub trait Intent: Send + 'static {}
