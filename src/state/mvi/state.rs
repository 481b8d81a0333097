//! State slices held by the sync controller.

/// A slice of the local mirror (rule list, evaluation inputs and outcome).
///
/// Slices live behind the controller's lock and are cloned out whole when
/// the view takes a snapshot, so they carry no handles or timers. `Default`
/// is the slice right after an identity change.
pub trait MirrorState: Clone + PartialEq + Default + Send + 'static {}
