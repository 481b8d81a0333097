//! Transient success/error notifications.

mod timer;

pub use timer::{Notification, NotificationKind, NotificationTimer};
