//! Out-of-band notifications (the "email" side channel of the shop).
//!
//! Domain code only depends on the [`Notifier`] capability; how a message is
//! delivered is decided by the implementation handed in by the caller.

pub mod in_memory;
pub mod log;
pub mod notifier;

pub use in_memory::InMemoryNotifier;
pub use log::LogNotifier;
pub use notifier::{Notification, Notifier, NotifyError};
