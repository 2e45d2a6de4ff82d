//! Orders domain module.
//!
//! An order aggregates product lines, derives its totals on read and reports
//! status changes through a [`charolis_events::Notifier`].

pub mod order;

pub use order::{Order, OrderItem, OrderKind, OrderStatus};
