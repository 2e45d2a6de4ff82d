//! Notification delivery abstraction (mechanics only).
//!
//! A notifier accepts a plain text message and delivers it somewhere outside the
//! domain model: a log line, a mailbox, a test recorder.
//!
//! ## Delivery Guarantees
//!
//! Delivery is synchronous from the caller's point of view. A failed delivery is
//! reported through `Self::Error` and the caller decides what to do with it; the
//! notifier never asks the caller to undo the state change it is reporting.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A delivered message, as recorded by notifiers that keep history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            message: message.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// Delivery failed due to internal lock poisoning.
    #[error("notifier state is poisoned")]
    Poisoned,

    /// The notifier refused the message (e.g. it has been closed).
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Capability to deliver a text message to a user.
pub trait Notifier {
    type Error: std::error::Error + Send + Sync + 'static;

    fn notify(&self, message: &str) -> Result<(), Self::Error>;
}

impl<N> Notifier for &N
where
    N: Notifier + ?Sized,
{
    type Error = N::Error;

    fn notify(&self, message: &str) -> Result<(), Self::Error> {
        (**self).notify(message)
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    type Error = N::Error;

    fn notify(&self, message: &str) -> Result<(), Self::Error> {
        (**self).notify(message)
    }
}
