//! In-memory notifier for tests/dev.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::notifier::{Notification, Notifier, NotifyError};

/// Records every delivered message in order.
///
/// - No IO
/// - Can be closed to simulate a failing mail channel
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<Notification>>,
    closed: AtomicBool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of delivered notifications, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(_) => vec![],
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent().into_iter().map(|n| n.message).collect()
    }

    /// Reject every subsequent message.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl Notifier for InMemoryNotifier {
    type Error = NotifyError;

    fn notify(&self, message: &str) -> Result<(), Self::Error> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(NotifyError::Rejected("notifier is closed".to_string()));
        }

        let mut sent = self.sent.lock().map_err(|_| NotifyError::Poisoned)?;
        sent.push(Notification::new(message));
        Ok(())
    }
}
