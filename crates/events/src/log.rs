//! Email stub: delivers notifications as structured log events.

use core::convert::Infallible;

use crate::notifier::{Notification, Notifier};

/// Writes each message as an `info` event on the `email` target.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    channel: String,
}

impl LogNotifier {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Notifier for LogNotifier {
    type Error = Infallible;

    fn notify(&self, message: &str) -> Result<(), Self::Error> {
        let notification = Notification::new(message);
        tracing::info!(
            target: "email",
            notification_id = %notification.id,
            channel = %self.channel,
            "[email message]: {}",
            notification.message
        );
        Ok(())
    }
}
