//! Notices as log events.

use crate::ports::{Notice, Notifier};

/// Emits each notice as a `tracing` event: warnings for error notices,
/// info otherwise.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.duration {
            Some(duration) => tracing::warn!(
                duration_ms = duration.as_millis() as u64,
                "{}",
                notice.message
            ),
            None => tracing::info!("{}", notice.message),
        }
    }
}
