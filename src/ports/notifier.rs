//! Notifier Port - Transient, user-facing messages.

use std::time::Duration;

/// How long error notices stay up.
pub const ERROR_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// `None` means the host's default duration
    pub duration: Option<Duration>,
}

impl Notice {
    /// An informational notice with the default duration.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: None,
        }
    }

    /// A failure notice that stays up for [`ERROR_NOTICE_DURATION`].
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: Some(ERROR_NOTICE_DURATION),
        }
    }

    pub fn is_error(&self) -> bool {
        self.duration.is_some()
    }
}

/// Port for showing notices. Delivery is best-effort and never fails.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_has_duration() {
        let notice = Notice::error("Tractate is unknown");
        assert_eq!(notice.duration, Some(Duration::from_secs(5)));
        assert!(notice.is_error());
    }

    #[test]
    fn test_info_notice_uses_default_duration() {
        let notice = Notice::info("Created note Daf Yomi Megillah 4");
        assert!(notice.duration.is_none());
        assert!(!notice.is_error());
    }
}
