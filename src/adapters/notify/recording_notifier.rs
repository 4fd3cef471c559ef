//! Notifier that keeps every notice it receives.

use std::sync::{Arc, Mutex};

use crate::ports::{Notice, Notifier};

/// Collects notices in order. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages of all notices received so far
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let notifier = RecordingNotifier::new();
        let shared = notifier.clone();

        notifier.notify(Notice::info("Created directory /Daf Yomi/Megillah"));
        shared.notify(Notice::error("Note Daf Yomi Megillah 4 already exists"));

        assert_eq!(
            notifier.messages(),
            vec![
                "Created directory /Daf Yomi/Megillah".to_string(),
                "Note Daf Yomi Megillah 4 already exists".to_string(),
            ]
        );
        assert!(notifier.notices()[1].is_error());
    }
}
