//! Notifier Adapters
//!
//! - **TracingNotifier** - Logs notices (CLI host)
//! - **RecordingNotifier** - Keeps notices for inspection (testing)

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
