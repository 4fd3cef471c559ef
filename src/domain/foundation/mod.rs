//! Foundation module - Shared domain primitives.
//!
//! Contains the date value object and the error vocabulary shared by the
//! calendar, resolver and note modules.

mod errors;
mod study_date;

pub use errors::{DafError, ErrorCode};
pub use study_date::StudyDate;
