//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while turning user input into a [`Daf`](crate::domain::daf::Daf).
///
/// Every variant is user-facing: the application layer reports it through a
/// transient notice and aborts the operation before any side effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DafError {
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    #[error("Date {date} does not match a Daf")]
    NoSegmentForDate { date: String },

    #[error("Tractate '{name}' is unknown")]
    UnknownSegment { name: String },

    #[error("Invalid page '{input}', expected a whole number")]
    InvalidPage { input: String },
}

impl DafError {
    /// Creates an invalid date format error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        DafError::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Creates an unknown segment error.
    pub fn unknown_segment(name: impl Into<String>) -> Self {
        DafError::UnknownSegment { name: name.into() }
    }

    /// Creates an invalid page error.
    pub fn invalid_page(input: impl Into<String>) -> Self {
        DafError::InvalidPage {
            input: input.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DafError::InvalidDateFormat { .. } => ErrorCode::InvalidDateFormat,
            DafError::NoSegmentForDate { .. } => ErrorCode::NoSegmentForDate,
            DafError::UnknownSegment { .. } => ErrorCode::UnknownSegment,
            DafError::InvalidPage { .. } => ErrorCode::InvalidPage,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    InvalidDateFormat,
    InvalidPage,

    // Lookup errors
    NoSegmentForDate,
    UnknownSegment,

    // Write errors
    TargetAlreadyExists,

    // Catalog errors
    InvalidCatalog,

    // Infrastructure errors
    StorageError,
    FetchError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorCode::InvalidPage => "INVALID_PAGE",
            ErrorCode::NoSegmentForDate => "NO_SEGMENT_FOR_DATE",
            ErrorCode::UnknownSegment => "UNKNOWN_SEGMENT",
            ErrorCode::TargetAlreadyExists => "TARGET_ALREADY_EXISTS",
            ErrorCode::InvalidCatalog => "INVALID_CATALOG",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::FetchError => "FETCH_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_displays_input() {
        let err = DafError::invalid_date("2022-13-40");
        assert_eq!(
            format!("{}", err),
            "Invalid date '2022-13-40', expected YYYY-MM-DD"
        );
    }

    #[test]
    fn unknown_segment_displays_name() {
        let err = DafError::unknown_segment("Bava Kamma");
        assert_eq!(format!("{}", err), "Tractate 'Bava Kamma' is unknown");
    }

    #[test]
    fn no_segment_for_date_displays_date() {
        let err = DafError::NoSegmentForDate {
            date: "1999-01-01".to_string(),
        };
        assert!(err.to_string().contains("1999-01-01"));
    }

    #[test]
    fn errors_map_to_codes() {
        assert_eq!(
            DafError::invalid_date("x").code(),
            ErrorCode::InvalidDateFormat
        );
        assert_eq!(DafError::invalid_page("x").code(), ErrorCode::InvalidPage);
        assert_eq!(
            DafError::unknown_segment("x").code(),
            ErrorCode::UnknownSegment
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::NoSegmentForDate), "NO_SEGMENT_FOR_DATE");
        assert_eq!(
            format!("{}", ErrorCode::TargetAlreadyExists),
            "TARGET_ALREADY_EXISTS"
        );
    }
}
