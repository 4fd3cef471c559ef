//! Date and name resolution against the calendar table.

use tracing::debug;

use super::Daf;
use crate::domain::calendar::Catalog;
use crate::domain::foundation::{DafError, StudyDate};

/// Page studied on a segment's start date. Page 1 has no content of its own.
pub const FIRST_PAGE: i64 = 2;

/// Finds the Daf studied on `date`.
///
/// Scans segments most-recent-first and takes the first one that has
/// started; windows are contiguous, so that segment is the only match.
///
/// # Errors
///
/// Returns `DafError::NoSegmentForDate` when `date` predates the catalog.
pub fn resolve_by_date(catalog: &Catalog, date: &StudyDate) -> Result<Daf, DafError> {
    let segment = catalog
        .find_active(date)
        .ok_or_else(|| DafError::NoSegmentForDate {
            date: date.to_string(),
        })?;

    let page = date.days_since(&segment.start_date()) + FIRST_PAGE;
    debug!(
        date = %date,
        tractate = segment.display_name(),
        page,
        "Resolved daf by date"
    );

    Ok(Daf::new(segment.clone(), page))
}

/// Builds the Daf for an explicit tractate name and page.
///
/// The name must match a display name exactly. The page is accepted as given,
/// with no check against the tractate's length or chapters.
///
/// # Errors
///
/// Returns `DafError::UnknownSegment` when no segment has that name.
pub fn resolve_by_name(catalog: &Catalog, display_name: &str, page: i64) -> Result<Daf, DafError> {
    let segment = catalog
        .find_by_name(display_name)
        .ok_or_else(|| DafError::unknown_segment(display_name))?;

    Ok(Daf::new(segment.clone(), page))
}

/// Parses page text typed by the user.
///
/// # Errors
///
/// Returns `DafError::InvalidPage` for anything but a whole number.
pub fn parse_page(input: &str) -> Result<i64, DafError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| DafError::invalid_page(input))
}
