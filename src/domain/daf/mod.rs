//! Daf resolution: from a date or a tractate/page pair to a [`Daf`].

mod chapter;
mod resolver;

pub use chapter::locate_chapter;
pub use resolver::{parse_page, resolve_by_date, resolve_by_name, FIRST_PAGE};

use std::fmt;
use std::sync::Arc;

use crate::domain::calendar::CycleSegment;
use crate::domain::foundation::StudyDate;

/// One day's unit of study: a tractate and a page within it.
///
/// The segment is shared with the catalog; a `Daf` owns only its page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Daf {
    segment: Arc<CycleSegment>,
    page: i64,
}

impl Daf {
    pub fn new(segment: Arc<CycleSegment>, page: i64) -> Self {
        Self { segment, page }
    }

    pub fn segment(&self) -> &CycleSegment {
        &self.segment
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// The tractate's display name.
    pub fn tractate(&self) -> &str {
        self.segment.display_name()
    }

    /// Chapter (perek) this page falls in.
    pub fn chapter(&self) -> usize {
        locate_chapter(self.page, self.segment.chapter_breaks())
    }

    /// The calendar day this page is studied on.
    ///
    /// `None` when the page is so far from the segment start that the day
    /// cannot be represented.
    pub fn study_date(&self) -> Option<StudyDate> {
        let offset = self.page.checked_sub(FIRST_PAGE)?;
        self.segment.start_date().plus_days(offset)
    }
}

impl fmt::Display for Daf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.segment.display_name(), self.page)
    }
}
