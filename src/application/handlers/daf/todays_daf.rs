//! TodaysDafHandler - Default selection for choosing a Daf by name.

use std::sync::Arc;

use crate::domain::calendar::Catalog;
use crate::domain::daf::{resolve_by_date, Daf};
use crate::domain::foundation::StudyDate;

/// Query for the Daf of a day, defaulting to today.
#[derive(Debug, Clone, Default)]
pub struct TodaysDafQuery {
    pub date: Option<StudyDate>,
}

/// Today's Daf, when the catalog covers today, and every tractate name.
#[derive(Debug, Clone)]
pub struct TodaysDafResult {
    pub daf: Option<Daf>,
    /// Display names, most recent first
    pub tractates: Vec<String>,
}

/// Handler for the by-name prompt's defaults.
pub struct TodaysDafHandler {
    catalog: Arc<Catalog>,
}

impl TodaysDafHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: TodaysDafQuery) -> TodaysDafResult {
        let date = query.date.unwrap_or_else(StudyDate::today);
        TodaysDafResult {
            daf: resolve_by_date(&self.catalog, &date).ok(),
            tractates: self
                .catalog
                .display_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> TodaysDafHandler {
        TodaysDafHandler::new(Arc::new(Catalog::bundled().unwrap()))
    }

    #[test]
    fn returns_daf_for_date_and_all_names() {
        let result = handler().handle(TodaysDafQuery {
            date: Some(StudyDate::parse("2021-12-16").unwrap()),
        });

        let daf = result.daf.unwrap();
        assert_eq!(daf.tractate(), "Megillah");
        assert_eq!(daf.page(), 4);
        assert_eq!(result.tractates.len(), 8);
        assert_eq!(result.tractates[0], "Nazir");
    }

    #[test]
    fn no_daf_before_the_catalog() {
        let result = handler().handle(TodaysDafQuery {
            date: Some(StudyDate::parse("2019-01-01").unwrap()),
        });

        assert!(result.daf.is_none());
        assert!(!result.tractates.is_empty());
    }
}
