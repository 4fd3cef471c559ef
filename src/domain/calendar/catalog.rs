//! The calendar table: every known cycle segment, keyed by start date.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::segment::CycleSegment;
use crate::domain::foundation::{ErrorCode, StudyDate};

const BUNDLED_CATALOG: &str = include_str!("../../../data/tractates.yaml");
const SUPPORTED_VERSION: u32 = 1;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported catalog version {0}")]
    UnsupportedVersion(u32),

    #[error("Catalog contains no segments")]
    Empty,

    #[error("Two segments start on {0}")]
    DuplicateStartDate(StudyDate),

    #[error("Two segments are named '{0}'")]
    DuplicateDisplayName(String),

    #[error("Chapter breaks for '{0}' are not ascending")]
    UnsortedChapterBreaks(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidCatalog
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    segments: Vec<CycleSegment>,
}

/// Ordered, immutable table of cycle segments.
///
/// # Invariants
///
/// - Start dates and display names are unique.
/// - Iteration via [`Catalog::iter_descending`] yields the most recent
///   segment first, which is the order date resolution depends on.
#[derive(Debug, Clone)]
pub struct Catalog {
    segments: BTreeMap<StudyDate, Arc<CycleSegment>>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    /// Loads a catalog from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Parses a catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        if file.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion(file.version));
        }
        Self::from_segments(file.segments)
    }

    /// Builds a catalog from segments in any order.
    pub fn from_segments(segments: Vec<CycleSegment>) -> Result<Self, CatalogError> {
        if segments.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        let mut by_date = BTreeMap::new();
        for segment in segments {
            if !segment.has_sorted_breaks() {
                return Err(CatalogError::UnsortedChapterBreaks(
                    segment.display_name().to_string(),
                ));
            }
            if !names.insert(segment.display_name().to_string()) {
                return Err(CatalogError::DuplicateDisplayName(
                    segment.display_name().to_string(),
                ));
            }
            let start = segment.start_date();
            if by_date.insert(start, Arc::new(segment)).is_some() {
                return Err(CatalogError::DuplicateStartDate(start));
            }
        }

        Ok(Self { segments: by_date })
    }

    /// Segments, most recent start date first.
    pub fn iter_descending(&self) -> impl Iterator<Item = &Arc<CycleSegment>> {
        self.segments.values().rev()
    }

    /// The segment whose window contains `date`, if any.
    pub fn find_active(&self, date: &StudyDate) -> Option<&Arc<CycleSegment>> {
        self.iter_descending().find(|s| s.start_date() <= *date)
    }

    /// Exact, case-sensitive display name lookup.
    pub fn find_by_name(&self, display_name: &str) -> Option<&Arc<CycleSegment>> {
        self.segments
            .values()
            .find(|s| s.display_name() == display_name)
    }

    /// Display names, most recent first.
    pub fn display_names(&self) -> Vec<&str> {
        self.iter_descending().map(|s| s.display_name()).collect()
    }

    pub fn earliest_start(&self) -> Option<StudyDate> {
        self.segments.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
