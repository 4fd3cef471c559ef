//! Cycle segment (tractate) definition.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StudyDate;
use crate::domain::provider::Provider;

/// URL fragments for each provider, as published by that provider.
///
/// Fragments are site-specific spellings of the tractate name (for example
/// `Kesuvos%20` on Daf Yomi Digest versus `ketubot-` on Hadran).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFragments {
    pub steinsaltz_pdf: String,
    pub steinsaltz_commentary: String,
    pub my_jewish_learning: String,
    pub sefaria: String,
    pub daf_yomi_digest: String,
    pub hadran: String,
    pub living_greengrass: String,
}

impl ProviderFragments {
    /// Returns the fragment for one provider.
    pub fn get(&self, provider: Provider) -> &str {
        match provider {
            Provider::SteinsaltzPdf => &self.steinsaltz_pdf,
            Provider::Sefaria => &self.sefaria,
            Provider::SteinsaltzCommentary => &self.steinsaltz_commentary,
            Provider::MyJewishLearning => &self.my_jewish_learning,
            Provider::DafYomiDigest => &self.daf_yomi_digest,
            Provider::Hadran => &self.hadran,
            Provider::LivingGreengrass => &self.living_greengrass,
        }
    }
}

/// One tractate in the Daf Yomi cycle.
///
/// # Invariants
///
/// - `start_date` is the inclusive first day; it maps to page 2.
/// - `chapter_breaks[i]` is the first page of chapter `i + 2`, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSegment {
    start_date: StudyDate,
    display_name: String,
    link_slug: String,
    #[serde(default)]
    chapter_breaks: Vec<u32>,
    fragments: ProviderFragments,
    /// Zero-pad width for the Steinsaltz PDF page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pdf_page_width: Option<usize>,
}

impl CycleSegment {
    pub fn new(
        start_date: StudyDate,
        display_name: impl Into<String>,
        link_slug: impl Into<String>,
        chapter_breaks: Vec<u32>,
        fragments: ProviderFragments,
    ) -> Self {
        Self {
            start_date,
            display_name: display_name.into(),
            link_slug: link_slug.into(),
            chapter_breaks,
            fragments,
            pdf_page_width: None,
        }
    }

    /// Sets the zero-pad width for Steinsaltz PDF page numbers.
    pub fn with_pdf_page_width(mut self, width: usize) -> Self {
        self.pdf_page_width = Some(width);
        self
    }

    pub fn start_date(&self) -> StudyDate {
        self.start_date
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn link_slug(&self) -> &str {
        &self.link_slug
    }

    pub fn chapter_breaks(&self) -> &[u32] {
        &self.chapter_breaks
    }

    pub fn fragment(&self, provider: Provider) -> &str {
        self.fragments.get(provider)
    }

    pub fn pdf_page_width(&self) -> Option<usize> {
        self.pdf_page_width
    }

    /// Returns true when chapter breaks are strictly ascending.
    pub(crate) fn has_sorted_breaks(&self) -> bool {
        self.chapter_breaks.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Fragments following the common lowercase-dash pattern.
    pub fn fragments(stem: &str) -> ProviderFragments {
        let lower = stem.to_lowercase();
        ProviderFragments {
            steinsaltz_pdf: format!("{stem}/{stem}_"),
            steinsaltz_commentary: lower.clone(),
            my_jewish_learning: format!("{lower}-"),
            sefaria: format!("{stem}."),
            daf_yomi_digest: format!("{stem}%20"),
            hadran: format!("{lower}-"),
            living_greengrass: format!("{lower}-"),
        }
    }

    pub fn segment(start: &str, name: &str, breaks: Vec<u32>) -> CycleSegment {
        CycleSegment::new(
            StudyDate::parse(start).unwrap(),
            name,
            name.replace(' ', ""),
            breaks,
            fragments(&name.replace(' ', "")),
        )
    }
}
