//! Commentary providers linked from a Daf note.

use std::fmt;

/// An external source reachable by a predictable URL keyed by tractate and page.
///
/// The declaration order is the canonical order of sections in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    SteinsaltzPdf,
    Sefaria,
    SteinsaltzCommentary,
    MyJewishLearning,
    DafYomiDigest,
    Hadran,
    LivingGreengrass,
}

impl Provider {
    /// All providers in canonical note order.
    pub const ALL: [Provider; 7] = [
        Provider::SteinsaltzPdf,
        Provider::Sefaria,
        Provider::SteinsaltzCommentary,
        Provider::MyJewishLearning,
        Provider::DafYomiDigest,
        Provider::Hadran,
        Provider::LivingGreengrass,
    ];

    /// URL prefix every link for this provider starts with.
    pub fn host(&self) -> &'static str {
        match self {
            Provider::SteinsaltzPdf => "https://www.steinsaltz-center.org/vault/DafYomi/",
            Provider::Sefaria => "https://www.sefaria.org/",
            Provider::SteinsaltzCommentary => "https://steinsaltz.org/daf/",
            Provider::MyJewishLearning => "https://www.myjewishlearning.com/article/",
            Provider::DafYomiDigest => "https://www.dafdigest.org/masechtos/",
            Provider::Hadran => "https://hadran.org.il/daf/",
            Provider::LivingGreengrass => "https://livinggreengrass.home.blog/",
        }
    }

    /// Link text used in the note.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::SteinsaltzPdf => "Steinsaltz PDF",
            Provider::Sefaria => "Sefaria",
            Provider::SteinsaltzCommentary => "Steinsaltz Commentary",
            Provider::MyJewishLearning => "My Jewish Learning Commentary",
            Provider::DafYomiDigest => "Daf Yomi Digest",
            Provider::Hadran => "Hadran Commentary",
            Provider::LivingGreengrass => "Living Greengrass",
        }
    }

    /// Section heading used in sectioned mode.
    ///
    /// The Steinsaltz PDF embed and link share the Koren Talmud Bavli section.
    pub fn section_heading(&self) -> &'static str {
        match self {
            Provider::SteinsaltzPdf => "Koren Talmud Bavli",
            other => other.label(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
