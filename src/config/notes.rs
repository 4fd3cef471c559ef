//! Note rendering settings

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::domain::note::{contains_token, Token};
use crate::domain::provider::Provider;

/// Which sections a Daf note contains and how its paths and title are named.
///
/// Templates accept `{tractate}`, `{perek}` and `{page}` in any letter case.
/// Each field also accepts the key used by the original plugin's `data.json`
/// (`dyDir`, `stpdflink`, ...), so existing settings can be read as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSettings {
    /// Directory template for Daf notes. Must not contain `{page}`.
    #[serde(default = "default_directory_template", alias = "dyDir")]
    pub directory_template: String,

    /// Note file name template, without the `.md` extension
    #[serde(default = "default_page_template", alias = "pageName")]
    pub page_name_template: String,

    /// H1 title template
    #[serde(default = "default_page_template", alias = "pageTitle")]
    pub page_title_template: String,

    /// Put each link in its own `##` section
    #[serde(default)]
    pub sections: bool,

    /// Add a literature note backlink under My Jewish Learning (sectioned mode only)
    #[serde(default, alias = "litLinks")]
    pub literature_links: bool,

    #[serde(default)]
    pub sefaria: bool,

    /// Link to the Steinsaltz PDF
    #[serde(default = "enabled", alias = "stpdflink")]
    pub steinsaltz_pdf_link: bool,

    /// Download the Steinsaltz PDF and embed it
    #[serde(default, alias = "stpdf")]
    pub steinsaltz_pdf_download: bool,

    #[serde(default = "enabled", alias = "stc")]
    pub steinsaltz_commentary: bool,

    #[serde(default = "enabled", alias = "myjl")]
    pub my_jewish_learning: bool,

    #[serde(default, alias = "dydg")]
    pub daf_yomi_digest: bool,

    #[serde(default, alias = "hd")]
    pub hadran: bool,

    #[serde(default, alias = "lgg")]
    pub living_greengrass: bool,
}

impl NoteSettings {
    /// Reads settings saved by the original plugin.
    ///
    /// Missing keys take their defaults.
    pub fn from_plugin_data(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the link for `provider` is included in the note.
    pub fn is_enabled(&self, provider: Provider) -> bool {
        match provider {
            Provider::SteinsaltzPdf => self.steinsaltz_pdf_link,
            Provider::Sefaria => self.sefaria,
            Provider::SteinsaltzCommentary => self.steinsaltz_commentary,
            Provider::MyJewishLearning => self.my_jewish_learning,
            Provider::DafYomiDigest => self.daf_yomi_digest,
            Provider::Hadran => self.hadran,
            Provider::LivingGreengrass => self.living_greengrass,
        }
    }

    /// Validate note settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if contains_token(&self.directory_template, Token::Page) {
            return Err(ValidationError::PageTokenInDirectory);
        }
        Ok(())
    }
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            directory_template: default_directory_template(),
            page_name_template: default_page_template(),
            page_title_template: default_page_template(),
            sections: false,
            literature_links: false,
            sefaria: false,
            steinsaltz_pdf_link: enabled(),
            steinsaltz_pdf_download: false,
            steinsaltz_commentary: enabled(),
            my_jewish_learning: enabled(),
            daf_yomi_digest: false,
            hadran: false,
            living_greengrass: false,
        }
    }
}

fn default_directory_template() -> String {
    "/Home/Judaism/Daf Yomi/{tractate}".to_string()
}

fn default_page_template() -> String {
    "Daf Yomi {tractate} {page}".to_string()
}

fn enabled() -> bool {
    true
}
