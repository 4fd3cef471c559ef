//! The per-tractate index note that collects links to every page note.

use super::template::{contains_token, Token};
use crate::domain::daf::Daf;

/// Index note entry for one newly added page.
///
/// Links are appended as-is; adding the same page twice yields the link twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNote {
    /// `Tractate <name>`, with ` Perek <n>` when directories are per chapter
    pub title: String,
    /// `<directory>/<title>.md`
    pub path: String,
    /// `[[<page name>|<page>]]`
    pub link: String,
}

impl IndexNote {
    pub fn for_page(
        daf: &Daf,
        directory: &str,
        page_name: &str,
        chapter: usize,
        directory_template: &str,
    ) -> Self {
        let mut title = format!("Tractate {}", daf.tractate());
        if contains_token(directory_template, Token::Perek) {
            title.push_str(&format!(" Perek {chapter}"));
        }

        Self {
            path: format!("{directory}/{title}.md"),
            link: format!("[[{page_name}|{}]]", daf.page()),
            title,
        }
    }

    /// Content of a freshly created index note.
    pub fn new_document(&self) -> String {
        format!("# {}\n\n{}", self.title, self.link)
    }

    /// Existing content with this page's link appended.
    pub fn append_to(&self, current: &str) -> String {
        format!("{current} {}", self.link)
    }
}
