//! Placeholder substitution for directory, file name and title templates.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::daf::Daf;

// ASCII case folding only; Unicode folding would also match e.g. the Kelvin sign for `k`.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\{(tractate|perek|page)\}").expect("token pattern is a valid regex")
});

/// A recognized template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{tractate}`: the segment's display name
    Tractate,
    /// `{perek}`: the 1-based chapter number
    Perek,
    /// `{page}`: the page number
    Page,
}

impl Token {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "tractate" => Some(Token::Tractate),
            "perek" => Some(Token::Perek),
            "page" => Some(Token::Page),
            _ => None,
        }
    }
}

/// Whether `template` contains `token`, in any letter case.
pub fn contains_token(template: &str, token: Token) -> bool {
    TOKEN_PATTERN
        .captures_iter(template)
        .any(|caps| Token::from_name(&caps[1]) == Some(token))
}

/// Replaces every placeholder in `template` in a single pass.
///
/// Substituted values are not scanned again, so a tractate name that happens
/// to contain `{page}` stays literal. Unrecognized braces pass through.
pub fn render(template: &str, daf: &Daf, chapter: usize) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| match Token::from_name(&caps[1]) {
            Some(Token::Tractate) => daf.tractate().to_string(),
            Some(Token::Perek) => chapter.to_string(),
            Some(Token::Page) => daf.page().to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Renders the note directory.
///
/// Without `{tractate}` in the template the display name is appended as a
/// final path component, so every tractate still gets its own directory.
pub fn render_directory(template: &str, daf: &Daf, chapter: usize) -> String {
    let rendered = render(template, daf, chapter);
    if contains_token(template, Token::Tractate) {
        rendered
    } else {
        format!("{}/{}", rendered, daf.tractate())
    }
}

/// Renders the note file name (no extension).
///
/// Without `{page}` in the template the fixed name `Daf Yomi <tractate> <page>`
/// is used instead, so two pages never share a file.
pub fn render_page_name(template: &str, daf: &Daf, chapter: usize) -> String {
    if contains_token(template, Token::Page) {
        render(template, daf, chapter)
    } else {
        format!("Daf Yomi {} {}", daf.tractate(), daf.page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::fixtures::segment;
    use std::sync::Arc;

    fn megillah(page: i64) -> Daf {
        Daf::new(Arc::new(segment("2021-12-14", "Megillah", vec![17, 21, 26])), page)
    }

    #[test]
    fn replaces_all_tokens() {
        let out = render("Daf Yomi {tractate} {perek} {page}", &megillah(4), 1);
        assert_eq!(out, "Daf Yomi Megillah 1 4");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let out = render("{TRACTATE}|{Tractate}|{tractate}|{PaGe}", &megillah(4), 1);
        assert_eq!(out, "Megillah|Megillah|Megillah|4");
    }

    #[test]
    fn non_ascii_lookalikes_are_not_tokens() {
        // U+212A KELVIN SIGN folds to `k` under Unicode rules.
        let template = "{pere\u{212A}} {page}";
        assert_eq!(render(template, &megillah(4), 1), "{pere\u{212A}} 4");
        assert!(!contains_token(template, Token::Perek));
        assert!(contains_token(template, Token::Page));
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render("{page}-{page}-{page}", &megillah(9), 1);
        assert_eq!(out, "9-9-9");
    }

    #[test]
    fn unknown_braces_pass_through() {
        let out = render("{date} {tractate} {", &megillah(4), 1);
        assert_eq!(out, "{date} Megillah {");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let odd = Daf::new(Arc::new(segment("2021-12-14", "Odd {page}", vec![])), 5);
        assert_eq!(render("{tractate}", &odd, 1), "Odd {page}");
    }

    #[test]
    fn rendering_is_idempotent_once_tokens_are_gone() {
        let daf = megillah(4);
        let once = render("/Daf/{tractate}/{perek}", &daf, 1);
        assert_eq!(render(&once, &daf, 1), once);
    }

    #[test]
    fn contains_token_detects_case_variants() {
        assert!(contains_token("/x/{Tractate}", Token::Tractate));
        assert!(contains_token("/x/{PEREK}", Token::Perek));
        assert!(!contains_token("/x/{tractate}", Token::Page));
        assert!(!contains_token("/x/tractate", Token::Tractate));
    }

    #[test]
    fn directory_with_tractate_is_rendered() {
        let dir = render_directory("/Daf Yomi/{tractate}/{perek}", &megillah(18), 2);
        assert_eq!(dir, "/Daf Yomi/Megillah/2");
    }

    #[test]
    fn directory_without_tractate_appends_name() {
        let dir = render_directory("/Daf Yomi/Perek {perek}", &megillah(18), 2);
        assert_eq!(dir, "/Daf Yomi/Perek 2/Megillah");
    }

    #[test]
    fn page_name_without_page_uses_default() {
        let name = render_page_name("{tractate} notes", &megillah(4), 1);
        assert_eq!(name, "Daf Yomi Megillah 4");
    }

    #[test]
    fn page_name_with_page_is_rendered() {
        let name = render_page_name("{tractate} {page}", &megillah(4), 1);
        assert_eq!(name, "Megillah 4");
    }
}
