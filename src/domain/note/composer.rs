//! Note composition: paths, title and markdown body for one Daf.
//!
//! Composition is pure. The application layer decides what to do with the
//! result (existence checks, writes, PDF download).

use tracing::warn;

use super::index::IndexNote;
use super::links::provider_url;
use super::template::{render, render_directory, render_page_name};
use crate::config::NoteSettings;
use crate::domain::daf::Daf;
use crate::domain::provider::Provider;

/// Providers rendered as a single link section, in note order.
const LINK_SECTIONS: [Provider; 6] = [
    Provider::Sefaria,
    Provider::SteinsaltzCommentary,
    Provider::MyJewishLearning,
    Provider::DafYomiDigest,
    Provider::Hadran,
    Provider::LivingGreengrass,
];

/// A Steinsaltz PDF to download alongside the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfAttachment {
    pub url: String,
    /// `<tractate>_<page>.pdf`
    pub file_name: String,
}

/// Everything needed to write a Daf note and update its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedNote {
    pub directory: String,
    pub page_name: String,
    /// `<directory>/<page name>.md`
    pub path: String,
    pub title: String,
    pub body: String,
    pub index: IndexNote,
    /// Present only when PDF download is enabled
    pub pdf: Option<PdfAttachment>,
}

/// Composes the note for `daf` under `settings`.
///
/// Section order is fixed; settings only switch sections on or off and choose
/// between sectioned (`##` heading per link) and flat layout.
pub fn compose_note(daf: &Daf, settings: &NoteSettings) -> ComposedNote {
    let chapter = daf.chapter();
    let directory = render_directory(&settings.directory_template, daf, chapter);
    let page_name = render_page_name(&settings.page_name_template, daf, chapter);
    let title = render(&settings.page_title_template, daf, chapter);

    let pdf = settings
        .steinsaltz_pdf_download
        .then(|| provider_url(Provider::SteinsaltzPdf, daf))
        .flatten()
        .map(|url| PdfAttachment {
            url,
            file_name: format!("{}_{}.pdf", daf.tractate(), daf.page()),
        });

    let body = compose_body(daf, settings, &title, pdf.as_ref());
    let index = IndexNote::for_page(
        daf,
        &directory,
        &page_name,
        chapter,
        &settings.directory_template,
    );

    ComposedNote {
        path: format!("{directory}/{page_name}.md"),
        directory,
        page_name,
        title,
        body,
        index,
        pdf,
    }
}

fn compose_body(
    daf: &Daf,
    settings: &NoteSettings,
    title: &str,
    pdf: Option<&PdfAttachment>,
) -> String {
    let mut body = format!("# {title}\n\n");

    // Embed and link share one section.
    let mut koren = Vec::new();
    if let Some(pdf) = pdf {
        koren.push(format!("![[{}]]", pdf.file_name));
    }
    if settings.is_enabled(Provider::SteinsaltzPdf) {
        koren.extend(markdown_link(Provider::SteinsaltzPdf, daf));
    }
    push_section(&mut body, settings.sections, Provider::SteinsaltzPdf, &koren);

    for provider in LINK_SECTIONS {
        if !settings.is_enabled(provider) {
            continue;
        }
        let Some(link) = markdown_link(provider, daf) else {
            continue;
        };
        let mut lines = vec![link];
        if provider == Provider::MyJewishLearning && settings.sections && settings.literature_links
        {
            lines.push(format!(
                "See [[Notes/Literature/@MJL-{}{}]]",
                daf.segment().link_slug(),
                daf.page()
            ));
        }
        push_section(&mut body, settings.sections, provider, &lines);
    }

    if !settings.sections {
        body.push_str("\n## Notes\n\n");
    }

    body
}

/// `None` drops the link (and its section) from the note.
fn markdown_link(provider: Provider, daf: &Daf) -> Option<String> {
    let Some(url) = provider_url(provider, daf) else {
        warn!(
            provider = provider.label(),
            daf = %daf,
            "No study date for this page, leaving out its link"
        );
        return None;
    };
    Some(format!("[{}]({})", provider.label(), url))
}

fn push_section(body: &mut String, sectioned: bool, provider: Provider, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    if sectioned {
        body.push_str(&format!("## {}\n", provider.section_heading()));
    }
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    if sectioned {
        body.push('\n');
    }
}
