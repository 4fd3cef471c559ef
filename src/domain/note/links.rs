//! Provider URL construction.

use crate::domain::daf::Daf;
use crate::domain::provider::Provider;

/// Width Daf Yomi Digest pads page numbers to.
const DIGEST_PAGE_WIDTH: usize = 3;

/// Builds the link for `provider` to the given Daf.
///
/// Only Living Greengrass can fail: its URL embeds the study date, which is
/// `None` for pages far outside the tractate.
pub fn provider_url(provider: Provider, daf: &Daf) -> Option<String> {
    let host = provider.host();
    let fragment = daf.segment().fragment(provider);
    let page = daf.page();

    let url = match provider {
        Provider::SteinsaltzPdf => {
            let width = daf.segment().pdf_page_width().unwrap_or(0);
            format!("{host}{fragment}{page:0width$}.pdf")
        }
        Provider::DafYomiDigest => {
            let width = DIGEST_PAGE_WIDTH;
            format!("{host}{fragment}{page:0width$}.pdf")
        }
        Provider::LivingGreengrass => {
            let date_path = daf.study_date()?.path_segment();
            format!("{host}{date_path}/{fragment}{page}/")
        }
        Provider::Sefaria
        | Provider::SteinsaltzCommentary
        | Provider::MyJewishLearning
        | Provider::Hadran => format!("{host}{fragment}{page}"),
    };
    Some(url)
}
