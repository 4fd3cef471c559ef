//! Note generation: template rendering, provider links and markdown layout.

mod attachment;
mod composer;
mod index;
mod links;
mod template;

pub use attachment::AttachmentFolder;
pub use composer::{compose_note, ComposedNote, PdfAttachment};
pub use index::IndexNote;
pub use links::provider_url;
pub use template::{contains_token, render, render_directory, render_page_name, Token};
