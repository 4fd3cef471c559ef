//! AddPageByDafHandler - Adds the note for a tractate and page typed by the user.

use std::sync::Arc;

use super::add_page::{AddPageCommand, AddPageError, AddPageHandler, AddPageResult};
use crate::domain::calendar::Catalog;
use crate::domain::daf::{parse_page, resolve_by_name, Daf};
use crate::domain::foundation::DafError;
use crate::ports::Notice;

/// Command to add the note for a tractate and page.
#[derive(Debug, Clone)]
pub struct AddPageByDafCommand {
    /// Display name, matched exactly
    pub tractate: String,
    /// Page number as typed
    pub page: String,
}

/// Handler for adding a note by tractate and page.
pub struct AddPageByDafHandler {
    catalog: Arc<Catalog>,
    add_page: Arc<AddPageHandler>,
}

impl AddPageByDafHandler {
    pub fn new(catalog: Arc<Catalog>, add_page: Arc<AddPageHandler>) -> Self {
        Self { catalog, add_page }
    }

    pub async fn handle(&self, cmd: AddPageByDafCommand) -> Result<AddPageResult, AddPageError> {
        let daf = match self.resolve(&cmd) {
            Ok(daf) => daf,
            Err(err) => {
                tracing::warn!(tractate = %cmd.tractate, page = %cmd.page, error = %err, "Daf did not resolve");
                self.add_page.notifier().notify(Notice::error(err.to_string()));
                return Err(err.into());
            }
        };

        self.add_page.handle(AddPageCommand { daf }).await
    }

    fn resolve(&self, cmd: &AddPageByDafCommand) -> Result<Daf, DafError> {
        let page = parse_page(&cmd.page)?;
        resolve_by_name(&self.catalog, &cmd.tractate, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryVaultStorage, RecordingNotifier};
    use crate::config::NoteSettings;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::note::AttachmentFolder;
    use crate::ports::{FetchError, PdfFetcher};
    use async_trait::async_trait;

    struct NoFetch;

    #[async_trait]
    impl PdfFetcher for NoFetch {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::RequestFailed {
                url: url.to_string(),
                message: "offline".to_string(),
            })
        }
    }

    fn handler() -> (AddPageByDafHandler, InMemoryVaultStorage, RecordingNotifier) {
        let storage = InMemoryVaultStorage::new();
        let notifier = RecordingNotifier::new();
        let add_page = AddPageHandler::new(
            Arc::new(storage.clone()),
            Arc::new(NoFetch),
            Arc::new(notifier.clone()),
            NoteSettings::default(),
            AttachmentFolder::VaultRoot,
        );
        let handler = AddPageByDafHandler::new(
            Arc::new(Catalog::bundled().unwrap()),
            Arc::new(add_page),
        );
        (handler, storage, notifier)
    }

    fn cmd(tractate: &str, page: &str) -> AddPageByDafCommand {
        AddPageByDafCommand {
            tractate: tractate.to_string(),
            page: page.to_string(),
        }
    }

    #[tokio::test]
    async fn adds_page_for_tractate_and_page() {
        let (handler, storage, _) = handler();

        let result = handler.handle(cmd("Moed Katan", " 12 ")).await.unwrap();

        assert_eq!(result.note.page_name, "Daf Yomi Moed Katan 12");
        assert_eq!(result.note.directory, "/Home/Judaism/Daf Yomi/Moed Katan");
        assert!(storage.read_text(&result.note.path).await.is_some());
    }

    #[tokio::test]
    async fn unknown_tractate_is_notified() {
        let (handler, storage, notifier) = handler();

        let err = handler.handle(cmd("megillah", "4")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnknownSegment);
        assert_eq!(storage.file_count().await, 0);
        assert_eq!(notifier.messages(), vec!["Tractate 'megillah' is unknown"]);
    }

    #[tokio::test]
    async fn non_numeric_page_is_notified() {
        let (handler, storage, notifier) = handler();

        let err = handler.handle(cmd("Megillah", "4a")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidPage);
        assert_eq!(storage.file_count().await, 0);
        assert!(notifier.notices()[0].is_error());
    }
}
