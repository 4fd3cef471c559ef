//! AddPageByDateHandler - Adds the note for the Daf studied on a date.

use std::sync::Arc;

use super::add_page::{AddPageCommand, AddPageError, AddPageHandler, AddPageResult};
use crate::domain::calendar::Catalog;
use crate::domain::daf::resolve_by_date;
use crate::domain::foundation::{DafError, StudyDate};
use crate::ports::Notice;

/// Command to add the note for a date.
#[derive(Debug, Clone)]
pub struct AddPageByDateCommand {
    /// `YYYY-MM-DD`
    pub date: String,
}

impl AddPageByDateCommand {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }

    /// Command for the current local date.
    pub fn today() -> Self {
        Self::new(StudyDate::today().to_string())
    }
}

/// Handler for adding a note by date.
pub struct AddPageByDateHandler {
    catalog: Arc<Catalog>,
    add_page: Arc<AddPageHandler>,
}

impl AddPageByDateHandler {
    pub fn new(catalog: Arc<Catalog>, add_page: Arc<AddPageHandler>) -> Self {
        Self { catalog, add_page }
    }

    pub async fn handle(&self, cmd: AddPageByDateCommand) -> Result<AddPageResult, AddPageError> {
        let daf = match self.resolve(&cmd.date) {
            Ok(daf) => daf,
            Err(err) => {
                tracing::warn!(date = %cmd.date, error = %err, "Date did not resolve");
                self.add_page.notifier().notify(Notice::error(err.to_string()));
                return Err(err.into());
            }
        };

        self.add_page.handle(AddPageCommand { daf }).await
    }

    fn resolve(&self, input: &str) -> Result<crate::domain::daf::Daf, DafError> {
        let date = StudyDate::parse(input)?;
        resolve_by_date(&self.catalog, &date)
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

    fn handler() -> (AddPageByDateHandler, InMemoryVaultStorage, RecordingNotifier) {
        let storage = InMemoryVaultStorage::new();
        let notifier = RecordingNotifier::new();
        let add_page = AddPageHandler::new(
            Arc::new(storage.clone()),
            Arc::new(NoFetch),
            Arc::new(notifier.clone()),
            NoteSettings::default(),
            AttachmentFolder::VaultRoot,
        );
        let handler = AddPageByDateHandler::new(
            Arc::new(Catalog::bundled().unwrap()),
            Arc::new(add_page),
        );
        (handler, storage, notifier)
    }

    #[tokio::test]
    async fn adds_page_for_date() {
        let (handler, storage, _) = handler();

        let result = handler
            .handle(AddPageByDateCommand::new("2021-12-16"))
            .await
            .unwrap();

        assert_eq!(result.note.page_name, "Daf Yomi Megillah 4");
        assert!(storage.read_text(&result.note.path).await.is_some());
    }

    #[tokio::test]
    async fn malformed_date_is_notified_without_side_effects() {
        let (handler, storage, notifier) = handler();

        let err = handler
            .handle(AddPageByDateCommand::new("16/12/2021"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDateFormat);
        assert_eq!(storage.file_count().await, 0);
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
    }

    #[tokio::test]
    async fn date_before_catalog_is_notified() {
        let (handler, storage, notifier) = handler();

        let err = handler
            .handle(AddPageByDateCommand::new("2020-01-01"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NoSegmentForDate);
        assert_eq!(storage.file_count().await, 0);
        assert_eq!(
            notifier.messages(),
            vec!["Date 2020-01-01 does not match a Daf"]
        );
    }
}
