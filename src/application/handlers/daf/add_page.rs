//! AddPageHandler - Writes the note for one Daf and links it from the index.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::NoteSettings;
use crate::domain::daf::Daf;
use crate::domain::foundation::{DafError, ErrorCode};
use crate::domain::note::{compose_note, AttachmentFolder, ComposedNote, IndexNote, PdfAttachment};
use crate::ports::{FetchError, Notice, Notifier, PdfFetcher, StorageError, VaultStorage};

/// Command to add the note for a resolved Daf.
#[derive(Debug, Clone)]
pub struct AddPageCommand {
    pub daf: Daf,
}

/// Result of a successful add.
#[derive(Debug)]
pub struct AddPageResult {
    /// The note as written.
    pub note: ComposedNote,
    /// Whether the note directory had to be created.
    pub created_directory: bool,
    /// Whether the index note was created rather than appended to.
    pub index_created: bool,
    /// The PDF download, if enabled. Resolves to the saved vault path.
    ///
    /// The note does not wait for it; await the handle only to observe the
    /// outcome.
    pub pdf_task: Option<JoinHandle<Result<String, AddPageError>>>,
}

/// Error type for adding a page.
#[derive(Debug, thiserror::Error)]
pub enum AddPageError {
    #[error(transparent)]
    Resolve(#[from] DafError),

    #[error("Note {page_name} already exists")]
    TargetAlreadyExists { page_name: String, path: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Download failed: {0}")]
    Fetch(#[from] FetchError),
}

impl AddPageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AddPageError::Resolve(err) => err.code(),
            AddPageError::TargetAlreadyExists { .. } => ErrorCode::TargetAlreadyExists,
            AddPageError::Storage(err) => err.code(),
            AddPageError::Fetch(err) => err.code(),
        }
    }
}

/// Handler for adding a Daf note.
pub struct AddPageHandler {
    storage: Arc<dyn VaultStorage>,
    fetcher: Arc<dyn PdfFetcher>,
    notifier: Arc<dyn Notifier>,
    settings: NoteSettings,
    attachment_folder: AttachmentFolder,
}

impl AddPageHandler {
    pub fn new(
        storage: Arc<dyn VaultStorage>,
        fetcher: Arc<dyn PdfFetcher>,
        notifier: Arc<dyn Notifier>,
        settings: NoteSettings,
        attachment_folder: AttachmentFolder,
    ) -> Self {
        Self {
            storage,
            fetcher,
            notifier,
            settings,
            attachment_folder,
        }
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub async fn handle(&self, cmd: AddPageCommand) -> Result<AddPageResult, AddPageError> {
        // 1. Compose paths and body
        let note = compose_note(&cmd.daf, &self.settings);

        // 2. Never overwrite; the index link is still recorded
        if self.storage.exists(&note.path).await? {
            self.update_index(&note.index).await?;
            warn!(path = %note.path, "Note already exists");
            self.notifier.notify(Notice::error(format!(
                "Note {} already exists",
                note.page_name
            )));
            return Err(AddPageError::TargetAlreadyExists {
                page_name: note.page_name,
                path: note.path,
            });
        }

        // 3. Make directory if necessary
        let created_directory = if self.storage.exists(&note.directory).await? {
            false
        } else {
            self.storage.create_dir(&note.directory).await?;
            info!(directory = %note.directory, "Created directory");
            self.notifier
                .notify(Notice::info(format!("Created directory {}", note.directory)));
            true
        };

        // 4. Start the PDF download without waiting for it
        let pdf_task = note
            .pdf
            .clone()
            .map(|pdf| self.spawn_pdf_download(pdf, note.directory.clone()));

        // 5. Write the note
        self.storage.create(&note.path, &note.body).await?;
        info!(path = %note.path, "Created note");
        self.notifier
            .notify(Notice::info(format!("Created note {}", note.page_name)));

        // 6. Link it from the index
        let index_created = self.update_index(&note.index).await?;
        let verb = if index_created { "Created" } else { "Added to" };
        self.notifier
            .notify(Notice::info(format!("{verb} note {}", note.index.title)));

        Ok(AddPageResult {
            note,
            created_directory,
            index_created,
            pdf_task,
        })
    }

    /// Creates the index note or appends the link to it. Returns true if created.
    async fn update_index(&self, index: &IndexNote) -> Result<bool, StorageError> {
        if self.storage.exists(&index.path).await? {
            let current = self.storage.read(&index.path).await?;
            self.storage
                .write(&index.path, &index.append_to(&current))
                .await?;
            Ok(false)
        } else {
            self.storage
                .create(&index.path, &index.new_document())
                .await?;
            Ok(true)
        }
    }

    fn spawn_pdf_download(
        &self,
        pdf: PdfAttachment,
        note_directory: String,
    ) -> JoinHandle<Result<String, AddPageError>> {
        let storage = Arc::clone(&self.storage);
        let fetcher = Arc::clone(&self.fetcher);
        let notifier = Arc::clone(&self.notifier);
        let folder = self.attachment_folder.clone();

        tokio::spawn(async move {
            let result = download_pdf(
                storage.as_ref(),
                fetcher.as_ref(),
                notifier.as_ref(),
                &folder,
                &note_directory,
                &pdf,
            )
            .await;
            if let Err(err) = &result {
                error!(url = %pdf.url, error = %err, "PDF download failed");
            }
            result
        })
    }
}

async fn download_pdf(
    storage: &dyn VaultStorage,
    fetcher: &dyn PdfFetcher,
    notifier: &dyn Notifier,
    folder: &AttachmentFolder,
    note_directory: &str,
    pdf: &PdfAttachment,
) -> Result<String, AddPageError> {
    let bytes = fetcher.fetch(&pdf.url).await?;

    let directory = folder.resolve(note_directory);
    if folder.creates_on_demand() && !storage.exists(&directory).await? {
        storage.create_dir(&directory).await?;
        notifier.notify(Notice::info(format!(
            "Created attachments directory {directory}"
        )));
    }

    let path = format!("{directory}/{}", pdf.file_name);
    storage.create_binary(&path, &bytes).await?;
    info!(path = %path, size = bytes.len(), "Saved PDF");
    Ok(path)
}
