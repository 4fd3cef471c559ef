//! Where downloaded PDFs are saved, relative to the vault.

/// The vault's attachment folder setting, interpreted.
///
/// | Setting      | Meaning                                    |
/// |--------------|--------------------------------------------|
/// | `/` or empty | vault root                                 |
/// | `./`         | the folder holding the note                |
/// | `./<sub>`    | `<sub>` below the note folder              |
/// | anything else| that folder, from the vault root           |
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttachmentFolder {
    #[default]
    VaultRoot,
    NoteFolder,
    NoteSubfolder(String),
    Fixed(String),
}

impl AttachmentFolder {
    pub fn parse(setting: &str) -> Self {
        let setting = setting.trim();
        match setting {
            "" | "/" => AttachmentFolder::VaultRoot,
            "./" | "." => AttachmentFolder::NoteFolder,
            _ => match setting.strip_prefix("./") {
                Some(sub) => AttachmentFolder::NoteSubfolder(sub.trim_end_matches('/').to_string()),
                None => AttachmentFolder::Fixed(setting.trim_matches('/').to_string()),
            },
        }
    }

    /// The attachment directory for a note living in `note_directory`.
    ///
    /// The vault root resolves to the empty string so that joining with `/`
    /// yields a root-level path.
    pub fn resolve(&self, note_directory: &str) -> String {
        match self {
            AttachmentFolder::VaultRoot => String::new(),
            AttachmentFolder::NoteFolder => note_directory.to_string(),
            AttachmentFolder::NoteSubfolder(sub) => format!("{note_directory}/{sub}"),
            AttachmentFolder::Fixed(dir) => format!("/{dir}"),
        }
    }

    /// Whether the folder is created on demand when missing.
    ///
    /// Only note subfolders are; the vault root and the note folder always
    /// exist, and fixed folders are expected to be set up by the user.
    pub fn creates_on_demand(&self) -> bool {
        matches!(self, AttachmentFolder::NoteSubfolder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE_DIR: &str = "/Daf Yomi/Megillah";

    #[test]
    fn root_settings() {
        assert_eq!(AttachmentFolder::parse("/"), AttachmentFolder::VaultRoot);
        assert_eq!(AttachmentFolder::parse(""), AttachmentFolder::VaultRoot);
        assert_eq!(AttachmentFolder::VaultRoot.resolve(NOTE_DIR), "");
    }

    #[test]
    fn note_folder_setting() {
        let folder = AttachmentFolder::parse("./");
        assert_eq!(folder, AttachmentFolder::NoteFolder);
        assert_eq!(folder.resolve(NOTE_DIR), NOTE_DIR);
        assert!(!folder.creates_on_demand());
    }

    #[test]
    fn note_subfolder_setting() {
        let folder = AttachmentFolder::parse("./attachments/");
        assert_eq!(
            folder,
            AttachmentFolder::NoteSubfolder("attachments".to_string())
        );
        assert_eq!(folder.resolve(NOTE_DIR), "/Daf Yomi/Megillah/attachments");
        assert!(folder.creates_on_demand());
    }

    #[test]
    fn fixed_folder_is_rooted() {
        assert_eq!(
            AttachmentFolder::parse("Files/PDF").resolve(NOTE_DIR),
            "/Files/PDF"
        );
        assert_eq!(
            AttachmentFolder::parse("/Files/PDF/").resolve(NOTE_DIR),
            "/Files/PDF"
        );
    }
}
