//! Daf Yomi - Study notes for the daily Talmud page
//!
//! This crate maps a calendar date, or a tractate and page, onto the Daf
//! Yomi cycle and writes a markdown note for that page into a vault, linking
//! the commentary providers the user has enabled and keeping a per-tractate
//! index note up to date.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use daf_yomi::adapters::{LocalVaultStorage, ReqwestPdfFetcher, TracingNotifier};
//! use daf_yomi::application::{AddPageByDateCommand, AddPageByDateHandler, AddPageHandler};
//! use daf_yomi::config::NoteSettings;
//! use daf_yomi::domain::calendar::Catalog;
//! use daf_yomi::domain::note::AttachmentFolder;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let add_page = AddPageHandler::new(
//!     Arc::new(LocalVaultStorage::new("/home/me/Notes")),
//!     Arc::new(ReqwestPdfFetcher::new(None)?),
//!     Arc::new(TracingNotifier::new()),
//!     NoteSettings::default(),
//!     AttachmentFolder::VaultRoot,
//! );
//! let handler = AddPageByDateHandler::new(Arc::new(Catalog::bundled()?), Arc::new(add_page));
//! let result = handler.handle(AddPageByDateCommand::new("2021-12-16")).await?;
//! println!("{}", result.note.path);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
