//! Domain layer containing the Daf Yomi calendar and note logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (study date, error codes)
//! - `calendar` - The catalog of cycle segments (tractates)
//! - `daf` - Date and name resolution, chapter lookup
//! - `provider` - Commentary providers linked from notes
//! - `note` - Template rendering and note composition
//!
//! Everything here is synchronous and free of I/O.

pub mod calendar;
pub mod daf;
pub mod foundation;
pub mod note;
pub mod provider;
