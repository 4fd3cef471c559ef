//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod daf;

pub use daf::{
    AddPageByDafCommand, AddPageByDafHandler, AddPageByDateCommand, AddPageByDateHandler,
    AddPageCommand, AddPageError, AddPageHandler, AddPageResult, TodaysDafHandler,
    TodaysDafQuery, TodaysDafResult,
};
