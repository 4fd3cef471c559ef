//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AddPageByDafCommand, AddPageByDafHandler, AddPageByDateCommand, AddPageByDateHandler,
    AddPageCommand, AddPageError, AddPageHandler, AddPageResult, TodaysDafHandler,
    TodaysDafQuery, TodaysDafResult,
};
