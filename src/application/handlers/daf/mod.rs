//! Daf handlers - Adding notes by date or by tractate and page.

mod add_page;
mod add_page_by_daf;
mod add_page_by_date;
mod todays_daf;

pub use add_page::{AddPageCommand, AddPageError, AddPageHandler, AddPageResult};
pub use add_page_by_daf::{AddPageByDafCommand, AddPageByDafHandler};
pub use add_page_by_date::{AddPageByDateCommand, AddPageByDateHandler};
pub use todays_daf::{TodaysDafHandler, TodaysDafQuery, TodaysDafResult};
