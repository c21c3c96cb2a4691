//! Request shaping: name filter, sort and pagination over one fetched
//! dataset, plus the derived pager metadata.

mod pager;
mod processor;
mod query;
mod search;

pub use pager::{Pager, PAGE_WINDOW};
pub use processor::{process, sort_by_official_name, ResultPage, PAGE_SIZE};
pub use query::{QueryParams, SortOrder};
pub use search::SearchIndex;
