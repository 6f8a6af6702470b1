pub mod criteria;
pub mod listing;
pub mod logic;

pub use criteria::{FilterCriteria, RoomTypeFilter, SortOrder, Theme, ViewMode};
pub use listing::Listing;
