pub mod browse;

pub use browse::{browse_page, favorite_toggle_fragment, listings_fragment, BrowseVm};
