pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, listing_detail};
pub use layouts::desktop::desktop_layout;
pub use pages::{browse_page, favorite_toggle_fragment, listings_fragment, BrowseVm};
