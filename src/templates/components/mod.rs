pub mod card;
pub mod controls;
pub mod detail;
pub mod error;
pub mod listings;
pub mod text;

pub use card::listing_card;
pub use controls::{controls, ControlsVm};
pub use detail::{detail_favorite_button, listing_detail};
pub use error::{html_error_response, load_error};
pub use listings::{count_label, listings_region};
