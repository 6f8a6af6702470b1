mod fetch;
mod source_error;

pub use fetch::{source_from_location, ListingSource};
pub use source_error::LoadError;
