pub mod file;
pub mod html;

pub use crate::errors::ResultResp;

// Normal HTML responses
pub use html::{html_response, no_content, redirect, status_response};

// Files under the static directory
pub use file::static_file_response;
