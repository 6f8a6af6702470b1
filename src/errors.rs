use astra::Response;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (storage).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
