use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset: {0}")]
    JsonParse(#[from] serde_json::Error),
}
