// fetch.rs
use crate::domain::Listing;
use crate::source::LoadError;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("listing-browser/", env!("CARGO_PKG_VERSION"));

/// Where the listing dataset comes from. Called at startup and on every retry.
pub trait ListingSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Listing>, LoadError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ListingSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Listing>, LoadError> {
        debug!(url = %self.url, "fetching dataset");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for FileSource {
    fn fetch(&self) -> Result<Vec<Listing>, LoadError> {
        debug!(path = %self.path.display(), "reading dataset");
        let body = fs::read_to_string(&self.path)?;
        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// `http(s)://` locations are fetched, anything else is read from disk.
pub fn source_from_location(location: &str) -> Result<Box<dyn ListingSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// The dataset must be a JSON array. Records inside it are decoded one by one
/// so a single unusable entry (no numeric id, not an object) is skipped.
fn parse_dataset(body: &str) -> Result<Vec<Listing>, LoadError> {
    let records = serde_json::from_str::<Vec<Value>>(body)?;
    let total = records.len();

    let listings: Vec<Listing> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Listing>(record) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable listing record");
                None
            }
        })
        .collect();

    if listings.len() < total {
        debug!(kept = listings.len(), total, "dataset decoded with skipped records");
    }
    Ok(listings)
}
