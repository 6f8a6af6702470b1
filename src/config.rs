use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::controller::{ControllerSettings, DEFAULT_LISTINGS_LIMIT};
use crate::debounce::SEARCH_DEBOUNCE;
use crate::domain::criteria::DEFAULT_PRICE_CEILING;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub listings_source: String,
    pub listings_limit: usize,
    /// None keeps preferences in memory for the life of the process.
    pub storage_path: Option<String>,
    pub schema_path: String,
    /// Directory served under `/static` (stylesheet, favicon).
    pub static_dir: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub search_debounce: Duration,
    pub price_ceiling: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            listings_source: env::var("LISTINGS_SOURCE")
                .unwrap_or_else(|_| "./airbnb_sf_listings_500.json".to_string()),
            listings_limit: parse_or("LISTINGS_LIMIT", DEFAULT_LISTINGS_LIMIT)?,
            storage_path: match env::var("STORAGE_PATH") {
                Ok(path) if path.trim().is_empty() => None,
                Ok(path) => Some(path),
                Err(_) => Some("browser_state.sqlite3".to_string()),
            },
            schema_path: env::var("SCHEMA_PATH").unwrap_or_else(|_| "sql/schema.sql".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            bind_addr: parse_or("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            max_workers: parse_or("MAX_WORKERS", 8)?,
            search_debounce: Duration::from_millis(parse_or(
                "SEARCH_DEBOUNCE_MS",
                SEARCH_DEBOUNCE.as_millis() as u64,
            )?),
            price_ceiling: parse_or("PRICE_CEILING", DEFAULT_PRICE_CEILING)?,
        })
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            limit: self.listings_limit,
            price_ceiling: self.price_ceiling,
            search_debounce: self.search_debounce,
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid value, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
