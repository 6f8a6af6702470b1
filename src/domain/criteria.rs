// src/domain/criteria.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRICE_CEILING: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomTypeFilter {
    #[default]
    All,
    Only(String),
}

impl RoomTypeFilter {
    /// Dropdown value: "all" or the exact room type.
    pub fn from_param(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            RoomTypeFilter::All
        } else {
            RoomTypeFilter::Only(raw.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            RoomTypeFilter::All => "all",
            RoomTypeFilter::Only(t) => t,
        }
    }
}

/// Everything the user can narrow the collection by.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub room_type: RoomTypeFilter,
    pub max_price: u32,
    pub favorites_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            room_type: RoomTypeFilter::All,
            max_price: DEFAULT_PRICE_CEILING,
            favorites_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Original,
    PriceLow,
    PriceHigh,
    Rating,
    Beds,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Original,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Rating,
        SortOrder::Beds,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Original => "original",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Rating => "rating",
            SortOrder::Beds => "beds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Original => "Recommended",
            SortOrder::PriceLow => "Price: Low to High",
            SortOrder::PriceHigh => "Price: High to Low",
            SortOrder::Rating => "Top Rated",
            SortOrder::Beds => "Most Beds",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_param() == s.trim())
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
