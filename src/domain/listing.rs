// src/domain/listing.rs

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

lazy_static! {
    // Leading number of the token after `★`, so "★4.8.7" reads as 4.8.
    static ref RATING_REGEX: Regex = Regex::new(r"★(\d*\.?\d+)").unwrap();
    static ref PRICE_REGEX: Regex = Regex::new(r"\$([\d,]+)").unwrap();
}

// listing
//  ├── id
//  ├── name                 "Loft in SF · ★4.87 · 1 bedroom · 1 bed"
//  ├── description          marked-up text
//  ├── price                "$1,250.00"
//  ├── room_type
//  ├── bedrooms / beds / accommodates
//  ├── amenities            "[\"Wifi\", \"Kitchen\"]"
//  ├── host_*               name, photos, about, superhost ("t"/"f"), since
//  ├── neighbourhood_cleansed
//  └── picture_url / listing_url

/// One rental property record as it appears in the dataset.
/// Everything except the id is optional; rendering supplies its own fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub room_type: Option<String>,

    #[serde(default, deserialize_with = "count")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub beds: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub accommodates: Option<u32>,

    // Either a JSON-encoded string or a real array, depending on the export.
    #[serde(default)]
    pub amenities: Option<Value>,

    #[serde(default, deserialize_with = "text")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub host_thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub host_picture_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub host_about: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub host_is_superhost: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub host_since: Option<String>,

    #[serde(default, deserialize_with = "text")]
    pub neighbourhood_cleansed: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub picture_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub listing_url: Option<String>,
}

impl Listing {
    /// Rating embedded in the name after the `★` marker.
    /// A missing marker or a non-numeric token ("★New") means no rating yet.
    pub fn rating(&self) -> Option<f64> {
        let name = self.name.as_deref()?;
        let token = RATING_REGEX.captures(name)?.get(1)?;
        token.as_str().parse::<f64>().ok()
    }

    /// Listings without a positive rating are shown as "New".
    pub fn is_new(&self) -> bool {
        self.rating().map_or(true, |r| r <= 0.0)
    }

    /// Nightly price in whole currency units; anything unparseable is 0.
    pub fn price_value(&self) -> f64 {
        parse_price(self.price.as_deref())
    }

    pub fn amenities(&self) -> Vec<String> {
        match &self.amenities {
            Some(Value::String(raw)) => serde_json::from_str::<Vec<String>>(raw).unwrap_or_default(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Display title: the part of the name before the first `·`.
    pub fn title(&self) -> String {
        self.name
            .as_deref()
            .and_then(|n| n.split('·').next())
            .unwrap_or("")
            .trim()
            .to_string()
    }

    pub fn is_superhost(&self) -> bool {
        self.host_is_superhost.as_deref() == Some("t")
    }

    pub fn host_since_year(&self) -> Option<i32> {
        let raw = self.host_since.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// Pulls the digits following the first `$`, ignoring thousands separators
/// and any cents.
pub fn parse_price(raw: Option<&str>) -> f64 {
    raw.and_then(|raw| PRICE_REGEX.captures(raw))
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0)
}

// Text fields occasionally arrive as numbers or booleans; those keep their
// literal text and anything else (objects, arrays, null) is treated as absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

// Counts show up as ints, floats ("2.0"), strings or null across exports.
fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u32),
        _ => None,
    })
}
