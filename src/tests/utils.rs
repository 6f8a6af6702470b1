use crate::controller::{BrowserController, ControllerSettings};
use crate::domain::Listing;
use crate::router::{handle, AppState};
use crate::source::{ListingSource, LoadError};
use crate::storage::MemoryStorage;
use astra::{Body, Request, Response};
use serde_json::json;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Mutex;

pub const ROOM_TYPES: [&str; 3] = ["Entire home/apt", "Private room", "Shared room"];

/// `n` listings with ids starting at 1, room types cycling through
/// `ROOM_TYPES`, prices between $40 and $299, and every seventh one a loft.
pub fn sample_listings(n: i64) -> Vec<Listing> {
    (1..=n)
        .map(|i| {
            let kind = if i % 7 == 0 { "Sunny loft" } else { "Home" };
            Listing {
                id: i,
                name: Some(format!("{kind} {i} · ★4.{} · 1 bedroom · {} beds", i % 10, i % 4)),
                description: Some(format!("<b>Listing {i}</b><br/>Close to everything.")),
                price: Some(format!("${}.00", 40 + (i * 37) % 260)),
                room_type: Some(ROOM_TYPES[((i - 1) % 3) as usize].to_string()),
                bedrooms: Some(1),
                beds: Some((i % 4) as u32),
                accommodates: Some(2),
                amenities: Some(json!("[\"Wifi\", \"Kitchen\", \"Heating\", \"Washer\"]")),
                host_name: Some(format!("Host {i}")),
                host_is_superhost: Some(if i % 2 == 0 { "t" } else { "f" }.to_string()),
                host_since: Some("2015-08-01".to_string()),
                neighbourhood_cleansed: Some("Mission".to_string()),
                listing_url: Some(format!("https://www.airbnb.com/rooms/{i}")),
                ..Default::default()
            }
        })
        .collect()
}

/// Canned dataset source. Can be told to fail a number of times before
/// serving the listings, to exercise retry.
pub struct StaticSource {
    listings: Vec<Listing>,
    failures_left: AtomicUsize,
    status: u16,
}

impl StaticSource {
    pub fn ok(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            failures_left: AtomicUsize::new(0),
            status: 200,
        }
    }

    /// Always answers with a non-2xx status.
    pub fn status(status: u16) -> Self {
        Self {
            listings: Vec::new(),
            failures_left: AtomicUsize::new(usize::MAX),
            status,
        }
    }

    pub fn failing_first(listings: Vec<Listing>, failures: usize, status: u16) -> Self {
        Self {
            listings,
            failures_left: AtomicUsize::new(failures),
            status,
        }
    }
}

impl ListingSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Listing>, LoadError> {
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if failing {
            Err(LoadError::Status(self.status))
        } else {
            Ok(self.listings.clone())
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Source whose fetch announces itself on `started` and then waits for a
/// message on `release` before answering.
pub struct GatedSource {
    pub listings: Vec<Listing>,
    pub started: Mutex<Sender<()>>,
    pub release: Mutex<Receiver<()>>,
}

impl ListingSource for GatedSource {
    fn fetch(&self) -> Result<Vec<Listing>, LoadError> {
        self.started.lock().unwrap().send(()).unwrap();
        self.release.lock().unwrap().recv().unwrap();
        Ok(self.listings.clone())
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}

/// App state over an in-memory store with `source` already loaded once.
pub fn make_app(source: StaticSource) -> AppState {
    let mut controller =
        BrowserController::new(Box::new(MemoryStorage::new()), ControllerSettings::default());
    controller.load(&source);
    AppState::new(controller, Box::new(source))
}

pub fn request(method: &str, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Runs one request through the router and returns status and body.
pub fn send(app: &AppState, method: &str, uri: &str) -> (u16, String) {
    let resp = handle(request(method, uri), app).unwrap();
    let status = resp.status().as_u16();
    (status, body_string(resp))
}

pub fn card_count(html: &str) -> usize {
    html.matches("class=\"listing-card card\"").count()
}

/// Listing ids of the rendered cards, in display order.
pub fn card_ids(html: &str) -> Vec<i64> {
    html.split("data-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
