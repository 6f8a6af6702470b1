use crate::controller::BrowserController;
use crate::domain::{RoomTypeFilter, SortOrder, ViewMode};
use crate::errors::ServerError;
use crate::responses::{
    html_response, no_content, redirect, static_file_response, status_response, ResultResp,
};
use crate::source::ListingSource;
use astra::Request;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Shared server state. The controller is the single owner of browse state;
/// the mutex applies events one at a time.
pub struct AppState {
    pub controller: Mutex<BrowserController>,
    pub source: Box<dyn ListingSource>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(controller: BrowserController, source: Box<dyn ListingSource>) -> Self {
        Self {
            controller: Mutex::new(controller),
            source,
            static_dir: PathBuf::from("static"),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    fn controller(&self) -> Result<MutexGuard<'_, BrowserController>, ServerError> {
        self.controller.lock().map_err(|_| ServerError::InternalError)
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    // Routes that must not hold the controller while they work.
    match (method, segments.as_slice()) {
        ("GET", ["static", rest @ ..]) => return static_file_response(&app.static_dir, rest),
        ("POST", ["retry"]) => return retry(app),
        _ => {}
    }

    let mut controller = app.controller()?;

    // Idle search input is committed before any event is applied.
    controller.tick(Instant::now());

    match (method, segments.as_slice()) {
        ("GET", [""]) => html_response(controller.page()),

        ("GET", ["listings"]) => {
            apply_params(&mut controller, &params)?;
            html_response(controller.listings_fragment())
        }

        ("GET", ["search"]) => {
            controller.submit_search(param(&params, "q"));
            html_response(controller.listings_fragment())
        }

        // Per-keystroke input for callers that do not debounce themselves.
        // The page's search box delays on the client and uses /search; input
        // sent here is committed by the tick of the next request once idle.
        ("GET", ["search", "input"]) => {
            controller.input_search(param(&params, "q"), Instant::now());
            status_response(202)
        }

        ("POST", ["favorites", id]) => {
            let id = parse_id(id)?;
            controller.toggle_favorite(id)?;
            html_response(controller.favorite_fragment(id))
        }

        ("GET", ["favorites", "only"]) => {
            controller.show_favorites();
            html_response(controller.listings_fragment())
        }

        ("GET", ["favorites", "all"]) => {
            controller.show_all();
            html_response(controller.listings_fragment())
        }

        ("GET", ["view", mode]) => {
            let mode = mode.parse::<ViewMode>().map_err(ServerError::BadRequest)?;
            controller.set_view(mode);
            html_response(controller.listings_fragment())
        }

        ("POST", ["theme"]) => {
            controller.toggle_theme()?;
            redirect("/")
        }

        ("GET", ["listing", id]) => {
            let id = parse_id(id)?;
            match controller.detail(id) {
                Some(markup) => html_response(markup),
                None => no_content(),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Re-runs the dataset fetch with the controller unlocked, then swaps the
/// result in.
fn retry(app: &AppState) -> ResultResp {
    let fetched = app.source.fetch();

    let mut controller = app.controller()?;
    controller.tick(Instant::now());
    controller.apply_fetch(fetched, &app.source.describe());
    html_response(controller.listings_fragment())
}

/// Applies whichever criteria the request carries; absent keys are left as they are.
fn apply_params(
    controller: &mut BrowserController,
    params: &HashMap<String, String>,
) -> Result<(), ServerError> {
    if let Some(q) = params.get("q") {
        controller.submit_search(q);
    }

    if let Some(room_type) = params.get("type") {
        controller.set_room_type(RoomTypeFilter::from_param(room_type));
    }

    if let Some(max_price) = params.get("max_price") {
        let max_price = max_price
            .trim()
            .parse::<u32>()
            .map_err(|_| ServerError::BadRequest(format!("invalid max_price: {max_price}")))?;
        controller.set_max_price(max_price);
    }

    if let Some(sort) = params.get("sort") {
        let sort = sort.parse::<SortOrder>().map_err(ServerError::BadRequest)?;
        controller.set_sort(sort);
    }

    Ok(())
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("invalid listing id: {raw}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
