// src/tests/router_tests/browse_tests.rs

use crate::domain::Listing;
use crate::errors::ServerError;
use crate::router::handle;
use crate::controller::{BrowserController, ControllerSettings};
use crate::router::AppState;
use crate::storage::MemoryStorage;
use crate::tests::utils::{
    body_string, card_count, card_ids, make_app, request, sample_listings, send, GatedSource,
    StaticSource,
};
use std::sync::{mpsc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn loaded_app() -> crate::router::AppState {
    make_app(StaticSource::ok(sample_listings(50)))
}

#[test]
fn home_page_renders_every_listing() {
    let app = loaded_app();
    let (status, body) = send(&app, "GET", "/");

    assert_eq!(status, 200);
    assert_eq!(card_count(&body), 50);
    assert!(body.contains("(showing 50)"));
    assert!(body.contains("data-theme=\"light\""));
    assert!(body.contains("<option value=\"Shared room\""));
    assert!(body.contains("id=\"listingModal\""));
}

#[test]
fn price_and_type_filters_apply_together() {
    let app = loaded_app();
    let (status, body) = send(
        &app,
        "GET",
        "/listings?max_price=100&type=Entire%20home%2Fapt",
    );

    let expected: Vec<i64> = sample_listings(50)
        .iter()
        .filter(|l| l.price_value() <= 100.0)
        .filter(|l| l.room_type.as_deref() == Some("Entire home/apt"))
        .map(|l| l.id)
        .collect();

    assert_eq!(status, 200);
    assert!(!expected.is_empty());
    assert_eq!(card_ids(&body), expected);
    assert!(body.contains(&format!("(showing {})", expected.len())));
    assert!(body.contains("<span id=\"priceValue\" hx-swap-oob=\"true\">$100</span>"));
}

#[test]
fn committed_search_is_case_insensitive() {
    let app = loaded_app();
    let (_, body) = send(&app, "GET", "/search?q=LOFT");

    assert_eq!(card_ids(&body), vec![7, 14, 21, 28, 35, 42, 49]);
}

#[test]
fn keystrokes_wait_for_the_debounce() {
    let app = loaded_app();

    let (status, _) = send(&app, "GET", "/search/input?q=loft");
    assert_eq!(status, 202);

    let (_, body) = send(&app, "GET", "/listings");
    assert_eq!(card_count(&body), 50);

    std::thread::sleep(Duration::from_millis(350));

    let (_, body) = send(&app, "GET", "/listings");
    assert_eq!(card_count(&body), 7);
}

#[test]
fn price_sorts_are_ordered() {
    let app = loaded_app();
    let all = sample_listings(50);
    let price_of = |id: i64| {
        all.iter()
            .find(|l| l.id == id)
            .map(Listing::price_value)
            .unwrap()
    };

    let (_, body) = send(&app, "GET", "/listings?sort=price-low");
    let low: Vec<f64> = card_ids(&body).into_iter().map(price_of).collect();
    assert!(low.windows(2).all(|w| w[0] <= w[1]));

    let (_, body) = send(&app, "GET", "/listings?sort=price-high");
    let high: Vec<f64> = card_ids(&body).into_iter().map(price_of).collect();
    assert!(high.windows(2).all(|w| w[0] >= w[1]));

    let (_, body) = send(&app, "GET", "/listings?sort=original");
    assert_eq!(card_ids(&body), (1..=50).collect::<Vec<i64>>());
}

#[test]
fn same_criteria_twice_gives_the_same_page() {
    let app = loaded_app();
    let uri = "/listings?q=home&max_price=200&sort=rating";

    let (_, first) = send(&app, "GET", uri);
    let (_, second) = send(&app, "GET", uri);
    assert_eq!(card_ids(&first), card_ids(&second));
}

#[test]
fn empty_result_shows_zero_count() {
    let app = loaded_app();
    let (_, body) = send(&app, "GET", "/listings?max_price=10");

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("(0 results)"));
    assert!(body.contains("No listings found"));
}

#[test]
fn invalid_params_are_bad_requests() {
    let app = loaded_app();

    let err = handle(request("GET", "/listings?sort=cheapest"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(request("GET", "/listings?max_price=lots"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(request("GET", "/view/diagonal"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let app = loaded_app();
    let err = handle(request("GET", "/admin"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn view_mode_switches_the_list_class() {
    let app = loaded_app();

    let (_, body) = send(&app, "GET", "/view/list");
    assert!(body.contains("list-view"));

    let (_, body) = send(&app, "GET", "/view/grid");
    assert!(!body.contains("list-view"));
}

#[test]
fn theme_toggle_redirects_and_sticks() {
    let app = loaded_app();

    let resp = handle(request("POST", "/theme"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let (_, body) = send(&app, "GET", "/");
    assert!(body.contains("data-theme=\"dark\""));
    assert!(body.contains("bi bi-sun-fill"));
}

#[test]
fn failed_load_shows_error_and_retry_recovers() {
    let app = make_app(StaticSource::failing_first(sample_listings(10), 1, 500));

    let (status, body) = send(&app, "GET", "/");
    assert_eq!(status, 200);
    assert!(body.contains("Failed to load listings"));
    assert!(body.contains("HTTP error: 500"));
    assert_eq!(card_count(&body), 0);

    let (_, body) = send(&app, "POST", "/retry");
    assert_eq!(card_count(&body), 10);
    assert!(body.contains("(showing 10)"));
}

#[test]
fn retry_fetches_without_holding_the_controller() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();

    let mut controller =
        BrowserController::new(Box::new(MemoryStorage::new()), ControllerSettings::default());
    controller.load(&StaticSource::ok(sample_listings(3)));
    let source = GatedSource {
        listings: sample_listings(5),
        started: Mutex::new(started_tx),
        release: Mutex::new(release_rx),
    };
    let app = AppState::new(controller, Box::new(source));

    std::thread::scope(|s| {
        let retry = s.spawn(|| send(&app, "POST", "/retry"));
        started_rx.recv().unwrap();

        // Fetch in flight: other requests still get through.
        assert!(app.controller.try_lock().is_ok());
        let (status, body) = send(&app, "GET", "/listings");
        assert_eq!(status, 200);
        assert_eq!(card_count(&body), 3);

        release_tx.send(()).unwrap();
        let (status, body) = retry.join().unwrap();
        assert_eq!(status, 200);
        assert_eq!(card_count(&body), 5);
    });
}

#[test]
fn static_files_are_served_from_the_static_dir() {
    let dir = std::env::temp_dir().join(format!(
        "listing_static_{}",
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("main.css"), "body { margin: 0; }").unwrap();

    let app = make_app(StaticSource::ok(sample_listings(3))).with_static_dir(&dir);

    let resp = handle(request("GET", "/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css");
    assert_eq!(body_string(resp), "body { margin: 0; }");

    let err = handle(request("GET", "/static/missing.js"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(request("GET", "/static/../Cargo.toml"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn page_loads_htmx_and_the_local_stylesheet() {
    let app = loaded_app();
    let (_, body) = send(&app, "GET", "/");
    assert!(body.contains("htmx.org"));
    assert!(body.contains("href=\"/static/main.css\""));
}

#[test]
fn search_box_debounces_on_the_client() {
    let app = loaded_app();
    let (_, body) = send(&app, "GET", "/");
    assert!(body.contains("hx-get=\"/search\""));
    assert!(body.contains("input changed delay:300ms, search"));
    assert!(!body.contains("/search/input"));
}
