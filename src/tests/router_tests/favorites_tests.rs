// src/tests/router_tests/favorites_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{card_ids, make_app, request, sample_listings, send, StaticSource};

#[test]
fn toggled_favorite_shows_up_in_favorites_view() {
    let app = make_app(StaticSource::ok(sample_listings(50)));

    let (status, body) = send(&app, "POST", "/favorites/3");
    assert_eq!(status, 200);
    assert!(body.contains("<span id=\"favCount\" class=\"badge bg-danger\" hx-swap-oob=\"true\">1</span>"));

    send(&app, "POST", "/favorites/12");

    let (_, body) = send(&app, "GET", "/favorites/only");
    assert_eq!(card_ids(&body), vec![3, 12]);
    assert!(body.contains("(showing 2)"));

    let (_, body) = send(&app, "GET", "/favorites/all");
    assert_eq!(card_ids(&body).len(), 50);
}

#[test]
fn toggling_twice_restores_favorites() {
    let app = make_app(StaticSource::ok(sample_listings(50)));

    send(&app, "GET", "/favorites/only");
    send(&app, "POST", "/favorites/8");
    let (_, body) = send(&app, "POST", "/favorites/8");

    assert!(card_ids(&body).is_empty());
    assert!(body.contains("(0 results)"));

    let controller = app.controller.lock().unwrap();
    assert_eq!(controller.favorites().len(), 0);
}

#[test]
fn favorites_view_still_honours_other_filters() {
    let app = make_app(StaticSource::ok(sample_listings(50)));

    for id in [1, 2, 3, 4] {
        send(&app, "POST", &format!("/favorites/{id}"));
    }

    let (_, body) = send(&app, "GET", "/listings?type=Private%20room");
    assert!(card_ids(&body).contains(&5));

    let (_, body) = send(&app, "GET", "/favorites/only");
    assert_eq!(card_ids(&body), vec![2]);
}

#[test]
fn favorite_id_must_be_numeric() {
    let app = make_app(StaticSource::ok(sample_listings(5)));
    let err = handle(request("POST", "/favorites/abc"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

/// Markup of the out-of-band detail heart for `id` in a toggle response.
fn detail_heart(body: &str, id: i64) -> &str {
    let marker = format!("id=\"detail-fav-{id}\"");
    let start = body.find(&marker).unwrap();
    let rest = &body[start..];
    &rest[..rest.find("</button>").unwrap()]
}

#[test]
fn toggle_response_updates_the_open_detail_heart() {
    let app = make_app(StaticSource::ok(sample_listings(20)));

    let (_, detail) = send(&app, "GET", "/listing/5");
    assert!(detail_heart(&detail, 5).contains("bi-heart\""));

    let (_, body) = send(&app, "POST", "/favorites/5");
    let heart = detail_heart(&body, 5);
    assert!(heart.contains("hx-swap-oob=\"true\""));
    assert!(heart.contains("bi-heart-fill"));
    assert!(heart.contains("Remove from favorites"));

    let (_, body) = send(&app, "POST", "/favorites/5");
    let heart = detail_heart(&body, 5);
    assert!(heart.contains("bi-heart\""));
    assert!(heart.contains("Add to favorites"));
}
