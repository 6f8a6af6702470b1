use crate::domain::Listing;
use crate::templates::components::card::{heart_button, NO_IMAGE};
use crate::templates::components::text::{description_text, shorten};
use maud::{html, Markup};

const NO_HOST_AVATAR: &str = "https://via.placeholder.com/64?text=?";
const DEFAULT_NEIGHBOURHOOD: &str = "San Francisco";

fn stat_box(value: &str, icon: &str, label: &str) -> Markup {
    html! {
        div class="col-3" {
            div class="stat-box" {
                div class="stat-value" { (value) }
                div class="stat-label" { i class=(icon) {} " " (label) }
            }
        }
    }
}

/// The panel's heart. Carries a stable id so a toggle response can replace it
/// in place while the modal is open.
pub fn detail_favorite_button(id: i64, is_favorite: bool, oob: bool) -> Markup {
    let dom_id = format!("detail-fav-{id}");
    heart_button(id, is_favorite, "btn btn-outline-secondary", Some(&dom_id), oob)
}

/// Expanded read-only panel for one listing, swapped into the modal body.
pub fn listing_detail(listing: &Listing, is_favorite: bool) -> Markup {
    let title = listing.title();
    let amenities = listing.amenities();
    let rating = match listing.rating().filter(|_| !listing.is_new()) {
        Some(r) => format!("{r:.1}"),
        None => "New".to_string(),
    };
    let host_since = listing
        .host_since_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let bio = Some(shorten(listing.host_about.as_deref(), 150))
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "No bio available".to_string());
    let description = listing
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(description_text)
        .unwrap_or_else(|| "No description available".to_string());
    let host_photo = listing
        .host_picture_url
        .as_deref()
        .or(listing.host_thumbnail_url.as_deref())
        .unwrap_or(NO_HOST_AVATAR);

    html! {
        h5 id="listingModalLabel" hx-swap-oob="true" class="modal-title" { (title) }

        img src=(listing.picture_url.as_deref().unwrap_or(NO_IMAGE)) alt=(title) class="main-image";

        div class="d-flex justify-content-between align-items-start mb-3" {
            div {
                h4 { (title) }
                p class="text-muted mb-0" {
                    i class="bi bi-geo-alt" {} " "
                    (listing.neighbourhood_cleansed.as_deref().unwrap_or(DEFAULT_NEIGHBOURHOOD))
                }
            }
            div class="text-end" {
                span class="fs-4 fw-bold text-danger" { (listing.price.as_deref().unwrap_or("N/A")) }
                small class="text-muted" { "/night" }
            }
        }

        div class="row g-3 mb-4" {
            (stat_box(&rating, "bi bi-star-fill text-warning", "Rating"))
            (stat_box(&listing.bedrooms.unwrap_or(0).to_string(), "bi bi-door-open", "Bedrooms"))
            (stat_box(&listing.beds.unwrap_or(0).to_string(), "bi bi-lamp", "Beds"))
            (stat_box(&listing.accommodates.unwrap_or(0).to_string(), "bi bi-people", "Guests"))
        }

        div class="mb-4" {
            h5 { i class="bi bi-person-circle me-2" {} "About the Host" }
            div class="d-flex align-items-center p-3 rounded host-panel" {
                img
                    src=(host_photo)
                    alt=(listing.host_name.as_deref().unwrap_or("Host"))
                    class="rounded-circle me-3 host-avatar"
                    onerror=(format!("this.onerror=null;this.src='{NO_HOST_AVATAR}'"));
                div {
                    h6 class="mb-1" {
                        (listing.host_name.as_deref().unwrap_or("Unknown"))
                        @if listing.is_superhost() {
                            " "
                            span class="badge bg-warning text-dark" { i class="bi bi-award" {} " Superhost" }
                        }
                    }
                    small class="text-muted" { "Host since " (host_since) }
                    p class="mb-0 small mt-1" { (bio) }
                }
            }
        }

        div class="mb-4" {
            h5 { i class="bi bi-card-text me-2" {} "Description" }
            p style="white-space: pre-line;" {
                (description)
            }
        }

        div class="mb-4" {
            h5 { i class="bi bi-check2-circle me-2" {} "Amenities (" (amenities.len()) ")" }
            div class="amenities-grid" {
                @for amenity in &amenities {
                    div class="amenity-item" { i class="bi bi-check-lg" {} " " (amenity) }
                }
            }
        }

        div class="d-flex gap-2" {
            @if let Some(url) = listing.listing_url.as_deref() {
                a href=(url) target="_blank" rel="noopener" class="btn btn-danger flex-grow-1" {
                    i class="bi bi-box-arrow-up-right me-1" {} " View on Airbnb"
                }
            }
            (detail_favorite_button(listing.id, is_favorite, false))
        }
    }
}
