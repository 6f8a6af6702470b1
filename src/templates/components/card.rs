use crate::domain::Listing;
use crate::templates::components::text::{plural, shorten};
use maud::{html, Markup};

pub const NO_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const BROKEN_IMAGE: &str = "https://via.placeholder.com/400x300?text=Image+Not+Available";
pub const NO_HOST_PHOTO: &str = "https://via.placeholder.com/40?text=?";

pub const VISIBLE_AMENITIES: usize = 3;

fn onerror_fallback(url: &str) -> String {
    format!("this.onerror=null;this.src='{url}'")
}

/// Heart button shared by the card and the detail panel.
pub fn favorite_button(id: i64, is_favorite: bool, class: &str) -> Markup {
    heart_button(id, is_favorite, class, None, false)
}

/// `dom_id` lets a later response find this button again; `oob` marks the
/// copy sent back out-of-band after a toggle.
pub fn heart_button(
    id: i64,
    is_favorite: bool,
    class: &str,
    dom_id: Option<&str>,
    oob: bool,
) -> Markup {
    html! {
        button
            id=[dom_id]
            class=(if is_favorite { format!("{class} active") } else { class.to_string() })
            title=(if is_favorite { "Remove from favorites" } else { "Add to favorites" })
            hx-post=(format!("/favorites/{id}"))
            hx-target="#listings-region"
            hx-swap="outerHTML"
            hx-swap-oob=[oob.then_some("true")]
        {
            i class={ "bi " (if is_favorite { "bi-heart-fill" } else { "bi-heart" }) } {}
        }
    }
}

pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    let title = listing.title();
    let amenities = listing.amenities();
    let superhost = listing.is_superhost();
    let bedrooms = listing.bedrooms.unwrap_or(0);
    let hidden_amenities = amenities.len().saturating_sub(VISIBLE_AMENITIES);

    html! {
        div class="col-lg-4 col-md-6 col-12" {
            div class="listing-card card" data-id=(listing.id) {
                div class="card-img-container" {
                    img
                        src=(listing.picture_url.as_deref().unwrap_or(NO_IMAGE))
                        class="card-img-top"
                        alt=(title)
                        loading="lazy"
                        onerror=(onerror_fallback(BROKEN_IMAGE));
                    (favorite_button(listing.id, is_favorite, "favorite-btn"))
                    div class="price-badge" {
                        (listing.price.as_deref().unwrap_or("N/A"))
                        small { "/night" }
                    }
                    @if superhost {
                        div class="superhost-badge" { i class="bi bi-award" {} " Superhost" }
                    }
                }
                div class="card-body" {
                    h5 class="card-title" title=(title) { (title) }
                    div class="rating" {
                        @match listing.rating().filter(|_| !listing.is_new()) {
                            Some(r) => { i class="bi bi-star-fill" {} " " (format!("{r:.2}")) },
                            None => { i class="bi bi-star" {} " New" },
                        }
                        span class="ms-2 text-muted" {
                            i class="bi bi-door-open" {} " " (plural(bedrooms, "bed")) " · "
                            i class="bi bi-people" {} " " (listing.accommodates.unwrap_or(0)) " guests"
                        }
                    }
                    p class="description" { (shorten(listing.description.as_deref(), 100)) }
                    div class="amenities" {
                        @for amenity in amenities.iter().take(VISIBLE_AMENITIES) {
                            span class="amenity-badge" { (shorten(Some(amenity), 20)) }
                        }
                        @if hidden_amenities > 0 {
                            span class="amenity-badge" { "+" (hidden_amenities) " more" }
                        }
                    }
                    div class="host-section" {
                        img
                            src=(listing.host_thumbnail_url.as_deref().unwrap_or(NO_HOST_PHOTO))
                            alt=(listing.host_name.as_deref().unwrap_or("Host"))
                            class="host-photo"
                            onerror=(onerror_fallback(NO_HOST_PHOTO));
                        div class="host-info" {
                            p class="host-name" { (listing.host_name.as_deref().unwrap_or("Unknown")) }
                            p class="host-status" {
                                @if superhost {
                                    i class="bi bi-patch-check-fill text-primary" {} " Superhost"
                                } @else {
                                    "Host"
                                }
                            }
                        }
                    }
                    button
                        class="btn btn-view w-100"
                        hx-get=(format!("/listing/{}", listing.id))
                        hx-target="#modalBody"
                        data-bs-toggle="modal"
                        data-bs-target="#listingModal"
                    {
                        i class="bi bi-eye me-1" {} " View Details"
                    }
                }
            }
        }
    }
}
