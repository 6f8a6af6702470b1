use crate::controller::LoadState;
use crate::domain::{FilterCriteria, Listing, SortOrder, Theme, ViewMode};
use crate::storage::Favorites;
use crate::templates::components::{controls, detail_favorite_button, listings_region, ControlsVm};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Everything one render of the browse page needs, borrowed from the controller.
pub struct BrowseVm<'a> {
    pub visible: Vec<&'a Listing>,
    pub total: usize,
    pub load: &'a LoadState,
    pub favorites: &'a Favorites,
    pub criteria: &'a FilterCriteria,
    pub sort: SortOrder,
    pub view: ViewMode,
    pub theme: Theme,
    pub room_types: &'a [String],
    pub price_ceiling: u32,
    pub debounce_ms: u64,
}

impl BrowseVm<'_> {
    fn controls(&self) -> ControlsVm<'_> {
        ControlsVm {
            criteria: self.criteria,
            sort: self.sort,
            view: self.view,
            theme: self.theme,
            room_types: self.room_types,
            price_ceiling: self.price_ceiling,
            debounce_ms: self.debounce_ms,
            favorites_count: self.favorites.len(),
            total: self.total,
        }
    }
}

pub fn browse_page(vm: &BrowseVm) -> Markup {
    desktop_layout(
        "Listings",
        vm.theme,
        html! {
            main class="container py-4" {
                (controls(&vm.controls()))
                (listings_region(vm))
            }

            div class="modal fade" id="listingModal" tabindex="-1" aria-labelledby="listingModalLabel" aria-hidden="true" {
                div class="modal-dialog modal-lg modal-dialog-scrollable" {
                    div class="modal-content" {
                        div class="modal-header" {
                            h5 class="modal-title" id="listingModalLabel" {}
                            button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close" {}
                        }
                        div class="modal-body" id="modalBody" {}
                    }
                }
            }
        },
    )
}

/// Fragment returned to htmx after any control change: the listings region
/// plus out-of-band updates for the counters that live in the toolbar.
pub fn listings_fragment(vm: &BrowseVm) -> Markup {
    html! {
        (listings_region(vm))
        span id="favCount" class="badge bg-danger" hx-swap-oob="true" { (vm.favorites.len()) }
        span id="priceValue" hx-swap-oob="true" { "$" (vm.criteria.max_price) }
        span id="totalListings" hx-swap-oob="true" { (vm.total) }
    }
}

/// Reply to a favorite toggle: the usual fragment plus the detail panel's
/// heart, so an open modal mirrors the card.
pub fn favorite_toggle_fragment(vm: &BrowseVm, id: i64, is_favorite: bool) -> Markup {
    html! {
        (listings_fragment(vm))
        (detail_favorite_button(id, is_favorite, true))
    }
}
