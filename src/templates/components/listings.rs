use crate::controller::LoadState;
use crate::domain::ViewMode;
use crate::templates::components::{listing_card, load_error};
use crate::templates::pages::BrowseVm;
use maud::{html, Markup};

pub fn count_label(shown: usize) -> String {
    if shown == 0 {
        "(0 results)".to_string()
    } else {
        format!("(showing {shown})")
    }
}

/// The swappable region under the toolbar: count label and cards, the empty
/// state, the spinner while loading, or the load error with a retry action.
pub fn listings_region(vm: &BrowseVm) -> Markup {
    let list_class = match vm.view {
        ViewMode::Grid => "row g-4",
        ViewMode::List => "row g-4 list-view",
    };

    html! {
        section id="listings-region" {
            @match vm.load {
                LoadState::Loading => {
                    div id="loadingSpinner" class="text-center py-5" {
                        div class="spinner-border text-danger" role="status" {
                            span class="visually-hidden" { "Loading..." }
                        }
                    }
                },
                LoadState::Failed(reason) => {
                    div id="listings" class="row g-4" { (load_error(reason)) }
                },
                LoadState::Ready => {
                    p class="text-muted mb-3" {
                        span id="resultsCount" { (count_label(vm.visible.len())) }
                    }
                    @if vm.visible.is_empty() {
                        div id="noResults" class="text-center py-5" {
                            i class="bi bi-search display-1 text-muted" {}
                            h4 class="mt-3" { "No listings found" }
                            p class="text-muted" { "Try adjusting your search or filters." }
                        }
                    } @else {
                        div id="listings" class=(list_class) {
                            @for listing in &vm.visible {
                                (listing_card(listing, vm.favorites.contains(listing.id)))
                            }
                        }
                    }
                },
            }
        }
    }
}
