use crate::domain::{FilterCriteria, RoomTypeFilter, SortOrder, Theme, ViewMode};
use maud::{html, Markup};

pub struct ControlsVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub sort: SortOrder,
    pub view: ViewMode,
    pub theme: Theme,
    pub room_types: &'a [String],
    pub price_ceiling: u32,
    pub debounce_ms: u64,
    pub favorites_count: usize,
    pub total: usize,
}

/// Toolbar above the listings. Every control talks to the server through htmx
/// and gets the listings region back.
pub fn controls(vm: &ControlsVm) -> Markup {
    let theme_icon = match vm.theme {
        Theme::Dark => "bi bi-sun-fill",
        Theme::Light => "bi bi-moon-fill",
    };
    let selected_type = vm.criteria.room_type.as_param();
    let favorites_only = vm.criteria.favorites_only;

    html! {
        nav class="d-flex align-items-center justify-content-between mb-3" {
            div class="btn-group" role="group" {
                a id="showAll" href="#" class=(if favorites_only { "btn btn-outline-danger" } else { "btn btn-outline-danger active" })
                    hx-get="/favorites/all" hx-target="#listings-region" hx-swap="outerHTML"
                { "All listings " span class="badge bg-secondary" id="totalListings" { (vm.total) } }
                a id="showFavorites" href="#" class=(if favorites_only { "btn btn-outline-danger active" } else { "btn btn-outline-danger" })
                    hx-get="/favorites/only" hx-target="#listings-region" hx-swap="outerHTML"
                { i class="bi bi-heart-fill" {} " Favorites " span id="favCount" class="badge bg-danger" { (vm.favorites_count) } }
            }

            form method="post" action="/theme" {
                button id="themeToggle" type="submit" class="btn btn-outline-secondary" title="Toggle theme" {
                    i id="themeIcon" class=(theme_icon) {}
                }
            }
        }

        div class="row g-3 align-items-end mb-4 filters" {
            div class="col-md-4" {
                label for="searchInput" class="form-label" { "Search" }
                input
                    id="searchInput"
                    class="form-control"
                    type="search"
                    name="q"
                    value=(vm.criteria.query)
                    placeholder="Search by name, host, neighbourhood..."
                    hx-get="/search"
                    hx-trigger=(format!("input changed delay:{}ms, search", vm.debounce_ms))
                    hx-target="#listings-region"
                    hx-swap="outerHTML";
            }

            div class="col-md-2" {
                label for="sortSelect" class="form-label" { "Sort by" }
                select id="sortSelect" class="form-select" name="sort"
                    hx-get="/listings" hx-trigger="change" hx-target="#listings-region" hx-swap="outerHTML"
                {
                    @for order in SortOrder::ALL {
                        option value=(order.as_param()) selected[order == vm.sort] { (order.label()) }
                    }
                }
            }

            div class="col-md-2" {
                label for="typeFilter" class="form-label" { "Room type" }
                select id="typeFilter" class="form-select" name="type"
                    hx-get="/listings" hx-trigger="change" hx-target="#listings-region" hx-swap="outerHTML"
                {
                    option value="all" selected[vm.criteria.room_type == RoomTypeFilter::All] { "All types" }
                    @for room_type in vm.room_types {
                        option value=(room_type) selected[selected_type == room_type.as_str()] { (room_type) }
                    }
                }
            }

            div class="col-md-2" {
                label for="priceRange" class="form-label" {
                    "Max price: " span id="priceValue" { "$" (vm.criteria.max_price) }
                }
                input
                    id="priceRange"
                    class="form-range"
                    type="range"
                    name="max_price"
                    min="0"
                    max=(vm.price_ceiling)
                    step="10"
                    value=(vm.criteria.max_price)
                    hx-get="/listings"
                    hx-trigger="input"
                    hx-target="#listings-region"
                    hx-swap="outerHTML";
            }

            div class="col-md-2 text-end" {
                div class="btn-group" role="group" aria-label="View mode" {
                    button id="gridView" type="button"
                        class=(if vm.view == ViewMode::Grid { "btn btn-outline-secondary active" } else { "btn btn-outline-secondary" })
                        hx-get="/view/grid" hx-target="#listings-region" hx-swap="outerHTML"
                    { i class="bi bi-grid-3x3-gap" {} }
                    button id="listView" type="button"
                        class=(if vm.view == ViewMode::List { "btn btn-outline-secondary active" } else { "btn btn-outline-secondary" })
                        hx-get="/view/list" hx-target="#listings-region" hx-swap="outerHTML"
                    { i class="bi bi-list-ul" {} }
                }
            }
        }
    }
}
