use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::domain::criteria::DEFAULT_PRICE_CEILING;
use crate::domain::logic::{apply_criteria, distinct_room_types};
use crate::domain::{FilterCriteria, Listing, RoomTypeFilter, SortOrder, Theme, ViewMode};
use crate::source::{ListingSource, LoadError};
use crate::storage::{load_theme, save_theme, Favorites, Storage, StorageError};
use crate::templates::{
    browse_page, favorite_toggle_fragment, listing_detail, listings_fragment, BrowseVm,
};
use maud::Markup;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const DEFAULT_LISTINGS_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Only the first `limit` records of the dataset are kept.
    pub limit: usize,
    pub price_ceiling: u32,
    pub search_debounce: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LISTINGS_LIMIT,
            price_ceiling: DEFAULT_PRICE_CEILING,
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

/// Owns all browse state: the loaded collection, the current criteria, the
/// UI toggles and the persisted preferences. Every event method leaves the
/// controller ready to render; nothing is cached between renders.
pub struct BrowserController {
    listings: Vec<Listing>,
    room_types: Vec<String>,
    load: LoadState,

    criteria: FilterCriteria,
    sort: SortOrder,
    view: ViewMode,
    theme: Theme,
    favorites: Favorites,

    search: Debouncer,
    pending_query: Option<String>,

    store: Box<dyn Storage>,
    settings: ControllerSettings,
}

impl BrowserController {
    pub fn new(store: Box<dyn Storage>, settings: ControllerSettings) -> Self {
        let favorites = Favorites::load(&*store);
        let theme = load_theme(&*store);
        let criteria = FilterCriteria {
            max_price: settings.price_ceiling,
            ..Default::default()
        };

        Self {
            listings: Vec::new(),
            room_types: Vec::new(),
            load: LoadState::Loading,
            criteria,
            sort: SortOrder::default(),
            view: ViewMode::default(),
            theme,
            favorites,
            search: Debouncer::new(settings.search_debounce),
            pending_query: None,
            store,
            settings,
        }
    }

    /// Fetches the dataset. On failure the previous collection is dropped and
    /// the reason is kept for the inline error block; calling again retries.
    pub fn load(&mut self, source: &dyn ListingSource) {
        self.load = LoadState::Loading;
        let fetched = source.fetch();
        self.apply_fetch(fetched, &source.describe());
    }

    /// Installs the outcome of a fetch made elsewhere, so the network call
    /// can run without holding the controller.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<Listing>, LoadError>, from: &str) {
        match fetched {
            Ok(mut listings) => {
                listings.truncate(self.settings.limit);
                self.room_types = distinct_room_types(&listings);
                self.listings = listings;
                self.load = LoadState::Ready;
                info!(count = self.listings.len(), source = %from, "Loaded listings");
            }
            Err(e) => {
                warn!(error = %e, source = %from, "Error loading listings");
                self.listings.clear();
                self.room_types.clear();
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    // ---- Search ---------------------------------------------------------

    /// Keystroke in the search box. Evaluation is deferred until the input has
    /// been idle for the debounce interval; a newer keystroke supersedes it.
    pub fn input_search(&mut self, text: &str, now: Instant) {
        self.pending_query = Some(text.to_string());
        self.search.arm(now);
    }

    /// Commits pending search input once the debounce has elapsed.
    /// Returns true when the criteria changed and a re-render is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.search.fire_if_due(now) {
            return false;
        }
        match self.pending_query.take() {
            Some(query) => {
                debug!(query = %query, "search committed");
                self.criteria.query = query;
                true
            }
            None => false,
        }
    }

    /// Search that is already idle (form submit, client-side delay).
    pub fn submit_search(&mut self, text: &str) {
        self.search.cancel();
        self.pending_query = None;
        self.criteria.query = text.to_string();
    }

    pub fn has_pending_search(&self) -> bool {
        self.search.is_pending()
    }

    // ---- Immediate controls ---------------------------------------------

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn set_room_type(&mut self, room_type: RoomTypeFilter) {
        self.criteria.room_type = room_type;
    }

    pub fn set_max_price(&mut self, max_price: u32) {
        self.criteria.max_price = max_price.min(self.settings.price_ceiling);
    }

    pub fn price_label(&self) -> String {
        format!("${}", self.criteria.max_price)
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn show_favorites(&mut self) {
        self.criteria.favorites_only = true;
    }

    pub fn show_all(&mut self) {
        self.criteria.favorites_only = false;
    }

    // ---- Persisted preferences ------------------------------------------

    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        save_theme(self.theme, &mut *self.store)?;
        debug!(theme = %self.theme, "theme toggled");
        Ok(self.theme)
    }

    /// Flips favorite membership. Returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool, StorageError> {
        let now_favorite = self.favorites.toggle(id, &mut *self.store)?;
        debug!(id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    // ---- Reads ----------------------------------------------------------

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn room_types(&self) -> &[String] {
        &self.room_types
    }

    /// Current display sequence, recomputed from the full collection.
    pub fn visible(&self) -> Vec<&Listing> {
        apply_criteria(&self.listings, &self.criteria, self.sort, self.favorites.ids())
    }

    // ---- Rendering ------------------------------------------------------

    fn view_model(&self) -> BrowseVm<'_> {
        BrowseVm {
            visible: self.visible(),
            total: self.listings.len(),
            load: &self.load,
            favorites: &self.favorites,
            criteria: &self.criteria,
            sort: self.sort,
            view: self.view,
            theme: self.theme,
            room_types: &self.room_types,
            price_ceiling: self.settings.price_ceiling,
            debounce_ms: self.search.delay().as_millis() as u64,
        }
    }

    pub fn page(&self) -> Markup {
        browse_page(&self.view_model())
    }

    pub fn listings_fragment(&self) -> Markup {
        listings_fragment(&self.view_model())
    }

    /// Listings fragment after a favorite toggle, carrying the detail panel's
    /// heart for `id` as well.
    pub fn favorite_fragment(&self, id: i64) -> Markup {
        favorite_toggle_fragment(&self.view_model(), id, self.favorites.contains(id))
    }

    /// Detail panel for `id`, or None when no such listing is loaded.
    pub fn detail(&self, id: i64) -> Option<Markup> {
        let listing = self.listings.iter().find(|l| l.id == id)?;
        Some(listing_detail(listing, self.favorites.contains(id)))
    }
}
