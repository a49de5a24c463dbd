//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cbd_core::page::Page;
use cbd_core::season::{Season, SeasonFilter};
use cbd_db::Dataset;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Read-only dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Startup error that prevents every page from rendering
    pub error_msg: Signal<Option<String>>,
    /// Currently selected page
    pub page: Signal<Page>,
    /// Seasons found in the trip data
    pub seasons: Signal<Vec<Season>>,
    /// Seasons selected on the popular stations page
    pub season_filter: Signal<SeasonFilter>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            page: Signal::new(Page::default()),
            seasons: Signal::new(Vec::new()),
            season_filter: Signal::new(SeasonFilter::none()),
        }
    }

    /// Switch pages, resetting the season filter to every season.
    pub fn select_page(&mut self, page: Page) {
        let all = SeasonFilter::all(self.seasons.read().iter().cloned());
        self.season_filter.set(all);
        self.page.set(page);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
