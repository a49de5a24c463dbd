//! CitiBike Strategy Dashboard
//!
//! Five pages about bike shortages in New York: an intro, daily rides against
//! temperature, the most popular start stations, an aggregated trip map and
//! the recommendations.
//!
//! Data flow:
//! 1. `build.rs` copies the CSV files, the map and the images from
//!    `fixtures/` into `OUT_DIR` and embeds whatever exists.
//! 2. On mount: load the three CSV tables into an in-memory SQLite dataset.
//!    A table that fails to load only breaks the page that needs it.
//! 3. On page or season filter change: re-run the station ranking and
//!    re-render the Plotly chart.

mod assets;
mod pages;

use cbd_chart_ui::components::{ErrorDisplay, LoadingSpinner, PageSelector, SeasonFilterPicker};
use cbd_chart_ui::js_bridge;
use cbd_chart_ui::state::AppState;
use cbd_core::assets::TOP20_FILE;
use cbd_core::season::SeasonFilter;
use cbd_db::Dataset;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn, Level};

const DASHBOARD_TITLE: &str = "CitiBike Strategy Dashboard";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting {}", DASHBOARD_TITLE);
    launch(App);
}

/// Compare the live all-season ranking with the precomputed top 20.
fn check_reference(dataset: &Dataset) {
    let (Ok(seasons), Ok(reference)) = (dataset.seasons(), dataset.reference_top20()) else {
        return;
    };
    match dataset.rank_stations(&SeasonFilter::all(seasons)) {
        Ok(ranking) if ranking.matches_reference(&reference) => {
            info!("Station ranking matches {}", TOP20_FILE)
        }
        Ok(_) => warn!("Station ranking over all seasons differs from {}", TOP20_FILE),
        Err(e) => warn!("Cannot rank stations: {}", e),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        info!("Loading dataset...");
        match assets::load_dataset() {
            Ok(dataset) => {
                match dataset.seasons() {
                    Ok(seasons) => {
                        state.season_filter.set(SeasonFilter::all(seasons.iter().cloned()));
                        state.seasons.set(seasons);
                    }
                    Err(e) => warn!("No season filter: {}", e),
                }
                check_reference(&dataset);
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to load dataset: {}", e)));
            }
        }
        state.loading.set(false);

        js_bridge::init_charts();
    });

    let show_season_filter = (state.page)().has_season_filter() && !(state.seasons)().is_empty();

    rsx! {
        document::Title { "{DASHBOARD_TITLE}" }
        document::Script { src: js_bridge::PLOTLY_JS_URL }

        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            aside {
                style: "flex: 0 0 280px; padding: 16px; background: #f0f2f6;",
                h2 {
                    style: "margin-top: 0;",
                    "Variable/Section?"
                }
                PageSelector {}
                if show_season_filter {
                    SeasonFilterPicker {}
                }
            }

            div {
                style: "flex: 1; padding: 16px 32px; max-width: 1400px;",

                h1 {
                    style: "color: #2c3e50;",
                    "{DASHBOARD_TITLE}"
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                } else if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    pages::PageView {}
                }
            }
        }
    }
}
