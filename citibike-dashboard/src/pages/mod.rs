//! One component per dashboard page.

mod intro;
mod map;
mod recommendations;
mod stations;
mod temperature;

use cbd_chart_ui::state::AppState;
use cbd_core::page::Page;
use cbd_core::{DashboardError, Result};
use cbd_db::Dataset;
use dioxus::prelude::*;

/// Renders the page selected in the sidebar.
#[component]
pub fn PageView() -> Element {
    let state = use_context::<AppState>();
    match (state.page)() {
        Page::Intro => rsx! { intro::IntroPage {} },
        Page::TemperatureUsage => rsx! { temperature::TemperaturePage {} },
        Page::PopularStations => rsx! { stations::PopularStationsPage {} },
        Page::AggregatedMap => rsx! { map::AggregatedMapPage {} },
        Page::Recommendations => rsx! { recommendations::RecommendationsPage {} },
    }
}

/// Run `query` against the loaded dataset.
fn with_dataset<T>(
    state: AppState,
    table: &'static str,
    query: impl FnOnce(&Dataset) -> Result<T>,
) -> Result<T> {
    match state.dataset.read().as_ref() {
        Some(dataset) => query(dataset),
        None => Err(DashboardError::data_load(table, "dataset not loaded")),
    }
}

/// Paragraph of page narrative.
#[component]
fn Narrative(text: &'static str) -> Element {
    rsx! {
        p {
            style: "font-size: 15px; line-height: 1.5; color: #333;",
            "{text}"
        }
    }
}
