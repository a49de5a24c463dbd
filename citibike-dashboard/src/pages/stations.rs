//! Top 20 start stations for the seasons picked in the sidebar.

use super::{with_dataset, Narrative};
use cbd_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay};
use cbd_chart_ui::js_bridge;
use cbd_chart_ui::state::AppState;
use cbd_charts::{ranked_bar, BarOptions, Figure, Table};
use cbd_core::trip::StationRanking;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

const CHART_CONTAINER_ID: &str = "popular-stations-chart";

#[component]
pub fn PopularStationsPage() -> Element {
    let state = use_context::<AppState>();

    // Re-runs whenever the season filter changes
    let ranking = use_memo(move || -> cbd_core::Result<StationRanking> {
        let filter = state.season_filter.read();
        with_dataset(state, "trips", |dataset| dataset.rank_stations(&filter))
    });

    let figure = use_memo(move || -> cbd_core::Result<Figure> {
        let ranking = ranking.read().clone()?;
        ranked_bar(&Table::from(&ranking), &BarOptions::default())
    });

    use_effect(move || {
        if let Ok(figure) = &*figure.read() {
            match figure.to_json() {
                Ok(json) => js_bridge::render_plotly(CHART_CONTAINER_ID, &json),
                Err(e) => warn!("Cannot render station chart: {}", e),
            }
        }
    });
    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    let body = match (&*ranking.read(), &*figure.read()) {
        (Err(e), _) | (Ok(_), Err(e)) => rsx! {
            ErrorDisplay { message: e.to_string() }
        },
        (Ok(ranking), Ok(_)) => {
            let total = ranking.total_rides;
            let empty = ranking.is_empty();
            rsx! {
                h4 { "total bike rides: {total}" }
                if empty {
                    p {
                        style: "color: #666;",
                        "No trips match the selected seasons."
                    }
                }
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    label: "Top start stations by trips".to_string(),
                    min_height: 600,
                }
            }
        }
    };

    rsx! {
        ChartHeader { title: "Most popular start stations".to_string() }
        {body}
        Narrative {
            text: "From the bar chart we can see that some start stations are more popular than others. The top 3 are W 21st Street/6th Avenue, West Street/Chambers Street and 1st Ave/E 62nd Street. In terms of the total number of bike trips, the station ranked #20 is about 38% less than the most popular station. We can cross reference these findings with the interactive map - which is another option in the dropdown filter."
        }
    }
}
