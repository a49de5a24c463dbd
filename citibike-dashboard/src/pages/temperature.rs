//! Daily rides against average temperature on a shared date axis.

use super::{with_dataset, Narrative};
use cbd_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay};
use cbd_chart_ui::js_bridge;
use cbd_chart_ui::state::AppState;
use cbd_charts::{dual_axis, DualAxisOptions, Figure, Table};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

const CHART_CONTAINER_ID: &str = "temperature-usage-chart";

#[component]
pub fn TemperaturePage() -> Element {
    let state = use_context::<AppState>();

    let figure = use_memo(move || -> cbd_core::Result<Figure> {
        let series = with_dataset(state, "dual_axis", |dataset| dataset.dual_axis_series())?;
        dual_axis(&Table::from(series.as_slice()), &DualAxisOptions::default())
    });

    use_effect(move || {
        if let Ok(figure) = &*figure.read() {
            match figure.to_json() {
                Ok(json) => js_bridge::render_plotly(CHART_CONTAINER_ID, &json),
                Err(e) => warn!("Cannot render temperature chart: {}", e),
            }
        }
    });
    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    let chart = match &*figure.read() {
        Ok(_) => rsx! {
            ChartContainer {
                id: CHART_CONTAINER_ID.to_string(),
                label: "Daily bike rides and temperature".to_string(),
                min_height: 400,
            }
        },
        Err(e) => rsx! {
            ErrorDisplay { message: e.to_string() }
        },
    };

    rsx! {
        ChartHeader { title: "Temperature and bike usage".to_string() }
        {chart}
        Narrative {
            text: "There is an obvious correlation between the temperature and the frequency of the daily bike trips. As the temperature increases, so does the bike usage. This insight indicates that the bike shortage problem may only occur in the the warmer months, which is approximately from May to October."
        }
    }
}
