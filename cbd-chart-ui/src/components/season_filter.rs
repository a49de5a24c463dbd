//! Multi-select filter over the seasons found in the trip data.

use crate::state::AppState;
use cbd_core::season::Season;
use dioxus::prelude::*;

/// One checkbox per season; all are checked by default.
#[component]
pub fn SeasonFilterPicker() -> Element {
    let state = use_context::<AppState>();
    let seasons = state.seasons.read().clone();

    rsx! {
        fieldset {
            style: "margin: 12px 0; border: 1px solid #ddd; border-radius: 4px;",
            legend {
                style: "font-weight: bold;",
                "Select the season"
            }
            if seasons.is_empty() {
                p {
                    style: "font-size: 12px; color: #888; margin: 0;",
                    "No seasons available."
                }
            }
            for season in seasons {
                SeasonCheckbox { key: "{season}", season: season.clone() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SeasonCheckboxProps {
    season: Season,
}

#[component]
fn SeasonCheckbox(props: SeasonCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let checked = state.season_filter.read().contains(&props.season);
    let id = format!("season-{}", props.season);
    let season = props.season.clone();

    let on_change = move |evt: Event<FormData>| {
        state.season_filter.write().set(season.clone(), evt.checked());
    };

    rsx! {
        div {
            input {
                r#type: "checkbox",
                id: "{id}",
                checked,
                onchange: on_change,
            }
            label {
                r#for: "{id}",
                style: "margin-left: 4px;",
                "{props.season}"
            }
        }
    }
}
