//! Sidebar navigation between dashboard pages.

use crate::state::AppState;
use cbd_core::page::Page;
use dioxus::prelude::*;

/// Page dropdown selector.
/// Switching pages resets the season filter to every season.
#[component]
pub fn PageSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.page)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Page>() {
        Ok(page) => state.select_page(page),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "page-select",
                style: "display: block; font-size: 13px; margin-bottom: 4px;",
                "Select any variable/section of the analysis"
            }
            select {
                id: "page-select",
                style: "width: 100%;",
                onchange: on_change,
                for page in Page::ALL {
                    option {
                        value: "{page.label()}",
                        selected: page == selected,
                        "{page.label()}"
                    }
                }
            }
        }
    }
}
