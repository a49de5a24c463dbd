//! Host element for a Plotly figure.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to `js_bridge::render_plotly`
    pub id: String,
    /// Accessible name of the chart
    #[props(default = String::new())]
    pub label: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Empty div that Plotly draws into once the figure has been handed over.
/// Shows a placeholder underneath until then.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let frame = format!(
        "position: relative; width: 100%; min-height: {}px; margin: 8px 0;",
        props.min_height
    );
    let plot = format!("position: relative; z-index: 1; width: 100%; min-height: {}px;", props.min_height);

    rsx! {
        figure {
            style: "{frame}",
            aria_label: "{props.label}",
            span {
                style: "position: absolute; top: 45%; width: 100%; text-align: center; color: #999; font-size: 13px;",
                "Drawing chart..."
            }
            div {
                id: "{props.id}",
                style: "{plot}",
            }
        }
    }
}
