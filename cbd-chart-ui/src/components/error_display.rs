//! Inline error box for a section whose data or asset is unavailable.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Takes the place of the failed section only; the rest of the page renders.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 12px 0; padding: 10px 14px; border-left: 4px solid #d93025; background: #fdecea; color: #8a1c14; font-size: 14px;",
            strong { "Section unavailable: " }
            "{props.message}"
        }
    }
}
