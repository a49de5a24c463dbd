//! Placeholder shown while the trip tables load.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading trip data...".to_string())]
    pub message: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            role: "status",
            style: "padding: 48px 0; text-align: center; color: #1f6fb2; font-size: 15px;",
            "{props.message}"
        }
    }
}
