//! Section header.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
}

/// Header shown above each dashboard section.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "margin: 0 0 8px 0; font-size: 22px;",
            "{props.title}"
        }
    }
}
