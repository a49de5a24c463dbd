//! Inline embedding of the pre-rendered trip map.

use super::ErrorDisplay;
use cbd_core::assets::MapDocument;
use dioxus::prelude::*;

/// Height of the embedded map in pixels.
pub const MAP_HEIGHT_PX: u32 = 1000;

#[derive(Props, Clone, PartialEq)]
pub struct MapEmbedProps {
    pub map: cbd_core::Result<MapDocument>,
    #[props(default = MAP_HEIGHT_PX)]
    pub height: u32,
}

/// Shows the map document verbatim inside an inline frame, or an error
/// box when the document is missing.
#[component]
pub fn MapEmbed(props: MapEmbedProps) -> Element {
    match &props.map {
        Ok(map) => {
            let html = map.html().to_string();
            rsx! {
                iframe {
                    srcdoc: "{html}",
                    width: "100%",
                    height: "{props.height}",
                    style: "border: none;",
                    title: "Aggregated bike trips map",
                }
            }
        }
        Err(e) => rsx! {
            div {
                style: "min-height: 120px;",
                ErrorDisplay { message: e.to_string() }
            }
        },
    }
}
