//! Static image with an inline error fallback.

use super::ErrorDisplay;
use cbd_core::assets::ImageAsset;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StaticImageProps {
    pub image: cbd_core::Result<ImageAsset>,
    #[props(default = String::new())]
    pub alt: String,
    #[props(default = 400)]
    pub width: u32,
}

#[component]
pub fn StaticImage(props: StaticImageProps) -> Element {
    match &props.image {
        Ok(image) => {
            let src = image.data_url();
            rsx! {
                img {
                    src: "{src}",
                    alt: "{props.alt}",
                    width: "{props.width}",
                    style: "display: block; margin: 12px 0;",
                }
            }
        }
        Err(e) => rsx! {
            ErrorDisplay { message: e.to_string() }
        },
    }
}
