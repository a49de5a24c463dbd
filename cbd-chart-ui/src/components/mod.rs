//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod map_embed;
mod page_selector;
mod season_filter;
mod static_image;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_embed::MapEmbed;
pub use page_selector::PageSelector;
pub use season_filter::SeasonFilterPicker;
pub use static_image::StaticImage;
