//! Shared Dioxus components and Plotly.js bridge for the CitiBike dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand Plotly figure JSON to Plotly.js via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (navigation, filters, chart containers, embeds)

pub mod components;
pub mod js_bridge;
pub mod state;
