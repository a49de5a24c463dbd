//! Core types for the CitiBike strategy dashboard.
//!
//! This crate provides:
//! - `trip`: trip records, station rankings and the daily rides/temperature series
//! - `season`: season labels and the season filter driving the station ranking
//! - `page`: the closed set of dashboard pages
//! - `assets`: asset paths plus the embedded map document and images
//! - `error`: the shared `DashboardError` type

pub mod assets;
pub mod error;
pub mod page;
pub mod season;
pub mod trip;

pub use error::{DashboardError, Result};
