//! Declarative chart descriptions for the CitiBike dashboard.
//!
//! Charts are built from a column-keyed [`Table`] and returned as a Plotly
//! [`Figure`], serialized to JSON and handed to Plotly.js by the UI crate.
//! Builders never touch the DOM and never mutate their input.

pub mod builders;
pub mod figure;
pub mod table;

pub use builders::{dual_axis, ranked_bar, BarOptions, DualAxisOptions, SeriesStyle};
pub use figure::Figure;
pub use table::{Column, Table};
