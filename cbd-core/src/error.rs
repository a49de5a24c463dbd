/// Error types for the dashboard crates
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashboard operations.
///
/// Every variant is local to the section that needs the failing resource;
/// the UI shows the message inline instead of the chart, map or image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// A tabular input file is missing, unreadable or does not match its schema
    #[error("Failed to load the {table} table: {reason}")]
    DataLoad { table: &'static str, reason: String },

    /// A chart could not be built from the given table
    #[error("Failed to build chart: {0}")]
    ChartSpec(String),

    /// The pre-rendered map document is absent
    #[error("Map document not found: {}", path.display())]
    MapAssetMissing { path: PathBuf },

    /// A static image is absent
    #[error("Image not found: {}", path.display())]
    ImageAssetMissing { path: PathBuf },
}

impl DashboardError {
    pub fn data_load(table: &'static str, reason: impl Into<String>) -> Self {
        Self::DataLoad {
            table,
            reason: reason.into(),
        }
    }

    pub fn chart_spec(reason: impl Into<String>) -> Self {
        Self::ChartSpec(reason.into())
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_load_message_names_table() {
        let err = DashboardError::data_load("trips", "missing column `season`");
        assert_eq!(
            err.to_string(),
            "Failed to load the trips table: missing column `season`"
        );
    }

    #[test]
    fn asset_errors_show_path() {
        let err = DashboardError::MapAssetMissing {
            path: PathBuf::from("maps/trips.html"),
        };
        assert_eq!(err.to_string(), "Map document not found: maps/trips.html");
    }
}
