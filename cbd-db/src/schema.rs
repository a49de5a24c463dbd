//! Table schemas for the three dashboard inputs.
//!
//! Each input file has a fixed set of required columns, located by header
//! name. Extra columns (for example the unnamed index column written by
//! pandas) are ignored. The SQL schema mirrors the typed columns; every table
//! keeps a `row_order` so ties can be broken by input row order.

use cbd_core::{DashboardError, Result};
use csv::StringRecord;
use std::fmt;

/// The tabular inputs the dashboard loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Trips,
    Top20,
    DualAxis,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Trips, Table::Top20, Table::DualAxis];

    pub fn name(self) -> &'static str {
        match self {
            Table::Trips => "trips",
            Table::Top20 => "top20",
            Table::DualAxis => "dual_axis",
        }
    }

    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            Table::Trips => TRIPS_COLUMNS,
            Table::Top20 => TOP20_COLUMNS,
            Table::DualAxis => DUAL_AXIS_COLUMNS,
        }
    }

    /// Locate the required columns in a header row.
    ///
    /// Returns the field index of each column in [`Table::columns`] order.
    pub fn resolve(self, headers: &StringRecord) -> Result<Vec<usize>> {
        self.columns()
            .iter()
            .map(|col| {
                headers
                    .iter()
                    .position(|h| h.trim() == col.name)
                    .ok_or_else(|| {
                        DashboardError::data_load(
                            self.name(),
                            format!("missing column `{}`", col.name),
                        )
                    })
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Non-empty text
    Text,
    /// `YYYY-MM-DD`, optionally followed by a time of day
    Date,
    /// Non-negative whole number
    Count,
    /// Any finite number
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

pub const TRIPS_COLUMNS: &[ColumnSpec] = &[
    col("ride_id", ColumnKind::Text),
    col("start_station_name", ColumnKind::Text),
    col("season", ColumnKind::Text),
    col("date", ColumnKind::Date),
];

pub const TOP20_COLUMNS: &[ColumnSpec] = &[
    col("start_station_name", ColumnKind::Text),
    col("value", ColumnKind::Count),
];

pub const DUAL_AXIS_COLUMNS: &[ColumnSpec] = &[
    col("date", ColumnKind::Date),
    col("bike_rides_daily", ColumnKind::Count),
    col("avgTemp", ColumnKind::Number),
];

/// Returns the full SQL schema as a single batch string.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS trips (
        row_order INTEGER PRIMARY KEY,
        ride_id TEXT NOT NULL UNIQUE,
        start_station_name TEXT NOT NULL,
        season TEXT NOT NULL,
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_trips_season ON trips(season);

    CREATE TABLE IF NOT EXISTS top20 (
        row_order INTEGER PRIMARY KEY,
        start_station_name TEXT NOT NULL,
        value INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS dual_axis (
        date TEXT PRIMARY KEY,
        bike_rides_daily INTEGER NOT NULL,
        avg_temp REAL NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ignores_extra_columns() {
        let headers = StringRecord::from(vec!["", "date", "season", "ride_id", "start_station_name"]);
        let idx = Table::Trips.resolve(&headers).unwrap();
        assert_eq!(idx, vec![3, 4, 2, 1]);
    }

    #[test]
    fn resolve_reports_missing_column() {
        let headers = StringRecord::from(vec!["start_station_name"]);
        let err = Table::Top20.resolve(&headers).unwrap_err();
        assert_eq!(
            err,
            DashboardError::data_load("top20", "missing column `value`")
        );
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        for table in Table::ALL {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table.name()), [], |row| {
                    row.get(0)
                })
                .unwrap();
            assert_eq!(count, 0);
        }
    }
}
