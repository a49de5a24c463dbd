//! Column-keyed tables fed to the chart builders.

use cbd_core::trip::{DailyRideTemp, StationRanking};
use cbd_core::{DashboardError, Result};
use chrono::NaiveDate;

pub const STATION_COLUMN: &str = "start_station_name";
pub const VALUE_COLUMN: &str = "value";
pub const DATE_COLUMN: &str = "date";
pub const RIDES_COLUMN: &str = "bike_rides_daily";
pub const TEMP_COLUMN: &str = "avgTemp";

/// A typed column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Number(Vec<f64>),
    Date(Vec<NaiveDate>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Number(v) => v.len(),
            Column::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            Column::Text(_) => "text",
            Column::Number(_) => "number",
            Column::Date(_) => "date",
        }
    }
}

/// Named columns in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, replacing any column with the same name.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
        self
    }

    /// A copy of the table without the named column.
    pub fn without_column(&self, name: &str) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|(n, _)| n != name)
                .cloned()
                .collect(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| DashboardError::chart_spec(format!("missing column `{name}`")))
    }

    fn mismatch(name: &str, found: &Column, expected: &str) -> DashboardError {
        DashboardError::chart_spec(format!(
            "column `{name}` holds {} values, expected {expected}",
            found.kind()
        ))
    }

    pub(crate) fn text(&self, name: &str) -> Result<&[String]> {
        match self.require(name)? {
            Column::Text(v) => Ok(v),
            other => Err(Self::mismatch(name, other, "text")),
        }
    }

    pub(crate) fn numbers(&self, name: &str) -> Result<&[f64]> {
        match self.require(name)? {
            Column::Number(v) => Ok(v),
            other => Err(Self::mismatch(name, other, "number")),
        }
    }

    pub(crate) fn dates(&self, name: &str) -> Result<&[NaiveDate]> {
        match self.require(name)? {
            Column::Date(v) => Ok(v),
            other => Err(Self::mismatch(name, other, "date")),
        }
    }

    /// Fails unless all named columns have the same length.
    pub(crate) fn check_lengths(&self, names: &[&str]) -> Result<usize> {
        let mut expected: Option<(&str, usize)> = None;
        for &name in names {
            let len = self.require(name)?.len();
            match expected {
                None => expected = Some((name, len)),
                Some((first, n)) if n != len => {
                    return Err(DashboardError::chart_spec(format!(
                        "column `{name}` has {len} rows but `{first}` has {n}"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(expected.map_or(0, |(_, n)| n))
    }
}

impl From<&StationRanking> for Table {
    fn from(ranking: &StationRanking) -> Self {
        let (names, values): (Vec<String>, Vec<f64>) = ranking
            .stations
            .iter()
            .map(|s| (s.start_station_name.clone(), s.value as f64))
            .unzip();
        Table::new()
            .with_column(STATION_COLUMN, Column::Text(names))
            .with_column(VALUE_COLUMN, Column::Number(values))
    }
}

impl From<&[DailyRideTemp]> for Table {
    fn from(series: &[DailyRideTemp]) -> Self {
        Table::new()
            .with_column(DATE_COLUMN, Column::Date(series.iter().map(|d| d.date).collect()))
            .with_column(
                RIDES_COLUMN,
                Column::Number(series.iter().map(|d| d.bike_rides_daily as f64).collect()),
            )
            .with_column(
                TEMP_COLUMN,
                Column::Number(series.iter().map(|d| d.avg_temp).collect()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbd_core::trip::StationCount;

    #[test]
    fn ranking_to_table() {
        let ranking = StationRanking {
            stations: vec![StationCount::new("A", 3), StationCount::new("B", 2)],
            total_rides: 5,
        };
        let table = Table::from(&ranking);
        assert_eq!(table.column_names(), vec!["start_station_name", "value"]);
        assert_eq!(table.numbers("value").unwrap(), &[3.0, 2.0]);
    }

    #[test]
    fn typed_access_reports_mismatch() {
        let table = Table::new().with_column("value", Column::Text(vec!["x".into()]));
        let err = table.numbers("value").unwrap_err();
        assert_eq!(
            err,
            DashboardError::chart_spec("column `value` holds text values, expected number")
        );
        assert!(table.dates("date").is_err());
    }

    #[test]
    fn with_column_replaces_existing() {
        let table = Table::new()
            .with_column("value", Column::Number(vec![1.0]))
            .with_column("value", Column::Number(vec![2.0, 3.0]));
        assert_eq!(table.column_names(), vec!["value"]);
        assert_eq!(table.column("value").map(Column::len), Some(2));
    }

    #[test]
    fn check_lengths_detects_ragged_columns() {
        let table = Table::new()
            .with_column("a", Column::Number(vec![1.0, 2.0]))
            .with_column("b", Column::Text(vec!["x".into()]));
        assert!(table.check_lengths(&["a", "b"]).is_err());
        assert_eq!(table.check_lengths(&["a"]).unwrap(), 2);
    }
}
