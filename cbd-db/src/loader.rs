//! CSV loading for the three dashboard tables.
//!
//! Each loader validates the header row against the table schema, parses
//! every row into typed values and inserts it inside a single transaction.
//! Any bad row aborts the whole table: nothing is half-loaded.
//!
//! # CSV Formats
//!
//! - **Trips** (has headers): `ride_id,start_station_name,season,date`
//! - **Top 20** (has headers): `start_station_name,value`
//! - **Dual axis** (has headers): `date,bike_rides_daily,avgTemp`
//!
//! Columns may appear in any order, and extra columns are ignored.

use crate::schema::{ColumnKind, Table};
use crate::DatasetBuilder;
use cbd_core::season::Season;
use cbd_core::trip::{DailyRideTemp, StationCount, TripRecord};
use cbd_core::{DashboardError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use rusqlite::{params, ErrorCode};

/// Typed access to the required fields of one CSV row.
struct Row<'a> {
    table: Table,
    record: &'a StringRecord,
    indices: &'a [usize],
}

impl<'a> Row<'a> {
    fn line(&self) -> u64 {
        self.record.position().map_or(0, |p| p.line())
    }

    fn error(&self, reason: impl std::fmt::Display) -> DashboardError {
        DashboardError::data_load(self.table.name(), format!("line {}: {}", self.line(), reason))
    }

    fn raw(&self, col: usize, kind: ColumnKind) -> Result<&'a str> {
        let spec = self.table.columns()[col];
        debug_assert_eq!(spec.kind, kind, "column `{}` read with wrong kind", spec.name);
        let value = self
            .record
            .get(self.indices[col])
            .map(str::trim)
            .unwrap_or("");
        if value.is_empty() {
            return Err(self.error(format!("empty `{}`", spec.name)));
        }
        Ok(value)
    }

    fn text(&self, col: usize) -> Result<String> {
        self.raw(col, ColumnKind::Text).map(str::to_string)
    }

    fn date(&self, col: usize) -> Result<NaiveDate> {
        let raw = self.raw(col, ColumnKind::Date)?;
        parse_date(raw).ok_or_else(|| self.error(format!("invalid date `{raw}`")))
    }

    fn count(&self, col: usize) -> Result<u64> {
        let raw = self.raw(col, ColumnKind::Count)?;
        parse_count(raw).ok_or_else(|| self.error(format!("invalid count `{raw}`")))
    }

    /// A count in the range SQLite stores as INTEGER.
    fn sql_count(&self, value: u64) -> Result<i64> {
        i64::try_from(value).map_err(|_| self.error(format!("count `{value}` out of range")))
    }

    fn number(&self, col: usize) -> Result<f64> {
        let raw = self.raw(col, ColumnKind::Number)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.error(format!("invalid number `{raw}`")))
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time of day.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .ok()
}

/// Whole non-negative numbers, also when written as `12.0`.
fn parse_count(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v < u64::MAX as f64 && v.fract() == 0.0)
            .map(|v| v as u64)
    })
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

fn sql_error(table: Table) -> impl Fn(rusqlite::Error) -> DashboardError {
    move |e| DashboardError::data_load(table.name(), e.to_string())
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(f, _) if f.code == ErrorCode::ConstraintViolation)
}

/// Header indices of the table's required columns.
fn resolve_headers(rdr: &mut csv::Reader<&[u8]>, table: Table) -> Result<Vec<usize>> {
    let headers = rdr
        .headers()
        .map_err(|e| DashboardError::data_load(table.name(), e.to_string()))?;
    table.resolve(headers)
}

impl DatasetBuilder {
    pub(crate) fn load_trips(&mut self, csv_data: &str) -> Result<usize> {
        let table = Table::Trips;
        let mut rdr = reader(csv_data);
        let indices = resolve_headers(&mut rdr, table)?;

        let tx = self.conn.transaction().map_err(sql_error(table))?;
        tx.execute("DELETE FROM trips", []).map_err(sql_error(table))?;

        let mut count = 0usize;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO trips (row_order, ride_id, start_station_name, season, date)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(sql_error(table))?;

            for result in rdr.records() {
                let record = result.map_err(|e| DashboardError::data_load(table.name(), e.to_string()))?;
                let row = Row { table, record: &record, indices: &indices };
                let trip = TripRecord {
                    ride_id: row.text(0)?,
                    start_station_name: row.text(1)?,
                    season: Season::new(row.text(2)?),
                    date: row.date(3)?,
                };

                stmt.execute(params![
                    count as i64,
                    trip.ride_id,
                    trip.start_station_name,
                    trip.season.as_str(),
                    trip.date.format("%Y-%m-%d").to_string(),
                ])
                .map_err(|e| {
                    if is_constraint_violation(&e) {
                        row.error(format!("duplicate ride_id `{}`", trip.ride_id))
                    } else {
                        sql_error(table)(e)
                    }
                })?;
                count += 1;
            }
        }

        tx.commit().map_err(sql_error(table))?;
        log::info!("loader: Loaded {} trips", count);
        Ok(count)
    }

    pub(crate) fn load_top20(&mut self, csv_data: &str) -> Result<usize> {
        let table = Table::Top20;
        let mut rdr = reader(csv_data);
        let indices = resolve_headers(&mut rdr, table)?;

        let tx = self.conn.transaction().map_err(sql_error(table))?;
        tx.execute("DELETE FROM top20", []).map_err(sql_error(table))?;

        let mut count = 0usize;
        {
            let mut stmt = tx
                .prepare("INSERT INTO top20 (row_order, start_station_name, value) VALUES (?1, ?2, ?3)")
                .map_err(sql_error(table))?;

            for result in rdr.records() {
                let record = result.map_err(|e| DashboardError::data_load(table.name(), e.to_string()))?;
                let row = Row { table, record: &record, indices: &indices };
                let station = StationCount::new(row.text(0)?, row.count(1)?);
                let value = row.sql_count(station.value)?;

                stmt.execute(params![count as i64, station.start_station_name, value])
                    .map_err(sql_error(table))?;
                count += 1;
            }
        }

        tx.commit().map_err(sql_error(table))?;
        log::info!("loader: Loaded {} reference stations", count);
        Ok(count)
    }

    pub(crate) fn load_dual_axis(&mut self, csv_data: &str) -> Result<usize> {
        let table = Table::DualAxis;
        let mut rdr = reader(csv_data);
        let indices = resolve_headers(&mut rdr, table)?;

        let tx = self.conn.transaction().map_err(sql_error(table))?;
        tx.execute("DELETE FROM dual_axis", []).map_err(sql_error(table))?;

        let mut count = 0usize;
        {
            let mut stmt = tx
                .prepare("INSERT INTO dual_axis (date, bike_rides_daily, avg_temp) VALUES (?1, ?2, ?3)")
                .map_err(sql_error(table))?;

            for result in rdr.records() {
                let record = result.map_err(|e| DashboardError::data_load(table.name(), e.to_string()))?;
                let row = Row { table, record: &record, indices: &indices };
                let day = DailyRideTemp {
                    date: row.date(0)?,
                    bike_rides_daily: row.count(1)?,
                    avg_temp: row.number(2)?,
                };

                let rides = row.sql_count(day.bike_rides_daily)?;

                stmt.execute(params![
                    day.date.format("%Y-%m-%d").to_string(),
                    rides,
                    day.avg_temp,
                ])
                .map_err(|e| {
                    if is_constraint_violation(&e) {
                        row.error(format!("duplicate date `{}`", day.date))
                    } else {
                        sql_error(table)(e)
                    }
                })?;
                count += 1;
            }
        }

        tx.commit().map_err(sql_error(table))?;
        log::info!("loader: Loaded {} daily rides/temperature rows", count);
        Ok(count)
    }
}
