//! In-memory SQLite dataset for the CitiBike strategy dashboard.
//!
//! The three input tables (trips, the precomputed top 20, and the daily
//! rides/temperature series) are parsed from CSV, validated against the
//! schemas in [`schema`], and loaded into an in-memory SQLite database.
//! Station rankings are derived with SQL `GROUP BY` queries.
//!
//! # Architecture
//!
//! - [`DatasetBuilder`] owns the connection while tables are loaded.
//! - [`DatasetBuilder::finish`] freezes it into a [`Dataset`], a read-only
//!   `Rc` handle that is cheap to clone into UI context.
//! - A table that failed to load is remembered; queries against it return
//!   the load error, while the other tables stay usable.
//!
//! # Usage
//!
//! ```rust
//! use cbd_core::season::SeasonFilter;
//! use cbd_db::Dataset;
//!
//! let dataset = Dataset::from_csv(
//!     "ride_id,start_station_name,season,date\nR1,W 21 St & 6 Ave,summer,2022-07-01\n",
//!     "start_station_name,value\nW 21 St & 6 Ave,1\n",
//!     "date,bike_rides_daily,avgTemp\n2022-07-01,1,25.3\n",
//! )
//! .unwrap();
//!
//! let filter = SeasonFilter::all(dataset.seasons().unwrap());
//! let ranking = dataset.rank_stations(&filter).unwrap();
//! assert_eq!(ranking.total_rides, 1);
//! ```

mod loader;
mod queries;
pub mod schema;

use cbd_core::assets::AssetPaths;
use cbd_core::{DashboardError, Result};
use rusqlite::Connection;
use schema::Table;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

/// Loads tables into a fresh in-memory database.
pub struct DatasetBuilder {
    conn: Connection,
    failures: HashMap<Table, DashboardError>,
}

impl DatasetBuilder {
    /// Create an empty database with the full schema applied.
    pub fn new() -> Result<Self> {
        let to_err = |e: rusqlite::Error| DashboardError::data_load("dataset", e.to_string());
        let conn = Connection::open_in_memory().map_err(to_err)?;
        conn.execute_batch(schema::create_schema()).map_err(to_err)?;
        Ok(Self {
            conn,
            failures: HashMap::new(),
        })
    }

    /// Mark a table as unavailable because its source file is absent.
    pub fn record_missing(&mut self, table: Table, path: impl AsRef<Path>) -> DashboardError {
        let err = DashboardError::data_load(
            table.name(),
            format!("file not found: {}", path.as_ref().display()),
        );
        log::warn!("{}", err);
        self.failures.insert(table, err.clone());
        err
    }

    /// Read a table's CSV file from disk and load it.
    pub fn load_file(&mut self, table: Table, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(csv_data) => self.load(table, &csv_data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(self.record_missing(table, path)),
            Err(e) => {
                let err = DashboardError::data_load(
                    table.name(),
                    format!("cannot read {}: {}", path.display(), e),
                );
                self.failures.insert(table, err.clone());
                Err(err)
            }
        }
    }

    /// Load a table from CSV text embedded at build time; `None` means the
    /// source file was absent when the app was built.
    pub fn load_embedded(
        &mut self,
        table: Table,
        csv_data: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        match csv_data {
            Some(csv_data) => self.load(table, csv_data),
            None => Err(self.record_missing(table, path)),
        }
    }

    /// Load a table from CSV text, replacing any previous contents.
    ///
    /// On failure the previous rows are kept and the error is remembered;
    /// queries against the table return it until a later load succeeds.
    pub fn load(&mut self, table: Table, csv_data: &str) -> Result<usize> {
        let result = match table {
            Table::Trips => self.load_trips(csv_data),
            Table::Top20 => self.load_top20(csv_data),
            Table::DualAxis => self.load_dual_axis(csv_data),
        };
        match &result {
            Ok(_) => {
                self.failures.remove(&table);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.failures.insert(table, e.clone());
            }
        }
        result
    }

    /// Freeze the database into a read-only dataset.
    pub fn finish(self) -> Dataset {
        Dataset {
            inner: Rc::new(Inner {
                conn: self.conn,
                failures: self.failures,
            }),
        }
    }
}

struct Inner {
    conn: Connection,
    failures: HashMap<Table, DashboardError>,
}

/// Read-only dataset shared by every page.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Dataset {
    inner: Rc<Inner>,
}

impl Dataset {
    /// Load all three tables from disk, failing on the first bad table.
    pub fn from_paths(paths: &AssetPaths) -> Result<Self> {
        let mut builder = DatasetBuilder::new()?;
        builder.load_file(Table::Trips, &paths.trips)?;
        builder.load_file(Table::Top20, &paths.top20)?;
        builder.load_file(Table::DualAxis, &paths.dual_axis)?;
        Ok(builder.finish())
    }

    /// Load all three tables from CSV text, failing on the first bad table.
    pub fn from_csv(trips: &str, top20: &str, dual_axis: &str) -> Result<Self> {
        let mut builder = DatasetBuilder::new()?;
        builder.load(Table::Trips, trips)?;
        builder.load(Table::Top20, top20)?;
        builder.load(Table::DualAxis, dual_axis)?;
        Ok(builder.finish())
    }

    /// The load error of `table`, if it failed to load.
    pub fn load_error(&self, table: Table) -> Option<&DashboardError> {
        self.inner.failures.get(&table)
    }

    fn ensure_loaded(&self, table: Table) -> Result<()> {
        match self.load_error(table) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn conn(&self) -> &Connection {
        &self.inner.conn
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbd_core::season::SeasonFilter;
    use std::fs;
    use tempfile::TempDir;

    const TRIPS: &str = "\
,ride_id,start_station_name,season,date
0,R1,A,summer,2022-07-01
1,R2,B,winter,2022-01-05
";
    const TOP20: &str = "\
,start_station_name,value
0,A,1
1,B,1
";
    const DUAL_AXIS: &str = "\
,date,bike_rides_daily,avgTemp
0,2022-01-05,1,-2.5
1,2022-07-01,1,27.1
";

    #[test]
    fn dataset_loads_from_paths() {
        let dir = TempDir::new().unwrap();
        let paths = AssetPaths::in_dir(dir.path());
        fs::write(&paths.trips, TRIPS).unwrap();
        fs::write(&paths.top20, TOP20).unwrap();
        fs::write(&paths.dual_axis, DUAL_AXIS).unwrap();

        let dataset = Dataset::from_paths(&paths).unwrap();
        assert_eq!(dataset.trip_count().unwrap(), 2);
        assert_eq!(dataset.reference_top20().unwrap().len(), 2);
        assert_eq!(dataset.dual_axis_series().unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_a_data_load_error() {
        let dir = TempDir::new().unwrap();
        let paths = AssetPaths::in_dir(dir.path());

        let err = Dataset::from_paths(&paths).err().unwrap();
        assert!(matches!(err, DashboardError::DataLoad { table: "trips", .. }));
    }

    #[test]
    fn failed_table_does_not_block_others() {
        let mut builder = DatasetBuilder::new().unwrap();
        assert!(builder.load(Table::Trips, "ride_id,season\nR1,summer\n").is_err());
        builder.load(Table::Top20, TOP20).unwrap();
        builder.record_missing(Table::DualAxis, "dual_axis.csv");
        let dataset = builder.finish();

        assert!(dataset.rank_stations(&SeasonFilter::none()).is_err());
        assert!(dataset.seasons().is_err());
        assert_eq!(dataset.reference_top20().unwrap().len(), 2);

        let err = dataset.dual_axis_series().unwrap_err();
        assert_eq!(
            err,
            DashboardError::data_load("dual_axis", "file not found: dual_axis.csv")
        );
    }

    #[test]
    fn reload_clears_previous_failure() {
        let mut builder = DatasetBuilder::new().unwrap();
        builder.record_missing(Table::Trips, "trips.csv");
        builder.load(Table::Trips, TRIPS).unwrap();
        let dataset = builder.finish();
        assert!(dataset.load_error(Table::Trips).is_none());
        assert_eq!(dataset.trip_count().unwrap(), 2);
    }

    #[test]
    fn embedded_tables_load_or_report_missing() {
        let mut builder = DatasetBuilder::new().unwrap();
        assert_eq!(
            builder
                .load_embedded(Table::Trips, Some(TRIPS), "trips.csv")
                .unwrap(),
            2
        );
        assert!(builder.load_embedded(Table::Top20, None, "top20.csv").is_err());
        let dataset = builder.finish();

        assert_eq!(dataset.trip_count().unwrap(), 2);
        assert_eq!(
            dataset.load_error(Table::Top20),
            Some(&DashboardError::data_load("top20", "file not found: top20.csv"))
        );
    }

    #[test]
    fn dataset_is_cloneable() {
        let dataset = Dataset::from_csv(TRIPS, TOP20, DUAL_AXIS).unwrap();
        let other = dataset.clone();
        assert!(dataset == other);
        assert_eq!(other.trip_count().unwrap(), 2);
    }
}
