//! Typed queries over the loaded dataset.
//!
//! None of these mutate the database, so repeated calls with the same
//! arguments return the same results.

use crate::schema::Table;
use crate::Dataset;
use cbd_core::season::{Season, SeasonFilter};
use cbd_core::trip::{DailyRideTemp, StationCount, StationRanking, RANKING_LIMIT};
use cbd_core::{DashboardError, Result};
use chrono::NaiveDate;
use rusqlite::params_from_iter;

fn query_error(table: Table) -> impl Fn(rusqlite::Error) -> DashboardError {
    move |e| DashboardError::data_load(table.name(), e.to_string())
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

impl Dataset {
    /// Rank start stations by trip count for the selected seasons.
    ///
    /// Keeps the trips whose season is in `filter`, counts them per start
    /// station and returns the busiest [`RANKING_LIMIT`] stations, busiest
    /// first. Stations with equal counts keep the order in which they first
    /// appear in the trips table. An empty filter selects nothing.
    pub fn rank_stations(&self, filter: &SeasonFilter) -> Result<StationRanking> {
        self.ensure_loaded(Table::Trips)?;
        if filter.is_empty() {
            log::debug!("query: rank_stations with empty season filter");
            return Ok(StationRanking::empty());
        }

        let err = query_error(Table::Trips);
        let seasons: Vec<&str> = filter.iter().map(Season::as_str).collect();
        let in_list = placeholders(seasons.len());

        let total_rides: u64 = self
            .conn()
            .query_row(
                &format!("SELECT COUNT(ride_id) FROM trips WHERE season IN ({in_list})"),
                params_from_iter(seasons.iter()),
                |row| row.get(0),
            )
            .map_err(&err)?;

        let mut stmt = self
            .conn()
            .prepare(&format!(
                "SELECT start_station_name, COUNT(*) AS value
                 FROM trips
                 WHERE season IN ({in_list})
                 GROUP BY start_station_name
                 ORDER BY value DESC, MIN(row_order) ASC
                 LIMIT {RANKING_LIMIT}"
            ))
            .map_err(&err)?;
        let stations = stmt
            .query_map(params_from_iter(seasons.iter()), |row| {
                Ok(StationCount::new(row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
            })
            .map_err(&err)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(&err)?;

        log::info!(
            "query: rank_stations over {} season(s) returned {} stations, {} rides",
            seasons.len(),
            stations.len(),
            total_rides
        );
        Ok(StationRanking {
            stations,
            total_rides,
        })
    }

    /// Distinct season labels present in the trips table, in calendar order.
    pub fn seasons(&self) -> Result<Vec<Season>> {
        self.ensure_loaded(Table::Trips)?;
        let err = query_error(Table::Trips);
        let mut stmt = self
            .conn()
            .prepare("SELECT DISTINCT season FROM trips")
            .map_err(&err)?;
        let mut seasons = stmt
            .query_map([], |row| row.get::<_, String>(0).map(Season::new))
            .map_err(&err)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(&err)?;
        seasons.sort();
        Ok(seasons)
    }

    /// Number of trips loaded.
    pub fn trip_count(&self) -> Result<u64> {
        self.ensure_loaded(Table::Trips)?;
        self.conn()
            .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))
            .map_err(query_error(Table::Trips))
    }

    /// The precomputed top-20 table, busiest first.
    pub fn reference_top20(&self) -> Result<Vec<StationCount>> {
        self.ensure_loaded(Table::Top20)?;
        let err = query_error(Table::Top20);
        let mut stmt = self
            .conn()
            .prepare(
                "SELECT start_station_name, value FROM top20
                 ORDER BY value DESC, row_order ASC",
            )
            .map_err(&err)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StationCount::new(row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
            })
            .map_err(&err)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(&err)?;
        Ok(rows)
    }

    /// Daily ride counts and average temperatures, ordered by date.
    pub fn dual_axis_series(&self) -> Result<Vec<DailyRideTemp>> {
        self.ensure_loaded(Table::DualAxis)?;
        let err = query_error(Table::DualAxis);
        let mut stmt = self
            .conn()
            .prepare("SELECT date, bike_rides_daily, avg_temp FROM dual_axis ORDER BY date")
            .map_err(&err)?;
        let rows = stmt
            .query_map([], |row| {
                let date: String = row.get(0)?;
                let rides: u64 = row.get(1)?;
                Ok((date, rides, row.get::<_, f64>(2)?))
            })
            .map_err(&err)?
            .map(|row| {
                let (date, rides, avg_temp) = row.map_err(&err)?;
                let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                    DashboardError::data_load(Table::DualAxis.name(), format!("stored date `{date}`: {e}"))
                })?;
                Ok(DailyRideTemp {
                    date,
                    bike_rides_daily: rides,
                    avg_temp,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        log::info!("query: dual_axis_series returned {} records", rows.len());
        Ok(rows)
    }
}
