use crate::season::Season;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Maximum number of stations kept in a ranking.
pub const RANKING_LIMIT: usize = 20;

/// One logged bicycle rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    /// Unique ride identifier
    pub ride_id: String,
    pub start_station_name: String,
    pub season: Season,
    pub date: NaiveDate,
}

/// A start station with its summed trip count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub start_station_name: String,
    pub value: u64,
}

impl StationCount {
    pub fn new(start_station_name: impl Into<String>, value: u64) -> Self {
        Self {
            start_station_name: start_station_name.into(),
            value,
        }
    }
}

/// Top stations under the active season filter.
///
/// `stations` is sorted descending by `value` and holds at most
/// [`RANKING_LIMIT`] rows. `total_rides` counts every retained trip, not
/// only the trips of the listed stations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRanking {
    pub stations: Vec<StationCount>,
    pub total_rides: u64,
}

impl StationRanking {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn station_names(&self) -> Vec<&str> {
        self.stations
            .iter()
            .map(|s| s.start_station_name.as_str())
            .collect()
    }

    /// Check that the ranking agrees with a reference ranking.
    ///
    /// Counts must match position by position. Stations sharing a count may
    /// appear in any order, so each run of equal counts is compared as a set.
    /// The last run is exempt: when a tie straddles the ranking limit, each
    /// side may have kept different members of it.
    pub fn matches_reference(&self, reference: &[StationCount]) -> bool {
        if self.stations.len() != reference.len()
            || self
                .stations
                .iter()
                .zip(reference)
                .any(|(ours, theirs)| ours.value != theirs.value)
        {
            return false;
        }

        let mut start = 0;
        while start < self.stations.len() {
            let value = self.stations[start].value;
            let end = self.stations[start..]
                .iter()
                .position(|s| s.value != value)
                .map_or(self.stations.len(), |offset| start + offset);
            if end == self.stations.len() {
                break;
            }

            let ours: BTreeSet<&str> = self.stations[start..end]
                .iter()
                .map(|s| s.start_station_name.as_str())
                .collect();
            let theirs: BTreeSet<&str> = reference[start..end]
                .iter()
                .map(|s| s.start_station_name.as_str())
                .collect();
            if ours != theirs {
                return false;
            }
            start = end;
        }
        true
    }
}

/// Daily ride volume paired with the day's average temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRideTemp {
    pub date: NaiveDate,
    pub bike_rides_daily: u64,
    /// Average temperature for the day
    pub avg_temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(rows: &[(&str, u64)]) -> StationRanking {
        StationRanking {
            stations: rows.iter().map(|(n, v)| StationCount::new(*n, *v)).collect(),
            total_rides: rows.iter().map(|(_, v)| v).sum(),
        }
    }

    #[test]
    fn matches_reference_ignores_tie_order() {
        let ours = ranking(&[("A", 5), ("B", 3), ("C", 3), ("D", 1)]);
        let reference = vec![
            StationCount::new("A", 5),
            StationCount::new("C", 3),
            StationCount::new("B", 3),
            StationCount::new("D", 1),
        ];
        assert!(ours.matches_reference(&reference));
    }

    #[test]
    fn matches_reference_detects_reordering() {
        let ours = ranking(&[("A", 5), ("B", 3)]);
        let reference = vec![StationCount::new("B", 5), StationCount::new("A", 3)];
        assert!(!ours.matches_reference(&reference));
    }

    #[test]
    fn matches_reference_checks_reference_counts() {
        let ours = ranking(&[("A", 5), ("B", 3)]);
        let reference = vec![StationCount::new("A", 9), StationCount::new("B", 1)];
        assert!(!ours.matches_reference(&reference));
    }

    #[test]
    fn matches_reference_allows_tie_cut_by_limit() {
        // 19 distinct counts, then two stations tied at 5 competing for the
        // last slot. Each side kept a different one.
        let mut rows: Vec<(String, u64)> = (0..19).map(|i| (format!("S{i:02}"), 100 - i)).collect();
        let reference: Vec<StationCount> = rows
            .iter()
            .map(|(n, v)| StationCount::new(n.as_str(), *v))
            .chain(std::iter::once(StationCount::new("Alpha", 5)))
            .collect();
        rows.push(("Zeta".to_string(), 5));
        let ours = StationRanking {
            stations: rows.iter().map(|(n, v)| StationCount::new(n.as_str(), *v)).collect(),
            total_rides: 0,
        };

        assert_eq!(ours.len(), RANKING_LIMIT);
        assert!(ours.matches_reference(&reference));
    }

    #[test]
    fn matches_reference_still_checks_inner_ties() {
        let ours = ranking(&[("A", 5), ("B", 5), ("C", 1)]);
        let reference = vec![
            StationCount::new("A", 5),
            StationCount::new("X", 5),
            StationCount::new("C", 1),
        ];
        assert!(!ours.matches_reference(&reference));
    }

    #[test]
    fn matches_reference_requires_same_length() {
        let ours = ranking(&[("A", 5)]);
        assert!(!ours.matches_reference(&[]));
    }

    #[test]
    fn empty_ranking() {
        let r = StationRanking::empty();
        assert!(r.is_empty());
        assert_eq!(r.total_rides, 0);
        assert!(r.station_names().is_empty());
    }
}
