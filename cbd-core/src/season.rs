use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A season label as it appears in the trip data.
///
/// The set of seasons is read from the data rather than fixed. Labels are
/// trimmed on construction and compared case-sensitively. Known labels sort
/// in calendar order (winter, spring, summer, fall/autumn); anything else
/// sorts after them alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Season(String);

impl Season {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn calendar_rank(&self) -> u8 {
        match self.0.to_ascii_lowercase().as_str() {
            "winter" => 0,
            "spring" => 1,
            "summer" => 2,
            "fall" | "autumn" => 3,
            _ => u8::MAX,
        }
    }
}

impl Ord for Season {
    fn cmp(&self, other: &Self) -> Ordering {
        self.calendar_rank()
            .cmp(&other.calendar_rank())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Season {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Season {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The set of seasons currently selected on the popular stations page.
///
/// An empty filter selects no rows at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonFilter {
    selected: BTreeSet<Season>,
}

impl SeasonFilter {
    /// Select every season in `seasons` (the page default).
    pub fn all(seasons: impl IntoIterator<Item = Season>) -> Self {
        seasons.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, season: &Season) -> bool {
        self.selected.contains(season)
    }

    /// Add or remove a season.
    pub fn set(&mut self, season: Season, selected: bool) {
        if selected {
            self.selected.insert(season);
        } else {
            self.selected.remove(&season);
        }
    }

    /// Selected seasons in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &Season> {
        self.selected.iter()
    }
}

impl FromIterator<Season> for SeasonFilter {
    fn from_iter<I: IntoIterator<Item = Season>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_sort_in_calendar_order() {
        let mut seasons: Vec<Season> = ["summer", "fall", "winter", "spring"]
            .into_iter()
            .map(Season::from)
            .collect();
        seasons.sort();
        let labels: Vec<&str> = seasons.iter().map(Season::as_str).collect();
        assert_eq!(labels, vec!["winter", "spring", "summer", "fall"]);
    }

    #[test]
    fn unknown_labels_sort_last() {
        let mut seasons = vec![Season::new("monsoon"), Season::new("dry"), Season::new("winter")];
        seasons.sort();
        let labels: Vec<&str> = seasons.iter().map(Season::as_str).collect();
        assert_eq!(labels, vec!["winter", "dry", "monsoon"]);
    }

    #[test]
    fn labels_are_trimmed() {
        assert_eq!(Season::new("  summer "), Season::new("summer"));
    }

    #[test]
    fn filter_set_and_unset() {
        let mut filter = SeasonFilter::all(vec![Season::new("summer"), Season::new("winter")]);
        assert_eq!(filter.len(), 2);

        filter.set(Season::new("summer"), false);
        assert!(!filter.contains(&Season::new("summer")));
        assert!(filter.contains(&Season::new("winter")));

        filter.set(Season::new("winter"), false);
        assert!(filter.is_empty());
        assert_eq!(filter, SeasonFilter::none());
    }
}
