use std::fmt;
use std::str::FromStr;

/// The dashboard pages offered in the side navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Intro,
    TemperatureUsage,
    PopularStations,
    AggregatedMap,
    Recommendations,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Intro,
        Page::TemperatureUsage,
        Page::PopularStations,
        Page::AggregatedMap,
        Page::Recommendations,
    ];

    /// Label shown in the navigation control.
    pub fn label(self) -> &'static str {
        match self {
            Page::Intro => "Intro page",
            Page::TemperatureUsage => "Temperature and bike usage",
            Page::PopularStations => "Most popular start stations",
            Page::AggregatedMap => "Interactive map with aggregated bike trips",
            Page::Recommendations => "Recommendations",
        }
    }

    /// Whether the page shows the season filter in the sidebar.
    pub fn has_season_filter(self) -> bool {
        matches!(self, Page::PopularStations)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.label() == s)
            .ok_or_else(|| format!("Unknown page: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.label().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Settings".parse::<Page>().is_err());
    }

    #[test]
    fn intro_is_default() {
        assert_eq!(Page::default(), Page::Intro);
        assert_eq!(Page::ALL[0], Page::default());
    }

    #[test]
    fn only_popular_stations_has_filter() {
        let with_filter: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| p.has_season_filter())
            .collect();
        assert_eq!(with_filter, vec![Page::PopularStations]);
    }
}
