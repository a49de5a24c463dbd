//! Chart builders: ranked station bars and the rides/temperature dual axis.
//!
//! Both builders validate the whole table before producing anything, so a
//! failure never leaves a half-built figure behind.

use crate::figure::{Axis, AxisType, Figure, Layout, Line, Marker, Trace, TraceKind};
use crate::table::{Table, DATE_COLUMN, RIDES_COLUMN, STATION_COLUMN, TEMP_COLUMN, VALUE_COLUMN};
use cbd_core::Result;

/// Title, labels and size of the ranked bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    /// Plotly colorscale keyed to the bar values
    pub colorscale: String,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            title: "Top 20 most popular bike stations in New York".to_string(),
            x_label: "Start stations".to_string(),
            y_label: "Sum of trips".to_string(),
            width: 900,
            height: 600,
            colorscale: "Blues".to_string(),
        }
    }
}

/// Legend label and color of one dual-axis trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisOptions {
    pub title: String,
    pub height: u32,
    pub primary: SeriesStyle,
    pub secondary: SeriesStyle,
}

impl Default for DualAxisOptions {
    fn default() -> Self {
        Self {
            title: "Daily bike trips and temperatures in 2022".to_string(),
            height: 400,
            primary: SeriesStyle {
                name: "Daily bike rides".to_string(),
                color: "blue".to_string(),
            },
            secondary: SeriesStyle {
                name: "Daily temperature".to_string(),
                color: "red".to_string(),
            },
        }
    }
}

/// Bar chart of stations against trip counts.
///
/// Expects a `start_station_name` text column and a `value` number column,
/// already sorted and limited.
pub fn ranked_bar(table: &Table, options: &BarOptions) -> Result<Figure> {
    let stations = table.text(STATION_COLUMN)?;
    let values = table.numbers(VALUE_COLUMN)?;
    table.check_lengths(&[STATION_COLUMN, VALUE_COLUMN])?;

    let mut trace = Trace::new(TraceKind::Bar, stations.to_vec(), values.to_vec());
    trace.marker = Some(Marker {
        color: values.to_vec(),
        colorscale: Some(options.colorscale.clone()),
    });

    log::debug!("charts: ranked_bar with {} stations", stations.len());
    Ok(Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(options.title.as_str().into()),
            xaxis: Axis {
                title: Some(options.x_label.as_str().into()),
                kind: Some(AxisType::Category),
                ..Axis::default()
            },
            yaxis: Axis {
                title: Some(options.y_label.as_str().into()),
                ..Axis::default()
            },
            yaxis2: None,
            width: Some(options.width),
            height: Some(options.height),
        },
    })
}

/// Daily rides on the primary axis and temperature on the secondary axis,
/// sharing one date axis.
///
/// Expects `date`, `bike_rides_daily` and `avgTemp` columns.
pub fn dual_axis(table: &Table, options: &DualAxisOptions) -> Result<Figure> {
    let dates = table.dates(DATE_COLUMN)?;
    let rides = table.numbers(RIDES_COLUMN)?;
    let temps = table.numbers(TEMP_COLUMN)?;
    table.check_lengths(&[DATE_COLUMN, RIDES_COLUMN, TEMP_COLUMN])?;

    let x: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();

    let line_trace = |y: &[f64], style: &SeriesStyle, axis: &str| {
        let mut trace = Trace::new(TraceKind::Scatter, x.clone(), y.to_vec());
        trace.name = Some(style.name.clone());
        trace.mode = Some("lines".to_string());
        trace.yaxis = Some(axis.to_string());
        trace.line = Some(Line {
            color: style.color.clone(),
        });
        trace
    };

    log::debug!("charts: dual_axis with {} days", x.len());
    Ok(Figure {
        data: vec![
            line_trace(rides, &options.primary, "y"),
            line_trace(temps, &options.secondary, "y2"),
        ],
        layout: Layout {
            title: Some(options.title.as_str().into()),
            xaxis: Axis {
                kind: Some(AxisType::Date),
                ..Axis::default()
            },
            yaxis: Axis {
                title: Some(options.primary.name.as_str().into()),
                ..Axis::default()
            },
            yaxis2: Some(Axis {
                title: Some(options.secondary.name.as_str().into()),
                overlaying: Some("y".to_string()),
                side: Some("right".to_string()),
                ..Axis::default()
            }),
            width: None,
            height: Some(options.height),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;
    use cbd_core::trip::{DailyRideTemp, StationCount, StationRanking};
    use cbd_core::DashboardError;
    use chrono::NaiveDate;
    use serde_json::json;

    fn ranking() -> StationRanking {
        StationRanking {
            stations: vec![StationCount::new("A", 3), StationCount::new("B", 2)],
            total_rides: 5,
        }
    }

    fn series() -> Vec<DailyRideTemp> {
        vec![
            DailyRideTemp {
                date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                bike_rides_daily: 20428,
                avg_temp: 11.6,
            },
            DailyRideTemp {
                date: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
                bike_rides_daily: 43009,
                avg_temp: 11.4,
            },
        ]
    }

    #[test]
    fn ranked_bar_maps_stations_and_counts() {
        let figure = ranked_bar(&Table::from(&ranking()), &BarOptions::default()).unwrap();
        let value = serde_json::to_value(&figure).unwrap();

        assert_eq!(value["data"][0]["type"], "bar");
        assert_eq!(value["data"][0]["x"], json!(["A", "B"]));
        assert_eq!(value["data"][0]["y"], json!([3.0, 2.0]));
        assert_eq!(value["data"][0]["marker"]["colorscale"], "Blues");
        assert_eq!(value["data"][0]["marker"]["color"], json!([3.0, 2.0]));
        assert_eq!(
            value["layout"]["title"]["text"],
            "Top 20 most popular bike stations in New York"
        );
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Start stations");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "Sum of trips");
        assert_eq!(value["layout"]["width"], 900);
        assert_eq!(value["layout"]["height"], 600);
    }

    #[test]
    fn ranked_bar_uses_caller_options() {
        let options = BarOptions {
            title: "Winter stations".into(),
            width: 640,
            ..BarOptions::default()
        };
        let figure = ranked_bar(&Table::from(&ranking()), &options).unwrap();
        assert_eq!(figure.layout.title.as_ref().map(|t| t.text.as_str()), Some("Winter stations"));
        assert_eq!(figure.layout.width, Some(640));
    }

    #[test]
    fn ranked_bar_without_value_column_fails() {
        let table = Table::from(&ranking()).without_column("value");
        let err = ranked_bar(&table, &BarOptions::default()).unwrap_err();
        assert_eq!(err, DashboardError::chart_spec("missing column `value`"));
    }

    #[test]
    fn ranked_bar_rejects_ragged_table() {
        let table = Table::from(&ranking()).with_column("value", Column::Number(vec![1.0]));
        assert!(matches!(
            ranked_bar(&table, &BarOptions::default()),
            Err(DashboardError::ChartSpec(_))
        ));
    }

    #[test]
    fn ranked_bar_accepts_empty_ranking() {
        let figure = ranked_bar(&Table::from(&StationRanking::empty()), &BarOptions::default()).unwrap();
        assert!(figure.data[0].x.is_empty());
    }

    #[test]
    fn builders_do_not_mutate_input() {
        let table = Table::from(&ranking());
        let before = table.clone();
        ranked_bar(&table, &BarOptions::default()).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn dual_axis_puts_temperature_on_secondary_axis() {
        let series = series();
        let figure = dual_axis(&Table::from(series.as_slice()), &DualAxisOptions::default()).unwrap();
        let value = serde_json::to_value(&figure).unwrap();

        assert_eq!(value["data"][0]["name"], "Daily bike rides");
        assert_eq!(value["data"][0]["yaxis"], "y");
        assert_eq!(value["data"][0]["line"]["color"], "blue");
        assert_eq!(value["data"][0]["y"], json!([20428.0, 43009.0]));

        assert_eq!(value["data"][1]["name"], "Daily temperature");
        assert_eq!(value["data"][1]["yaxis"], "y2");
        assert_eq!(value["data"][1]["line"]["color"], "red");

        assert_eq!(value["data"][0]["x"], json!(["2022-01-01", "2022-01-02"]));
        assert_eq!(value["data"][0]["x"], value["data"][1]["x"]);

        assert_eq!(value["layout"]["yaxis2"]["overlaying"], "y");
        assert_eq!(value["layout"]["yaxis2"]["side"], "right");
        assert_eq!(value["layout"]["xaxis"]["type"], "date");
        assert_eq!(value["layout"]["height"], 400);
    }

    #[test]
    fn dual_axis_without_temperature_fails() {
        let series = series();
        let table = Table::from(series.as_slice()).without_column("avgTemp");
        let err = dual_axis(&table, &DualAxisOptions::default()).unwrap_err();
        assert_eq!(err, DashboardError::chart_spec("missing column `avgTemp`"));
    }

    #[test]
    fn dual_axis_rejects_text_dates() {
        let series = series();
        let table = Table::from(series.as_slice())
            .with_column("date", Column::Text(vec!["Jan 1".into(), "Jan 2".into()]));
        assert!(dual_axis(&table, &DualAxisOptions::default()).is_err());
    }

    #[test]
    fn figure_to_json_round_trips_title() {
        let figure = ranked_bar(&Table::from(&ranking()), &BarOptions::default()).unwrap();
        let json = figure.to_json().unwrap();
        assert!(json.contains("\"colorscale\":\"Blues\""));
    }
}
