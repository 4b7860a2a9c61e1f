//! Builds what each container shows from normalized records.

use super::chart::{LineChart, Series};
use crate::consts::cli_consts::chart::MISSING_FIELD;
use crate::models::{ForecastPoint, HolidayRecord, WeatherPoint};
use ratatui::style::Color;

pub const DEMAND_SERIES: &str = "Electricity Demand (MW)";
pub const LOWER_BOUND_SERIES: &str = "Lower Bound (MW)";
pub const UPPER_BOUND_SERIES: &str = "Upper Bound (MW)";
pub const TEMPERATURE_SERIES: &str = "Temperature (°C)";
pub const HUMIDITY_SERIES: &str = "Humidity (%)";
pub const CLOUD_COVER_SERIES: &str = "Cloud Cover (%)";

const DEMAND_COLOR: Color = Color::Rgb(75, 192, 192);
const BOUND_COLOR: Color = Color::DarkGray;

fn label(timestamp: &Option<String>) -> String {
    timestamp
        .clone()
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

/// Demand forecast, optionally framed by its uncertainty interval.
pub fn forecast_chart(points: &[ForecastPoint], show_bounds: bool) -> LineChart {
    let labels = points.iter().map(|p| label(&p.timestamp)).collect();
    let chart = LineChart::new(labels).with_series(Series::new(
        DEMAND_SERIES,
        points.iter().map(|p| p.predicted_value).collect(),
        DEMAND_COLOR,
    ));

    if !show_bounds {
        return chart;
    }
    chart
        .with_series(Series::new(
            LOWER_BOUND_SERIES,
            points.iter().map(|p| p.lower_bound).collect(),
            BOUND_COLOR,
        ))
        .with_series(Series::new(
            UPPER_BOUND_SERIES,
            points.iter().map(|p| p.upper_bound).collect(),
            BOUND_COLOR,
        ))
}

pub fn weather_chart(points: &[WeatherPoint]) -> LineChart {
    let labels = points.iter().map(|p| label(&p.timestamp)).collect();
    LineChart::new(labels)
        .with_series(Series::new(
            TEMPERATURE_SERIES,
            points.iter().map(|p| Some(p.temperature)).collect(),
            Color::Red,
        ))
        .with_series(Series::new(
            HUMIDITY_SERIES,
            points.iter().map(|p| Some(p.humidity)).collect(),
            Color::Blue,
        ))
        .with_series(Series::new(
            CLOUD_COVER_SERIES,
            points.iter().map(|p| Some(p.cloud_cover)).collect(),
            Color::Gray,
        ))
}

/// One display line per holiday, in backend order.
pub fn holiday_items(records: &[HolidayRecord]) -> Vec<String> {
    records.iter().map(HolidayRecord::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand_point(ts: &str, value: f64) -> ForecastPoint {
        ForecastPoint {
            timestamp: Some(ts.to_string()),
            predicted_value: Some(value),
            lower_bound: Some(value - 10.0),
            upper_bound: Some(value + 10.0),
        }
    }

    #[test]
    fn forecast_chart_has_one_series_by_default() {
        let chart = forecast_chart(&[demand_point("2024-01-01T00:00", 120.5)], false);

        assert_eq!(chart.labels, vec!["2024-01-01T00:00"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, DEMAND_SERIES);
        assert_eq!(chart.series[0].values, vec![Some(120.5)]);
        assert!(chart.tension > 0.0);
    }

    #[test]
    fn forecast_chart_adds_bounds_on_request() {
        let chart = forecast_chart(&[demand_point("t0", 100.0)], true);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![DEMAND_SERIES, LOWER_BOUND_SERIES, UPPER_BOUND_SERIES]);
        assert_eq!(chart.series[2].values, vec![Some(110.0)]);
    }

    #[test]
    fn forecast_gaps_are_not_filled() {
        let point = ForecastPoint {
            timestamp: None,
            ..ForecastPoint::default()
        };
        let chart = forecast_chart(&[point], false);
        assert_eq!(chart.labels, vec![MISSING_FIELD]);
        assert_eq!(chart.series[0].values, vec![None]);
    }

    #[test]
    fn weather_chart_has_three_distinct_series() {
        let chart = weather_chart(&[WeatherPoint {
            timestamp: Some("00:00".to_string()),
            temperature: 0.0,
            humidity: 55.0,
            cloud_cover: 0.0,
        }]);

        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[1].name, HUMIDITY_SERIES);
        assert_eq!(chart.series[1].values, vec![Some(55.0)]);
        let colors: Vec<Color> = chart.series.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::Red, Color::Blue, Color::Gray]);
    }

    #[test]
    fn holiday_items_keep_input_order() {
        let records = vec![
            HolidayRecord {
                date: Some("2017-01-26".to_string()),
                holiday_name: Some("Republic Day".to_string()),
                is_weekend: Some(false),
            },
            HolidayRecord {
                date: Some("2017-10-01".to_string()),
                holiday_name: Some("Muharram".to_string()),
                is_weekend: Some(true),
            },
        ];
        assert_eq!(
            holiday_items(&records),
            vec![
                "2017-01-26 → Republic Day (Weekend: false)",
                "2017-10-01 → Muharram (Weekend: true)",
            ]
        );
    }
}
