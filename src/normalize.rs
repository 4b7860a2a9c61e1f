//! Wire record to typed record conversion.
//!
//! Weather readings take a nullish default of `0.0`: only a null or absent
//! value is replaced, a reported `0` is kept. Forecast and holiday fields
//! are passed through untouched.

use crate::backend::records::{RawForecast, RawHoliday, RawWeather};
use crate::models::{ForecastPoint, HolidayRecord, WeatherPoint};

const WEATHER_DEFAULT: f64 = 0.0;

impl From<RawForecast> for ForecastPoint {
    fn from(raw: RawForecast) -> Self {
        Self {
            timestamp: raw.ds,
            predicted_value: raw.yhat,
            lower_bound: raw.yhat_lower,
            upper_bound: raw.yhat_upper,
        }
    }
}

impl From<RawWeather> for WeatherPoint {
    fn from(raw: RawWeather) -> Self {
        Self {
            timestamp: raw.time,
            temperature: raw.temperature.unwrap_or(WEATHER_DEFAULT),
            humidity: raw.humidity.unwrap_or(WEATHER_DEFAULT),
            cloud_cover: raw.cloud_cover.unwrap_or(WEATHER_DEFAULT),
        }
    }
}

impl From<RawHoliday> for HolidayRecord {
    fn from(raw: RawHoliday) -> Self {
        Self {
            date: raw.date,
            holiday_name: raw.holiday_name,
            is_weekend: raw.is_weekend,
        }
    }
}

pub fn normalize_forecast(rows: Vec<RawForecast>) -> Vec<ForecastPoint> {
    rows.into_iter().map(ForecastPoint::from).collect()
}

pub fn normalize_weather(rows: Vec<RawWeather>) -> Vec<WeatherPoint> {
    rows.into_iter().map(WeatherPoint::from).collect()
}

pub fn normalize_holidays(rows: Vec<RawHoliday>) -> Vec<HolidayRecord> {
    rows.into_iter().map(HolidayRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(json: &str) -> WeatherPoint {
        let raw: RawWeather = serde_json::from_str(json).unwrap();
        WeatherPoint::from(raw)
    }

    #[test]
    /// Only humidity reported: the other readings become zero.
    fn weather_missing_fields_default_to_zero() {
        let point = weather(r#"{"time":"00:00","humidity":55}"#);
        assert_eq!(
            point,
            WeatherPoint {
                timestamp: Some("00:00".to_string()),
                temperature: 0.0,
                humidity: 55.0,
                cloud_cover: 0.0,
            }
        );
    }

    #[test]
    fn weather_null_fields_default_to_zero() {
        let point = weather(r#"{"time":"01:00","temperature":null,"humidity":null,"cloudCover":null}"#);
        assert_eq!(point.temperature, 0.0);
        assert_eq!(point.humidity, 0.0);
        assert_eq!(point.cloud_cover, 0.0);
    }

    #[test]
    /// A reported zero is data, not a gap.
    fn weather_present_values_are_preserved() {
        let point = weather(r#"{"time":"02:00","temperature":0,"humidity":-3.5,"cloud_cover":87.25}"#);
        assert_eq!(point.temperature, 0.0);
        assert_eq!(point.humidity, -3.5);
        assert_eq!(point.cloud_cover, 87.25);
    }

    #[test]
    fn forecast_fields_pass_through_without_defaults() {
        let rows = vec![
            RawForecast {
                ds: Some("2024-01-01T00:00".to_string()),
                yhat: Some(120.5),
                ..RawForecast::default()
            },
            RawForecast {
                ds: Some("2024-01-01T00:10".to_string()),
                ..RawForecast::default()
            },
        ];
        let points = normalize_forecast(rows);

        assert_eq!(points[0].timestamp.as_deref(), Some("2024-01-01T00:00"));
        assert_eq!(points[0].predicted_value, Some(120.5));
        assert_eq!(points[1].predicted_value, None);
        assert_eq!(points[1].lower_bound, None);
    }

    #[test]
    fn holidays_keep_order_and_fields() {
        let rows = vec![
            RawHoliday {
                date: Some("2017-01-26".to_string()),
                holiday_name: Some("Republic Day".to_string()),
                is_weekend: Some(false),
            },
            RawHoliday {
                date: Some("2017-08-15".to_string()),
                holiday_name: None,
                is_weekend: None,
            },
        ];
        let records = normalize_holidays(rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].holiday_name.as_deref(), Some("Republic Day"));
        assert_eq!(records[1].date.as_deref(), Some("2017-08-15"));
        assert_eq!(records[1].is_weekend, None);
    }
}
