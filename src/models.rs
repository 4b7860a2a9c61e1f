//! Typed records the dashboard plots.
//!
//! Built from the wire records by [`crate::normalize`], consumed once by a
//! renderer and then dropped.

use crate::consts::cli_consts::chart::MISSING_FIELD;
use std::fmt::Display;

/// One forecast step. Fields absent on the wire stay absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastPoint {
    /// Opaque label, never parsed as a date.
    pub timestamp: Option<String>,
    pub predicted_value: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

/// One weather observation. Missing readings are already defaulted to `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherPoint {
    pub timestamp: Option<String>,
    pub temperature: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HolidayRecord {
    pub date: Option<String>,
    pub holiday_name: Option<String>,
    pub is_weekend: Option<bool>,
}

/// `"<date> → <holidayName> (Weekend: <isWeekend>)"`
impl Display for HolidayRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let is_weekend = self
            .is_weekend
            .map(|flag| flag.to_string())
            .unwrap_or_else(|| MISSING_FIELD.to_string());
        write!(
            f,
            "{} → {} (Weekend: {})",
            self.date.as_deref().unwrap_or(MISSING_FIELD),
            self.holiday_name.as_deref().unwrap_or(MISSING_FIELD),
            is_weekend
        )
    }
}
