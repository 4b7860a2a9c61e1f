//! Wire records returned by the forecast backend.
//!
//! Every field is optional and unknown fields are ignored. A field of the
//! wrong type reads as absent, so one odd value never rejects a whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A number, or a string holding one. Anything else reads as absent.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// A boolean, a 0/1 style number, or `"true"`/`"false"`.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => s.trim().to_lowercase().parse::<bool>().ok(),
        _ => None,
    })
}

/// Strings as-is; numbers and booleans in their JSON spelling.
fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// One row of `GET /forecast`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawForecast {
    #[serde(default, deserialize_with = "lenient_string")]
    pub ds: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub yhat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub yhat_lower: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub yhat_upper: Option<f64>,
}

/// One row of `GET /weather`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WeatherRow")]
pub struct RawWeather {
    pub time: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub cloud_cover: Option<f64>,
}

// The backend emits its CSV column name, older clients expect camelCase.
// Both keys may appear in one row; camelCase wins.
#[derive(Deserialize)]
struct WeatherRow {
    #[serde(default, deserialize_with = "lenient_string")]
    time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    humidity: Option<f64>,
    #[serde(default, rename = "cloudCover", deserialize_with = "lenient_f64")]
    cloud_cover_camel: Option<f64>,
    #[serde(default, rename = "cloud_cover", deserialize_with = "lenient_f64")]
    cloud_cover_snake: Option<f64>,
}

impl From<WeatherRow> for RawWeather {
    fn from(row: WeatherRow) -> Self {
        Self {
            time: row.time,
            temperature: row.temperature,
            humidity: row.humidity,
            cloud_cover: row.cloud_cover_camel.or(row.cloud_cover_snake),
        }
    }
}

/// One row of `GET /holidays`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHoliday {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub holiday_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_weekend: Option<bool>,
}

/// Decodes each element of a JSON array on its own.
///
/// An element that is not an object (the backend appends a bare status code
/// to its error bodies) becomes an all-absent row instead of failing the batch.
pub fn decode_rows<T: DeserializeOwned + Default>(elements: Vec<Value>) -> Vec<T> {
    elements
        .into_iter()
        .map(|element| T::deserialize(element).unwrap_or_default())
        .collect()
}

/// Body of `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}
