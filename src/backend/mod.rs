use crate::backend::error::BackendError;
use crate::backend::records::{RawForecast, RawHoliday, RawWeather};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;
pub mod error_handler;
pub mod records;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Root URL every request is resolved against.
    fn base_url(&self) -> String;

    /// Fetch `periods` forecast steps.
    async fn fetch_forecast(&self, periods: u32) -> Result<Vec<RawForecast>, BackendError>;

    /// Fetch the weather observations.
    async fn fetch_weather(&self) -> Result<Vec<RawWeather>, BackendError>;

    /// Fetch the holiday calendar.
    async fn fetch_holidays(&self) -> Result<Vec<RawHoliday>, BackendError>;

    /// Health message served at the backend root.
    async fn status(&self) -> Result<String, BackendError>;
}
