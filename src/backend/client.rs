//! Forecast Backend Client
//!
//! A client for the forecast backend, fetching the forecast, weather and holiday series.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::backend::records::{
    RawForecast, RawHoliday, RawWeather, StatusResponse, decode_rows,
};
use crate::consts::cli_consts::network;
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("demand-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client bound to `base_url`.
    ///
    /// # Errors
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, BackendError> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&raw)?)
    }

    /// `GET /forecast?periods=<periods>`
    pub(crate) fn forecast_url(&self, periods: u32) -> Result<Url, BackendError> {
        let mut url = self.build_url("forecast")?;
        url.query_pairs_mut()
            .append_pair("periods", &periods.to_string());
        Ok(url)
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_response<T: DeserializeOwned>(
        endpoint: &str,
        bytes: &[u8],
    ) -> Result<T, BackendError> {
        serde_json::from_slice(bytes).map_err(|source| BackendError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn get_request<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        let endpoint = url.path().to_string();
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        debug!("{} returned {} bytes", endpoint, response_bytes.len());
        Self::decode_response(&endpoint, &response_bytes)
    }

    /// A JSON array whose elements are decoded one by one.
    async fn get_rows<T: DeserializeOwned + Default>(
        &self,
        url: Url,
    ) -> Result<Vec<T>, BackendError> {
        let elements: Vec<serde_json::Value> = self.get_request(url).await?;
        Ok(decode_rows(elements))
    }
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_forecast(&self, periods: u32) -> Result<Vec<RawForecast>, BackendError> {
        let url = self.forecast_url(periods)?;
        self.get_rows(url).await
    }

    async fn fetch_weather(&self) -> Result<Vec<RawWeather>, BackendError> {
        let url = self.build_url("weather")?;
        self.get_rows(url).await
    }

    async fn fetch_holidays(&self) -> Result<Vec<RawHoliday>, BackendError> {
        let url = self.build_url("holidays")?;
        self.get_rows(url).await
    }

    async fn status(&self) -> Result<String, BackendError> {
        let url = self.build_url("/")?;
        let response: StatusResponse = self.get_request(url).await?;
        Ok(response.message)
    }
}
