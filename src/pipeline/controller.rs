//! Dashboard startup sequencing

use super::common::{EventSender, LoadMode, PipelineOptions};
use super::surface::{Container, Surface};
use super::{Pipeline, PipelineError, views};
use crate::backend::Backend;
use crate::backend::error_handler::ErrorHandler;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::normalize::{normalize_forecast, normalize_holidays, normalize_weather};
use log::{debug, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Per-pipeline outcome of an isolated load: records rendered, or why not.
#[derive(Debug)]
pub struct DashboardReport {
    pub forecast: Result<usize, PipelineError>,
    pub weather: Result<usize, PipelineError>,
    pub holidays: Result<usize, PipelineError>,
}

impl DashboardReport {
    pub fn into_failures(self) -> Vec<PipelineError> {
        [self.forecast, self.weather, self.holidays]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }
}

/// Runs the forecast, weather and holiday pipelines against one backend.
pub struct DashboardController {
    backend: Arc<dyn Backend>,
    surface: Arc<dyn Surface>,
    events: Option<EventSender>,
    options: PipelineOptions,
    cancel: CancellationToken,
    error_handler: ErrorHandler,
}

impl DashboardController {
    pub fn new(
        backend: Arc<dyn Backend>,
        surface: Arc<dyn Surface>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            backend,
            surface,
            events: None,
            options,
            cancel: CancellationToken::new(),
            error_handler: ErrorHandler::new(),
        }
    }

    /// Report progress and failures to the activity log.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    /// Abort in-flight pipelines when `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Forecast, then weather, then holidays. Each pipeline renders before
    /// the next one starts; the first failure is returned and nothing after
    /// it runs.
    pub async fn initialize(&self) -> Result<(), PipelineError> {
        for pipeline in Pipeline::ALL {
            self.run_pipeline(pipeline).await?;
        }
        Ok(())
    }

    /// All three pipelines at once. A failing pipeline leaves only its own
    /// container empty.
    pub async fn initialize_isolated(&self) -> DashboardReport {
        let (forecast, weather, holidays) = tokio::join!(
            self.run_pipeline(Pipeline::Forecast),
            self.run_pipeline(Pipeline::Weather),
            self.run_pipeline(Pipeline::Holidays),
        );
        DashboardReport {
            forecast,
            weather,
            holidays,
        }
    }

    /// Loads the dashboard in the configured mode and returns every failure.
    pub async fn run(&self) -> Vec<PipelineError> {
        let failures = match self.options.mode {
            LoadMode::Sequential => self.initialize().await.err().into_iter().collect(),
            LoadMode::Isolated => self.initialize_isolated().await.into_failures(),
        };

        if failures.is_empty() {
            self.log_controller("Dashboard ready".to_string(), EventType::Success, LogLevel::Info)
                .await;
        } else {
            self.log_controller(
                format!("Dashboard loaded with {} failed pipeline(s)", failures.len()),
                EventType::Error,
                LogLevel::Warn,
            )
            .await;
        }
        failures
    }

    async fn run_pipeline(&self, pipeline: Pipeline) -> Result<usize, PipelineError> {
        self.log(
            pipeline,
            format!("Fetching {} data...", pipeline),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(PipelineError::Cancelled(pipeline)),
            result = self.fetch_and_render(pipeline) => result,
        };

        match &result {
            Ok(count) => {
                self.log(
                    pipeline,
                    format!("Rendered {} {} record(s)", count, pipeline),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
            }
            Err(PipelineError::Backend { source, .. }) => {
                warn!("{} pipeline failed: {}", pipeline, source);
                let level = self.error_handler.classify_error(source);
                self.log(
                    pipeline,
                    format!("Failed to load {}: {}", pipeline, source),
                    EventType::Error,
                    level,
                )
                .await;
            }
            Err(PipelineError::Cancelled(_)) => {
                debug!("{} pipeline cancelled", pipeline);
            }
        }
        result
    }

    async fn fetch_and_render(&self, pipeline: Pipeline) -> Result<usize, PipelineError> {
        let backend_error = |source| PipelineError::Backend { pipeline, source };
        match pipeline {
            Pipeline::Forecast => {
                let rows = self
                    .backend
                    .fetch_forecast(self.options.forecast_periods)
                    .await
                    .map_err(backend_error)?;
                let points = normalize_forecast(rows);
                let chart = views::forecast_chart(&points, self.options.show_forecast_bounds);
                self.surface
                    .render_chart(Container::ForecastChart, chart)
                    .await;
                Ok(points.len())
            }
            Pipeline::Weather => {
                let rows = self.backend.fetch_weather().await.map_err(backend_error)?;
                let points = normalize_weather(rows);
                let chart = views::weather_chart(&points);
                self.surface.render_chart(Container::WeatherChart, chart).await;
                Ok(points.len())
            }
            Pipeline::Holidays => {
                let rows = self.backend.fetch_holidays().await.map_err(backend_error)?;
                let records = normalize_holidays(rows);
                let items = views::holiday_items(&records);
                self.surface.render_list(Container::HolidayList, items).await;
                Ok(records.len())
            }
        }
    }

    async fn log(&self, pipeline: Pipeline, msg: String, event_type: EventType, level: LogLevel) {
        if let Some(events) = &self.events {
            events
                .send_pipeline_event(pipeline, msg, event_type, level)
                .await;
        }
    }

    async fn log_controller(&self, msg: String, event_type: EventType, level: LogLevel) {
        if let Some(events) = &self.events {
            events.send_controller_event(msg, event_type, level).await;
        }
    }
}
