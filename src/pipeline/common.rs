//! Shared pipeline plumbing: the event channel and run options

use super::Pipeline;
use super::chart::LineChart;
use super::surface::{Container, RenderCommand, Surface};
use crate::config::Config;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Forwards render commands and log lines to the UI over a channel.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_pipeline_event(
        &self,
        pipeline: Pipeline,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::pipeline_with_level(
            pipeline, message, event_type, log_level,
        ))
        .await;
    }

    pub async fn send_controller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::controller_with_level(message, event_type, log_level))
            .await;
    }
}

#[async_trait::async_trait]
impl Surface for EventSender {
    async fn render_chart(&self, container: Container, chart: LineChart) {
        self.send_event(Event::render(RenderCommand::Chart { container, chart }))
            .await;
    }

    async fn render_list(&self, container: Container, items: Vec<String>) {
        self.send_event(Event::render(RenderCommand::List { container, items }))
            .await;
    }
}

/// How the controller runs the three pipelines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, strum::Display)]
pub enum LoadMode {
    /// Forecast, weather, holidays one after another; the first failure stops the rest.
    #[strum(serialize = "sequential")]
    Sequential,
    /// All three at once, each failure contained to its own container.
    #[default]
    #[strum(serialize = "isolated")]
    Isolated,
}

/// Settings shared by every pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub forecast_periods: u32,
    pub show_forecast_bounds: bool,
    pub mode: LoadMode,
}

impl PipelineOptions {
    pub fn from_config(config: &Config, mode: LoadMode) -> Self {
        Self {
            forecast_periods: config.forecast_periods,
            show_forecast_bounds: config.show_forecast_bounds,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn surface_calls_become_render_events() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);

        sender
            .render_list(Container::HolidayList, vec!["x".to_string()])
            .await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Render);
        assert_eq!(
            event.render,
            Some(RenderCommand::List {
                container: Container::HolidayList,
                items: vec!["x".to_string()],
            })
        );
    }

    #[test]
    fn options_follow_config() {
        let mut config = Config::default();
        config.forecast_periods = 12;
        config.show_forecast_bounds = true;

        let options = PipelineOptions::from_config(&config, LoadMode::Sequential);
        assert_eq!(options.forecast_periods, 12);
        assert!(options.show_forecast_bounds);
        assert_eq!(options.mode.to_string(), "sequential");
    }
}
