//! Dashboard state update logic
//!
//! Applies queued events to the dashboard state

use super::state::{DashboardState, PipelineStatus};
use crate::events::{Event as DashboardEvent, EventType, Source};

impl DashboardState {
    /// Advance the animation tick and drain the event queue.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    fn process_event(&mut self, mut event: DashboardEvent) {
        if let Some(command) = event.render.take() {
            self.apply_render(command);
            return;
        }

        if let Source::Pipeline(pipeline) = event.source {
            match event.event_type {
                EventType::Refresh => self.set_status(pipeline, PipelineStatus::Loading),
                EventType::Success => self.set_status(pipeline, PipelineStatus::Rendered),
                EventType::Error => {
                    self.set_status(pipeline, PipelineStatus::Failed(event.msg.clone()))
                }
                EventType::Render => {}
            }
        }

        self.add_to_activity_log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::pipeline::chart::{LineChart, Series};
    use crate::pipeline::surface::{Container, RenderCommand};
    use crate::pipeline::{LoadMode, Pipeline};
    use crate::ui::app::UIConfig;
    use ratatui::style::Color;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(
            Instant::now(),
            UIConfig::new(
                false,
                "http://127.0.0.1:8000".to_string(),
                LoadMode::Isolated,
            ),
        )
    }

    fn list(items: &[&str]) -> DashboardEvent {
        DashboardEvent::render(RenderCommand::List {
            container: Container::HolidayList,
            items: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn chart(value: f64) -> DashboardEvent {
        DashboardEvent::render(RenderCommand::Chart {
            container: Container::ForecastChart,
            chart: LineChart::new(vec!["t0".to_string()]).with_series(Series::new(
                "demand",
                vec![Some(value)],
                Color::Cyan,
            )),
        })
    }

    #[test]
    /// Re-rendering the list leaves nothing from the previous render.
    fn list_rerender_clears_previous_items() {
        let mut state = state();
        state.add_event(list(&["old one", "old two", "old three"]));
        state.update();
        state.add_event(list(&["new one"]));
        state.update();

        assert_eq!(
            state.list(Container::HolidayList),
            Some(&["new one".to_string()][..])
        );
    }

    #[test]
    /// A second chart for the same container replaces the first.
    fn chart_rerender_replaces_previous_chart() {
        let mut state = state();
        state.add_event(chart(1.0));
        state.add_event(chart(2.0));
        state.update();

        let shown = state.chart(Container::ForecastChart).unwrap();
        assert_eq!(shown.series.len(), 1);
        assert_eq!(shown.series[0].values, vec![Some(2.0)]);
        assert!(state.chart(Container::WeatherChart).is_none());
    }

    #[test]
    fn pipeline_events_drive_status_and_log() {
        let mut state = state();
        assert_eq!(state.status(Pipeline::Weather), PipelineStatus::Pending);

        state.add_event(DashboardEvent::pipeline_with_level(
            Pipeline::Weather,
            "Fetching weather data...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
        state.update();
        assert_eq!(state.status(Pipeline::Weather), PipelineStatus::Loading);

        state.add_event(DashboardEvent::pipeline_with_level(
            Pipeline::Weather,
            "Failed to load weather".to_string(),
            EventType::Error,
            LogLevel::Error,
        ));
        state.update();
        assert_eq!(
            state.status(Pipeline::Weather),
            PipelineStatus::Failed("Failed to load weather".to_string())
        );
        assert_eq!(state.activity_logs.len(), 2);
    }

    #[test]
    fn render_events_stay_out_of_the_activity_log() {
        let mut state = state();
        state.add_event(chart(3.0));
        state.update();
        assert!(state.activity_logs.is_empty());
    }
}
