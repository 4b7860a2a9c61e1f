//! Spawns the dashboard controller and wires it to the UI channel

use crate::backend::Backend;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::pipeline::{DashboardController, EventSender, PipelineError, PipelineOptions};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Start loading the dashboard in the background.
///
/// The returned receiver yields render commands and log lines until the
/// load finishes, at which point the channel closes. The join handle
/// resolves to every pipeline failure.
pub fn start_dashboard(
    backend: Arc<dyn Backend>,
    options: PipelineOptions,
    cancel: CancellationToken,
) -> (mpsc::Receiver<Event>, JoinHandle<Vec<PipelineError>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);

    let controller = DashboardController::new(backend, Arc::new(event_sender.clone()), options)
        .with_events(event_sender)
        .with_cancellation(cancel);

    let join_handle = tokio::spawn(async move { controller.run().await });
    (event_receiver, join_handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::backend::error::BackendError;
    use crate::pipeline::LoadMode;
    use crate::pipeline::surface::Container;

    #[tokio::test]
    /// The channel closes once loading is done, and failures come back through the handle.
    async fn channel_closes_when_loading_finishes() {
        let mut backend = MockBackend::new();
        backend.expect_fetch_forecast().returning(|_| Ok(vec![]));
        backend.expect_fetch_weather().returning(|| {
            Err(BackendError::Http {
                status: 404,
                message: "weather_holiday_2017.csv not found.".to_string(),
            })
        });
        backend.expect_fetch_holidays().returning(|| Ok(vec![]));

        let options = PipelineOptions {
            forecast_periods: 24,
            show_forecast_bounds: false,
            mode: LoadMode::Isolated,
        };
        let (mut receiver, handle) =
            start_dashboard(Arc::new(backend), options, CancellationToken::new());

        let mut rendered = Vec::new();
        while let Some(event) = receiver.recv().await {
            if let Some(command) = event.render {
                rendered.push(command.container());
            }
        }
        rendered.sort_by_key(|c| c.to_string());
        assert_eq!(
            rendered,
            vec![Container::ForecastChart, Container::HolidayList]
        );

        let failures = handle.await.unwrap();
        assert_eq!(failures.len(), 1);
    }
}
