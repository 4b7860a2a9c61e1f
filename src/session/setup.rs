//! Session setup and initialization

use crate::backend::{Backend, BackendClient};
use crate::backend::error::BackendError;
use crate::events::Event;
use crate::pipeline::{LoadMode, PipelineError, PipelineOptions};
use crate::runtime::start_dashboard;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Render commands and activity events from the controller
    pub event_receiver: mpsc::Receiver<Event>,
    /// Resolves to every pipeline failure once loading is over
    pub join_handle: JoinHandle<Vec<PipelineError>>,
    /// Cancels whatever is still in flight
    pub cancel: CancellationToken,
    pub base_url: String,
    pub mode: LoadMode,
}

/// Builds the backend client and starts loading the dashboard.
///
/// Fails only when the base URL does not parse or the client cannot be built; backend
/// errors surface later through the session's events.
pub fn setup_session(
    base_url: &str,
    options: PipelineOptions,
) -> Result<SessionData, BackendError> {
    url::Url::parse(base_url)?;
    let client = BackendClient::new(base_url)?;
    let cancel = CancellationToken::new();
    let mode = options.mode;
    let base_url = client.base_url();

    let (event_receiver, join_handle) = start_dashboard(Arc::new(client), options, cancel.clone());

    Ok(SessionData {
        event_receiver,
        join_handle,
        cancel,
        base_url,
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::unused_base_url;

    fn options() -> PipelineOptions {
        PipelineOptions {
            forecast_periods: 24,
            show_forecast_bounds: false,
            mode: LoadMode::Sequential,
        }
    }

    #[tokio::test]
    /// The session reports the URL its client actually talks to.
    async fn session_carries_client_base_url() {
        let base_url = unused_base_url().await;
        let session = setup_session(&base_url, options()).unwrap();

        assert_eq!(session.base_url, base_url);
        assert_eq!(session.mode, LoadMode::Sequential);

        session.cancel.cancel();
        let failures = session.join_handle.await.unwrap();
        assert_eq!(failures.len(), 1);
    }

    #[tokio::test]
    async fn unparseable_base_url_is_rejected_up_front() {
        assert!(matches!(
            setup_session("not a url", options()),
            Err(BackendError::InvalidUrl(_))
        ));
    }
}
