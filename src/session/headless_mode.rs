//! Headless mode execution

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_failures, print_session_shutdown,
        print_session_starting,
    },
};
use std::error::Error;

/// Runs the dashboard without a terminal UI.
///
/// Every render command and activity line is printed to stdout until the
/// controller finishes or Ctrl+C cancels it. Any pipeline failure turns
/// into an error so the process exits non-zero.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.base_url, session.mode);

    let cancel = session.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    // The channel closes once the controller is done
    while let Some(event) = session.event_receiver.recv().await {
        if event.render.is_some() || event.should_display() {
            println!("{}", event);
        }
    }

    print_session_shutdown();
    let failures = session.join_handle.await?;
    if failures.is_empty() {
        print_session_exit_success();
        return Ok(());
    }

    print_session_failures(&failures);
    let summary = failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(summary.into())
}
