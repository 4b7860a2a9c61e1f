//! TUI mode execution

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_failures, print_session_shutdown,
        print_session_starting,
    },
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the dashboard in the terminal UI until the user quits.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.base_url, session.mode);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, session.base_url.clone(), session.mode);
    let app = ui::App::new(session.event_receiver, session.cancel.clone(), ui_config);

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    // Failures were already shown on screen; only a summary is repeated here
    print_session_shutdown();
    session.cancel.cancel();
    let failures = session.join_handle.await?;
    if !failures.is_empty() {
        print_session_failures(&failures);
    }
    print_session_exit_success();

    Ok(())
}
