//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::Event as DashboardEvent;
use crate::pipeline::LoadMode;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub base_url: String,
    pub mode: LoadMode,
}

impl UIConfig {
    pub fn new(with_background_color: bool, base_url: String, mode: LoadMode) -> Self {
        Self {
            with_background_color,
            base_url,
            mode,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Everything the dashboard screen shows.
    state: DashboardState,

    /// Receives render commands and log lines from the pipelines.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Cancels in-flight pipelines when the UI goes away.
    cancel: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<DashboardEvent>,
        cancel: CancellationToken,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: DashboardState::new(Instant::now(), ui_config),
            event_receiver,
            cancel,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Queue everything the pipelines sent since the last frame
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }

        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.cancel.cancel();
                    return Ok(());
                }
            }
        }
    }
}
