//! Start and stop banners printed around a dashboard session

use crate::pipeline::{LoadMode, PipelineError};

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;91m"; // Bright Red
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    Info(String),
    Success(String),
    /// Some pipelines failed to load
    Warn(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    pub fn print(&self) {
        match self {
            Self::Info(msg) => println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
            Self::Warn(msg) => eprintln!("{}[WARN]{} {}", COLOR_WARN, COLOR_RESET, msg),
        }
    }
}

pub fn print_session_starting(ui: &str, base_url: &str, mode: LoadMode) {
    SessionMessage::info(format!(
        "Starting {} dashboard against {} ({} load)",
        ui, base_url, mode
    ))
    .print();
}

pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// "2 pipeline(s) failed to load: weather, holidays"
pub fn failure_summary(failures: &[PipelineError]) -> String {
    let names = failures
        .iter()
        .map(|failure| failure.pipeline().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} pipeline(s) failed to load: {}", failures.len(), names)
}

pub fn print_session_failures(failures: &[PipelineError]) {
    SessionMessage::warn(failure_summary(failures)).print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("Dashboard exited successfully").print();
}
