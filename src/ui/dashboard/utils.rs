//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::pipeline::Pipeline;
use ratatui::prelude::Color;
use std::time::Duration;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Controller => Color::White,
        Source::Pipeline(Pipeline::Forecast) => Color::Cyan,
        Source::Pipeline(Pipeline::Weather) => Color::Yellow,
        Source::Pipeline(Pipeline::Holidays) => Color::Magenta,
    }
}

/// Spinner glyph for the given UI tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    let lower = msg.to_lowercase();
    if lower.contains("reqwest error") && lower.contains("connect") {
        return "Backend unreachable - is the forecast server running?".to_string();
    }
    if lower.contains("reqwest error") && lower.contains("timed out") {
        return "Request to backend timed out".to_string();
    }
    msg.to_string()
}
