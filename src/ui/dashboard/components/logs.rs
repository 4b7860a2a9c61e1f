//! Activity log panel
//!
//! One row per displayable event, newest on top, tagged with the pipeline it came from

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_source_color};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

/// Width of the source column, long enough for "holidays".
const SOURCE_WIDTH: usize = 9;

fn message_style(event: &Event) -> Style {
    match (event.event_type, event.log_level) {
        (EventType::Error, LogLevel::Error) => Style::default().fg(Color::Red),
        (EventType::Error, _) => Style::default().fg(Color::Yellow),
        (EventType::Success, _) => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::White),
    }
}

fn log_row(event: &Event) -> ListItem<'static> {
    let marker = match event.event_type {
        EventType::Success => "✓",
        EventType::Error => "✗",
        EventType::Refresh | EventType::Render => "·",
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<width$}", event.source.to_string(), width = SOURCE_WIDTH),
            Style::default()
                .fg(get_source_color(&event.source))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", marker), message_style(event)),
        Span::styled(clean_http_error_message(&event.msg), message_style(event)),
    ]))
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Two border rows
    let visible = (area.height.saturating_sub(2) as usize).max(1);

    let mut rows: Vec<ListItem> = state
        .activity_logs
        .iter()
        .rev()
        .filter(|event| event.should_display())
        .take(visible)
        .map(log_row)
        .collect();
    if rows.is_empty() {
        rows.push(
            ListItem::new("Waiting for the first pipeline...")
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let block = Block::default()
        .title(format!("ACTIVITY LOG ({})", state.activity_logs.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(List::new(rows).block(block), area);
}
