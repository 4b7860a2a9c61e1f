//! Dashboard header component
//!
//! Renders the title, backend and per-pipeline load status

use super::super::state::{DashboardState, PipelineStatus};
use super::super::utils::{format_uptime, spinner_frame};
use crate::pipeline::Pipeline;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and pipeline status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title_text = format!(
        "DEMAND DASHBOARD v{} | {} | {} load | up {}",
        env!("CARGO_PKG_VERSION"),
        state.base_url,
        state.mode,
        format_uptime(state.start_time.elapsed())
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let mut spans = Vec::new();
    for pipeline in Pipeline::ALL {
        let (text, color) = match state.status(pipeline) {
            PipelineStatus::Pending => ("waiting".to_string(), Color::DarkGray),
            PipelineStatus::Loading => (
                format!("{} loading", spinner_frame(state.tick)),
                Color::LightBlue,
            ),
            PipelineStatus::Rendered => ("ready".to_string(), Color::Green),
            PipelineStatus::Failed(_) => ("failed".to_string(), Color::Red),
        };
        spans.push(Span::styled(
            format!("{}: ", pipeline),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(status, header_chunks[1]);
}
