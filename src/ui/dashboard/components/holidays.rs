//! Dashboard holiday list component

use super::super::state::{DashboardState, PipelineStatus};
use crate::pipeline::Pipeline;
use crate::pipeline::surface::Container;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

/// Render the holiday list, one row per item.
pub fn render_holiday_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let container = Container::HolidayList;
    let items: Vec<ListItem> = match state.list(container) {
        Some(items) => items
            .iter()
            .map(|item| ListItem::new(Line::from(item.as_str())))
            .collect(),
        None => {
            let (text, color) = match state.status(Pipeline::Holidays) {
                PipelineStatus::Failed(msg) => (msg, Color::Red),
                PipelineStatus::Pending => ("Waiting...".to_string(), Color::DarkGray),
                _ => ("Loading...".to_string(), Color::LightBlue),
            };
            vec![ListItem::new(Line::from(text)).style(Style::default().fg(color))]
        }
    };

    let block = Block::default()
        .title(format!("HOLIDAYS [{}]", container))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White));
    f.render_widget(list, area);
}
