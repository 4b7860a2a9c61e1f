//! Dashboard main renderer

use super::components::{chart, footer, header, holidays, logs};
use super::state::DashboardState;
use crate::pipeline::Pipeline;
use crate::pipeline::surface::Container;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_chunks[0]);

    chart::render_chart_panel(
        f,
        chart_chunks[0],
        state,
        Container::ForecastChart,
        Pipeline::Forecast,
        "ELECTRICITY DEMAND FORECAST",
    );
    chart::render_chart_panel(
        f,
        chart_chunks[1],
        state,
        Container::WeatherChart,
        Pipeline::Weather,
        "WEATHER",
    );
    holidays::render_holiday_list(f, content_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::pipeline::LoadMode;
    use crate::pipeline::chart::{LineChart, Series};
    use crate::pipeline::surface::RenderCommand;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::PipelineStatus;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for row in buffer.content.chunks(width) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    /// A full frame draws the list items and panel titles.
    fn dashboard_draws_rendered_containers() {
        let mut state = DashboardState::new(
            Instant::now(),
            UIConfig::new(true, "http://127.0.0.1:8000".to_string(), LoadMode::Isolated),
        );
        state.add_event(Event::render(RenderCommand::List {
            container: Container::HolidayList,
            items: vec!["2024-07-04 → Independence Day (Weekend: false)".to_string()],
        }));
        state.add_event(Event::render(RenderCommand::Chart {
            container: Container::ForecastChart,
            chart: LineChart::new(vec!["a".into(), "b".into(), "c".into()]).with_series(
                Series::new("Electricity Demand (MW)", vec![Some(1.0), None, Some(3.0)], Color::Cyan),
            ),
        }));
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Independence Day"));
        assert!(text.contains("ELECTRICITY DEMAND FORECAST"));
        assert!(text.contains("HOLIDAYS"));
    }

    #[test]
    /// After a sequential halt nothing is loading, so no panel may say so.
    fn halted_pipelines_show_as_waiting() {
        let mut state = DashboardState::new(
            Instant::now(),
            UIConfig::new(false, "http://127.0.0.1:8000".to_string(), LoadMode::Sequential),
        );
        state.set_status(
            Pipeline::Forecast,
            PipelineStatus::Failed("Failed to load forecast".to_string()),
        );

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Failed to load forecast"));
        assert!(text.contains("Waiting..."));
        assert!(!text.contains("Loading..."));
    }
}
