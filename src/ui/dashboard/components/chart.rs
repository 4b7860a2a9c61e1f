//! Dashboard line chart component
//!
//! Draws the chart bound to a container, or its load status when there is none

use super::super::state::{DashboardState, PipelineStatus};
use crate::pipeline::Pipeline;
use crate::pipeline::chart::LineChart;
use crate::pipeline::surface::Container;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition, Padding,
    Paragraph, Wrap,
};

/// Render the chart panel for `container`.
pub fn render_chart_panel(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    container: Container,
    pipeline: Pipeline,
    title: &str,
) {
    let block = Block::default()
        .title(format!("{} [{}]", title, container))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    match state.chart(container) {
        Some(chart) if !chart.is_empty() => render_line_chart(f, area, chart, block),
        Some(_) => render_placeholder(f, area, block, "No data returned", Color::Gray),
        None => {
            let (text, color) = match state.status(pipeline) {
                PipelineStatus::Failed(msg) => (msg, Color::Red),
                PipelineStatus::Pending => ("Waiting...".to_string(), Color::DarkGray),
                _ => ("Loading...".to_string(), Color::LightBlue),
            };
            render_placeholder(f, area, block, &text, color);
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, block: Block, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(block.padding(Padding::uniform(1)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_line_chart(f: &mut Frame, area: Rect, chart: &LineChart, block: Block) {
    // Datasets borrow their points, so every smoothed run is collected first
    let runs: Vec<(usize, Vec<Vec<(f64, f64)>>)> = chart
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| (index, series.smoothed_segments(chart.tension)))
        .collect();

    let mut datasets = Vec::new();
    for (index, segments) in &runs {
        let series = &chart.series[*index];
        for (segment_index, points) in segments.iter().enumerate() {
            let mut dataset = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(points);
            // Only the first run of a series shows up in the legend
            if segment_index == 0 {
                dataset = dataset.name(series.name.clone());
            }
            datasets.push(dataset);
        }
    }

    let [y_min, y_max] = chart.y_bounds();
    let y_labels: Vec<Line> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| Line::from(format!("{:.1}", v)))
        .collect();
    let x_labels: Vec<Line> = chart
        .axis_labels()
        .into_iter()
        .map(Line::from)
        .collect();

    let widget = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(chart.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels)
                .title(Line::from("value").style(Style::default().add_modifier(Modifier::DIM))),
        );
    f.render_widget(widget, area);
}
