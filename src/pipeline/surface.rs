//! The rendering capability the pipelines draw through.

use super::chart::LineChart;
use std::fmt::Display;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Fixed display containers of the dashboard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Container {
    #[strum(serialize = "forecastChart")]
    ForecastChart,
    #[strum(serialize = "weatherChart")]
    WeatherChart,
    #[strum(serialize = "holidayList")]
    HolidayList,
}

/// A chart or list destined for one container.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Chart {
        container: Container,
        chart: LineChart,
    },
    List {
        container: Container,
        items: Vec<String>,
    },
}

impl RenderCommand {
    pub fn container(&self) -> Container {
        match self {
            RenderCommand::Chart { container, .. } | RenderCommand::List { container, .. } => {
                *container
            }
        }
    }
}

impl Display for RenderCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderCommand::Chart { container, chart } => {
                write!(f, "[{}] {} label(s)", container, chart.labels.len())?;
                for series in &chart.series {
                    match series.range() {
                        Some((lo, hi)) => {
                            write!(f, " | {}: min {} max {}", series.name, lo, hi)?
                        }
                        None => write!(f, " | {}: no data", series.name)?,
                    }
                }
                Ok(())
            }
            RenderCommand::List { container, items } => {
                if items.is_empty() {
                    return write!(f, "[{}] (empty)", container);
                }
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("[{}] {}", container, item))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
        }
    }
}

/// Draws into the dashboard's containers.
///
/// Rendering a container replaces whatever it showed before.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Surface: Send + Sync {
    /// Bind `chart` to `container`.
    async fn render_chart(&self, container: Container, chart: LineChart);

    /// Show `items` in `container`, in order.
    async fn render_list(&self, container: Container, items: Vec<String>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::chart::Series;
    use ratatui::style::Color;

    #[test]
    fn container_ids_match_the_dashboard_layout() {
        assert_eq!(Container::ForecastChart.to_string(), "forecastChart");
        assert_eq!(Container::WeatherChart.to_string(), "weatherChart");
        assert_eq!(Container::HolidayList.to_string(), "holidayList");
    }

    #[test]
    fn list_command_prints_one_line_per_item() {
        let command = RenderCommand::List {
            container: Container::HolidayList,
            items: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(command.to_string(), "[holidayList] a\n[holidayList] b");
        assert_eq!(command.container(), Container::HolidayList);
    }

    #[test]
    fn chart_command_summarises_series() {
        let chart = LineChart::new(vec!["2024-01-01T00:00".to_string()]).with_series(
            Series::new("Electricity Demand (MW)", vec![Some(120.5)], Color::Cyan),
        );
        let command = RenderCommand::Chart {
            container: Container::ForecastChart,
            chart,
        };
        assert_eq!(
            command.to_string(),
            "[forecastChart] 1 label(s) | Electricity Demand (MW): min 120.5 max 120.5"
        );
    }
}
