//! Dashboard state management
//!
//! Holds what each container currently shows plus the activity log

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as DashboardEvent;
use crate::pipeline::chart::LineChart;
use crate::pipeline::surface::{Container, RenderCommand};
use crate::pipeline::{LoadMode, Pipeline};
use crate::ui::app::UIConfig;

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Load status of one pipeline, as reported by its events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStatus {
    Pending,
    Loading,
    Rendered,
    Failed(String),
}

/// Dashboard state with the current render output of every container.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend the data comes from.
    pub base_url: String,
    /// How the pipelines were started.
    pub mode: LoadMode,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<DashboardEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    charts: HashMap<Container, LineChart>,
    lists: HashMap<Container, Vec<String>>,
    statuses: HashMap<Pipeline, PipelineStatus>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            base_url: ui_config.base_url,
            mode: ui_config.mode,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            charts: HashMap::new(),
            lists: HashMap::new(),
            statuses: HashMap::new(),
        }
    }

    pub fn chart(&self, container: Container) -> Option<&LineChart> {
        self.charts.get(&container)
    }

    pub fn list(&self, container: Container) -> Option<&[String]> {
        self.lists.get(&container).map(Vec::as_slice)
    }

    pub fn status(&self, pipeline: Pipeline) -> PipelineStatus {
        self.statuses
            .get(&pipeline)
            .cloned()
            .unwrap_or(PipelineStatus::Pending)
    }

    pub fn set_status(&mut self, pipeline: Pipeline, status: PipelineStatus) {
        self.statuses.insert(pipeline, status);
    }

    /// Bind the command's output to its container, dropping what was there.
    pub fn apply_render(&mut self, command: RenderCommand) {
        let container = command.container();
        match command {
            RenderCommand::Chart { chart, .. } => {
                self.charts.insert(container, chart);
            }
            RenderCommand::List { items, .. } => {
                self.lists.insert(container, items);
            }
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: DashboardEvent) {
        self.pending_events.push_back(event);
    }
}
