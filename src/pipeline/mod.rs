//! Fetch → normalize → render pipelines and their controller

pub mod chart;
pub mod controller;
pub mod common;
pub mod surface;
pub mod views;

pub use controller::DashboardController;
pub use common::{EventSender, LoadMode, PipelineOptions};

use crate::backend::error::BackendError;
use thiserror::Error;

/// The three data kinds the dashboard shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Pipeline {
    Forecast,
    Weather,
    Holidays,
}

impl Pipeline {
    /// Startup order.
    pub const ALL: [Pipeline; 3] = [Pipeline::Forecast, Pipeline::Weather, Pipeline::Holidays];
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{pipeline} pipeline failed: {source}")]
    Backend {
        pipeline: Pipeline,
        #[source]
        source: BackendError,
    },

    #[error("{0} pipeline cancelled")]
    Cancelled(Pipeline),
}

impl PipelineError {
    pub fn pipeline(&self) -> Pipeline {
        match self {
            PipelineError::Backend { pipeline, .. } | PipelineError::Cancelled(pipeline) => {
                *pipeline
            }
        }
    }
}
