//! Event System
//!
//! Types and implementations for pipeline events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::pipeline::Pipeline;
use crate::pipeline::surface::RenderCommand;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The controller sequencing the pipelines.
    Controller,
    /// One fetch-normalize-render pipeline.
    Pipeline(Pipeline),
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Controller => write!(f, "dashboard"),
            Source::Pipeline(pipeline) => write!(f, "{}", pipeline),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Render,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Payload of render events
    pub render: Option<RenderCommand>,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            render: None,
        }
    }

    pub fn render(command: RenderCommand) -> Self {
        Self {
            render: Some(command),
            ..Self::new(
                Source::Controller,
                String::new(),
                EventType::Render,
                LogLevel::Info,
            )
        }
    }

    pub fn pipeline_with_level(
        pipeline: Pipeline,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::Pipeline(pipeline), msg, event_type, log_level)
    }

    pub fn controller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controller, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Render events update containers, they are not log lines
        if self.event_type == EventType::Render {
            return false;
        }
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.render {
            Some(command) => write!(f, "{}", command),
            None => write!(
                f,
                "{} [{}] {}: {}",
                self.event_type, self.timestamp, self.source, self.msg
            ),
        }
    }
}
