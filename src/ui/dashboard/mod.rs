//! Dashboard screen built from container renders and pipeline events
//!
//! State is fed by pipeline events; components only read it

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
