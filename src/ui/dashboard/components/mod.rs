//! Dashboard component modules
//!
//! One module per panel

pub mod chart;
pub mod footer;
pub mod header;
pub mod holidays;
pub mod logs;
