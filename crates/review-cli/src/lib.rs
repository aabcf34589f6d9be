//! CLI library components for the review insights tool.

pub mod logging;
pub mod pipeline;
