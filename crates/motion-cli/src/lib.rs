//! CLI library components for the requested-analysis submitter.

pub mod logging;
pub mod pipeline;
