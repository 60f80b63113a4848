pub mod analytics;
pub mod config;
pub mod logging;
pub mod report;
pub mod sampler;
pub mod sweep;
