//! Reporters: output formats for batch reports.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use dualmount_core::constants::DEFAULT_MIN_SCORE;

use super::BatchReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &BatchReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    create_reporter_with_threshold(format, DEFAULT_MIN_SCORE)
}

/// Like `create_reporter`, flagging scores below `min_score`.
pub fn create_reporter_with_threshold(format: &str, min_score: f64) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(JsonReporter)),
        "console" => Some(Box::new(ConsoleReporter::new(true, min_score))),
        _ => None,
    }
}

pub fn available_formats() -> &'static [&'static str] {
    &["json", "console"]
}
