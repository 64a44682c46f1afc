//! JSON reporter: pretty-printed, camelCase fields.

use super::Reporter;
use crate::report::BatchReport;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &BatchReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| format!("JSON serialization failed: {e}"))
    }
}
