//! Console reporter: plain-text batch summary, optionally colored.

use std::fmt::Write as _;

use dualmount_core::constants::DEFAULT_MIN_SCORE;

use super::Reporter;
use crate::report::{BatchReport, ComponentSummary};

pub struct ConsoleReporter {
    pub use_color: bool,
    /// Scores below this are highlighted.
    pub min_score: f64,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, min_score: f64) -> Self {
        Self {
            use_color,
            min_score,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn component_line(&self, summary: &ComponentSummary) -> String {
        match (&summary.error, summary.score) {
            (Some(error), _) => self.paint(
                "\x1b[31m",
                &format!(
                    "  x {} [{}] failed: {error}",
                    summary.component_name, summary.environment
                ),
            ),
            (None, Some(score)) => {
                let line = format!(
                    "  - {} [{}] score {score:.1}, {} conflict(s), {} missing role(s)",
                    summary.component_name,
                    summary.environment,
                    summary.conflict_count,
                    summary.missing_role_count
                );
                if score < self.min_score {
                    self.paint("\x1b[33m", &line)
                } else {
                    line
                }
            }
            (None, None) => format!("  - {} [{}]", summary.component_name, summary.environment),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true, DEFAULT_MIN_SCORE)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &BatchReport) -> Result<String, String> {
        let mut out = String::new();
        let w = |e: std::fmt::Error| e.to_string();

        writeln!(out, "Role Analysis Report ({})", report.generated_at.to_rfc3339()).map_err(w)?;
        writeln!(
            out,
            "Components: {} total, {} analyzed, {} failed, {} flagged",
            report.total_components,
            report.analyzed_components,
            report.failed_components,
            report.flagged_components
        )
        .map_err(w)?;
        writeln!(out, "Mean score: {:.1}", report.mean_score).map_err(w)?;
        writeln!(
            out,
            "Conflicts: {}  Missing roles: {}",
            report.total_conflicts, report.total_missing_roles
        )
        .map_err(w)?;
        writeln!(
            out,
            "Environments: legacy {}, nextgen {}",
            report.environment_breakdown.legacy, report.environment_breakdown.nextgen
        )
        .map_err(w)?;

        if !report.per_component_summaries.is_empty() {
            out.push('\n');
            for summary in &report.per_component_summaries {
                writeln!(out, "{}", self.component_line(summary)).map_err(w)?;
            }
        }

        Ok(out)
    }
}
