//! Structured diagnostics and terminal/JSON reporting.
//!
//! The engine never prints; it collects notices which the CLI renders here.

use colored::Colorize;
use serde::Serialize;

use crate::translate::Translation;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A structured diagnostic emitted while translating.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Notice {
    pub fn info(code: &str, message: String) -> Self {
        Self {
            severity: Severity::Info,
            code: code.to_string(),
            message,
        }
    }

    pub fn warning(code: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message,
        }
    }
}

/// Counts and notices for one translation run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub rules: usize,
    pub addresses: usize,
    pub address_groups: usize,
    pub services: usize,
    pub applications: usize,
    pub warnings: usize,
    pub notices: Vec<Notice>,
}

impl RunReport {
    pub fn from_translation(translation: &Translation) -> Self {
        let book = translation.addressbook.render();
        Self {
            rules: translation
                .rulesets
                .iter()
                .map(|set| set.rules.len())
                .sum(),
            addresses: book.addresses.len(),
            address_groups: book.groups.len(),
            services: translation.services.len(),
            applications: translation.applications.len(),
            warnings: translation
                .notices
                .iter()
                .filter(|n| n.severity == Severity::Warning)
                .count(),
            notices: translation.notices.clone(),
        }
    }
}

/// One-line key=value summary of a run.
pub fn render_summary(report: &RunReport) -> String {
    format!(
        "rules={} addresses={} address_groups={} services={} applications={} warnings={}",
        report.rules,
        report.addresses,
        report.address_groups,
        report.services,
        report.applications,
        report.warnings
    )
}

/// Render notices for terminal output, one per line.
pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let tag = match notice.severity {
                Severity::Info => "info".blue(),
                Severity::Warning => "warning".yellow(),
            };
            format!("{}: [{}] {}", tag, notice.code, notice.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
