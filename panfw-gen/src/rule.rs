//! Translated security rules in device option form.

use serde::Serialize;

use crate::nets::NamedNetwork;
use crate::policy::{Action, LoggingMode};

/// Logging directives collapsed to the device's start/end switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogDecision {
    /// No logging elements are emitted.
    #[default]
    Unset,
    /// `disable` short-circuits every other directive.
    Disabled,
    StartAndEnd,
    EndOnly,
}

impl LogDecision {
    pub fn from_modes(modes: &[LoggingMode]) -> Self {
        let mut start = false;
        let mut end = false;
        for mode in modes {
            match mode {
                LoggingMode::Disable => return LogDecision::Disabled,
                LoggingMode::LogBoth => {
                    start = true;
                    end = true;
                }
                LoggingMode::True | LoggingMode::Syslog | LoggingMode::Local => end = true,
            }
        }
        if start {
            LogDecision::StartAndEnd
        } else if end {
            LogDecision::EndOnly
        } else {
            LogDecision::Unset
        }
    }
}

/// One rendered security rule.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub from_zone: String,
    pub to_zone: String,
    pub source: Vec<String>,
    pub destination: Vec<String>,
    pub service: Vec<String>,
    pub application: Vec<String>,
    pub action: Action,
    pub logging: LogDecision,
}

impl Rule {
    /// Whether the rule crosses zones (or names none at all).
    pub fn interzone(&self) -> bool {
        self.from_zone != self.to_zone
            || (self.from_zone.is_empty() && self.to_zone.is_empty())
    }
}

/// Rules generated from the terms under a single header, in term order.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    pub from_zone: String,
    pub to_zone: String,
    pub rules: Vec<Rule>,
}

/// Sorted unique parent tokens for one side of a term, or `any` when the
/// term names no addresses on that side.
pub fn member_tokens(addresses: &[NamedNetwork]) -> Vec<String> {
    if addresses.is_empty() {
        return vec!["any".to_string()];
    }
    let mut tokens: Vec<String> = addresses.iter().map(|a| a.token.clone()).collect();
    tokens.sort();
    tokens.dedup();
    tokens
}
