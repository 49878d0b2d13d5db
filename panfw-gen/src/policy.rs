//! Policy document model and loading.
//!
//! The policy arrives already parsed and resolved: network objects are
//! concrete CIDRs tagged with their symbolic group token, ports are concrete
//! ranges, and keyword-valued fields (action, option, logging, filter type)
//! are closed enumerations so that an unmapped keyword is impossible past
//! load time.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nets::NamedNetwork;

/// An inclusive destination or source port range; `low == high` for a single
/// port.
pub type PortRange = (u16, u16);

/// A full policy document: an ordered list of filters.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    pub filters: Vec<Filter>,
}

/// One header plus the terms declared under it.
#[derive(Debug, Clone, Deserialize)]
pub struct Filter {
    pub header: Header,
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// Filter header naming the zone pair and the address-family mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Header {
    /// Target platform tag; headers for other platforms are skipped.
    #[serde(default)]
    pub platform: Option<String>,
    pub from_zone: String,
    pub to_zone: String,
    #[serde(default)]
    pub filter_type: FilterType,
}

impl Header {
    /// `from>to` label used in diagnostics.
    pub fn zones_label(&self) -> String {
        format!("{}>{}", self.from_zone, self.to_zone)
    }
}

/// Address-family mode of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Inet,
    Inet6,
    Mixed,
}

/// One policy term.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Term {
    pub name: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub source_address: Vec<NamedNetwork>,
    #[serde(default)]
    pub source_address_exclude: Vec<NamedNetwork>,
    #[serde(default)]
    pub destination_address: Vec<NamedNetwork>,
    #[serde(default)]
    pub destination_address_exclude: Vec<NamedNetwork>,
    /// Protocol names; validated against the supported set during
    /// translation.
    #[serde(default)]
    pub protocol: Vec<String>,
    /// Accepted for contract compatibility; not used in rule output.
    #[serde(default)]
    pub source_port: Vec<PortRange>,
    #[serde(default)]
    pub destination_port: Vec<PortRange>,
    /// Built-in application names attached verbatim to the rule.
    #[serde(default)]
    pub pan_application: Vec<String>,
    /// Symbolic ICMP type names; require an icmp/icmpv6 protocol.
    #[serde(default)]
    pub icmp_type: Vec<String>,
    pub action: Action,
    #[serde(default)]
    pub option: Vec<TermOption>,
    #[serde(default)]
    pub logging: Vec<LoggingMode>,
    #[serde(default)]
    pub expiration: Option<NaiveDate>,
    #[serde(default)]
    pub stateless_reply: bool,
}

/// Term action keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Accept,
    Deny,
    Reject,
    RejectWithTcpRst,
}

impl Action {
    /// The device action vocabulary.
    pub fn rendered(self) -> &'static str {
        match self {
            Action::Accept => "allow",
            Action::Deny => "deny",
            Action::Reject | Action::RejectWithTcpRst => "reset-client",
        }
    }
}

/// Supported term options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermOption {
    Established,
    TcpEstablished,
}

/// Term logging directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingMode {
    True,
    Syslog,
    Local,
    LogBoth,
    Disable,
}

/// Errors returned when loading policy documents.
#[derive(Debug, Error)]
pub enum PolicyLoadError {
    #[error("failed to read policy file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse policy file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to parse policy file {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("policy file {path} must have a .json or .toml extension")]
    UnknownFormat { path: String },
}

/// Load a policy document from a JSON or TOML file, selected by extension.
pub fn load_policy(path: &Path) -> Result<PolicyFile, PolicyLoadError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| PolicyLoadError::Io {
        path: display.clone(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&raw).map_err(|source| PolicyLoadError::Json {
            path: display,
            source,
        }),
        Some("toml") => toml::from_str(&raw).map_err(|source| PolicyLoadError::Toml {
            path: display,
            source,
        }),
        _ => Err(PolicyLoadError::UnknownFormat { path: display }),
    }
}
