//! Catalog of generated custom application entries.
//!
//! Type-specific ICMP matching has no built-in application on the device, so
//! each referenced ICMP type becomes a custom entry with a fixed
//! classification and a per-family matcher keyword and risk score.

use serde::Serialize;

/// ICMP family a custom application matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcmpFamily {
    V4,
    V6,
}

impl IcmpFamily {
    /// Protocol name a term uses to select this family.
    pub fn protocol_name(self) -> &'static str {
        match self {
            IcmpFamily::V4 => "icmp",
            IcmpFamily::V6 => "icmpv6",
        }
    }

    /// Built-in application attached when a term names no explicit types.
    pub fn generic_application(self) -> &'static str {
        match self {
            IcmpFamily::V4 => "icmp",
            IcmpFamily::V6 => "ipv6-icmp",
        }
    }

    /// Matcher keyword in the entry's `default` section.
    pub fn matcher_keyword(self) -> &'static str {
        match self {
            IcmpFamily::V4 => "ident-by-icmp-type",
            IcmpFamily::V6 => "ident-by-icmp6-type",
        }
    }

    /// Default device risk score for the family.
    pub fn risk(self) -> u8 {
        match self {
            IcmpFamily::V4 => 4,
            IcmpFamily::V6 => 2,
        }
    }

    pub fn version(self) -> u8 {
        match self {
            IcmpFamily::V4 => 4,
            IcmpFamily::V6 => 6,
        }
    }

    fn name_prefix(self) -> &'static str {
        match self {
            IcmpFamily::V4 => "icmp",
            IcmpFamily::V6 => "icmp6",
        }
    }
}

/// One generated custom application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationEntry {
    pub name: String,
    pub matcher: &'static str,
    pub type_code: u8,
    pub risk: u8,
}

/// Catalog of custom applications, deduplicated by name, in generation
/// order.
#[derive(Debug, Default)]
pub struct ApplicationCatalog {
    entries: Vec<ApplicationEntry>,
}

impl ApplicationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or reuse) the entry for one ICMP type and return its name.
    pub fn register_icmp_type(
        &mut self,
        family: IcmpFamily,
        type_name: &str,
        type_code: u8,
    ) -> String {
        let name = format!("{}-{}", family.name_prefix(), type_name);
        if !self.entries.iter().any(|entry| entry.name == name) {
            self.entries.push(ApplicationEntry {
                name: name.clone(),
                matcher: family.matcher_keyword(),
                type_code,
                risk: family.risk(),
            });
        }
        name
    }

    /// Entries in generation order.
    pub fn entries(&self) -> &[ApplicationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
