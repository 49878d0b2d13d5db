//! Vendor-neutral firewall policy to Palo Alto PAN-OS XML configuration.
//!
//! A policy document is an ordered sequence of terms under headers that name
//! a zone pair and an address-family mode. This library walks those terms,
//! resolves which IP families apply to each, deduplicates and names the
//! referenced address objects, synthesizes service and custom application
//! definitions, and assembles the nested XML document the device expects.
//!
//! # Architecture
//!
//! ## Input
//!
//! - [`policy`] — policy document model and JSON/TOML loading; keyword
//!   fields are closed enumerations
//! - [`nets`] — concrete network objects with their symbolic tokens,
//!   supernet tests, CIDR exclusion subtraction
//! - [`icmp`] — symbolic ICMP type name tables per IP version
//!
//! ## Translation
//!
//! - [`flow`] — per-term address-family resolution and mode gating
//! - [`addressbook`] — per-zone named object catalog with dedup rules
//! - [`service`] — run-scoped (port list, protocol) → service name registry
//! - [`application`] — custom ICMP application catalog
//! - [`rule`] — translated rules in device option form
//! - [`translate`] — the per-term pipeline tying it all together
//!
//! ## Output
//!
//! - [`document`] — assembly into the `config/devices/vsys` tree
//! - [`report`] — structured notices and run summaries
//! - [`inspect`] — tag-tree visualization of generated documents
//!
//! # Workflow
//!
//! ```ignore
//! use panfw_gen::document::build_document;
//! use panfw_gen::policy::load_policy;
//! use panfw_gen::translate::{translate, TranslateOptions};
//!
//! let policy = load_policy("policy.json".as_ref())?;
//! let translation = translate(&policy, TranslateOptions::default())?;
//! let document = build_document(&translation);
//! let xml = xml_build_core::write(&document)?;
//! ```
//!
//! Recoverable per-term conditions (stateless-reply terms, established
//! options, expirations, address-family mismatches) become notices and the
//! term is excluded; configuration defects (duplicate names, unknown ICMP
//! types, unsupported protocols, over-long names) abort the run as typed
//! errors.
//!
//! # Built on xml-build-core
//!
//! Document construction and serialization use `xml-build-core`; everything
//! firewall-specific lives in this crate.

pub mod addressbook;
pub mod application;
pub mod document;
pub mod flow;
pub mod icmp;
pub mod inspect;
pub mod nets;
pub mod policy;
pub mod report;
pub mod rule;
pub mod service;
pub mod translate;
