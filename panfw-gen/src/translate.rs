//! The translation pass: policy terms to device rules.
//!
//! A [`Translator`] owns the address book, service registry and application
//! catalog for a whole run; feeding it several policy documents shares the
//! registries across all of them. Per-term processing is a short pipeline of
//! checks ending in a rendered [`Rule`] or a recorded notice.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::addressbook::AddressBook;
use crate::application::{ApplicationCatalog, IcmpFamily};
use crate::flow::{self, FamilyDecision, FamilyDropReason, Flow};
use crate::icmp;
use crate::nets::exclude_networks;
use crate::policy::{FilterType, Header, PolicyFile, Term, TermOption};
use crate::report::Notice;
use crate::rule::{member_tokens, LogDecision, Rule, RuleSet};
use crate::service::{ServiceError, ServiceRegistry};

/// Protocol names the device understands.
pub const SUPPORTED_PROTOCOLS: [&str; 6] = ["tcp", "udp", "icmp", "icmpv6", "sctp", "igmp"];

/// Longest rule name the device accepts.
pub const MAX_TERM_NAME_LENGTH: usize = 31;

/// Platform tag this generator serves.
pub const PLATFORM: &str = "paloalto";

/// Fatal translation failures; the run aborts with no partial output.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("filter {zones}: from-zone and to-zone must both be named")]
    EmptyZone { zones: String },
    #[error("you have a duplicate term in {zones}: {term}")]
    DuplicateTerm { zones: String, term: String },
    #[error("term name must be 31 characters max: {term}")]
    TermNameTooLong { term: String },
    #[error("term {term}: protocol {protocol} is not supported")]
    UnsupportedProtocol { term: String, protocol: String },
    #[error("term {term} uses icmp-type without icmp or icmpv6 protocol")]
    IcmpTypeWithoutProtocol { term: String },
    #[error("term with bad icmp type: {term}, icmp-type: {icmp_type}")]
    BadIcmpType { term: String, icmp_type: String },
    #[error("term {term}: {source}")]
    Service {
        term: String,
        source: ServiceError,
    },
}

/// Options controlling one translation run.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Terms expiring within this many weeks produce an informational
    /// notice.
    pub expiration_weeks: i64,
    /// Reference date for expiration checks; today when unset.
    pub today: Option<NaiveDate>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            expiration_weeks: 2,
            today: None,
        }
    }
}

/// The completed output of a translation run.
#[derive(Debug)]
pub struct Translation {
    pub rulesets: Vec<RuleSet>,
    pub addressbook: AddressBook,
    pub services: ServiceRegistry,
    pub applications: ApplicationCatalog,
    pub notices: Vec<Notice>,
}

/// Accumulates rulesets plus the shared registries across every policy fed
/// to one run.
#[derive(Debug)]
pub struct Translator {
    options: TranslateOptions,
    addressbook: AddressBook,
    services: ServiceRegistry,
    applications: ApplicationCatalog,
    rulesets: Vec<RuleSet>,
    notices: Vec<Notice>,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            options,
            addressbook: AddressBook::new(),
            services: ServiceRegistry::new(),
            applications: ApplicationCatalog::new(),
            rulesets: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Translate every filter in a policy document into this run.
    pub fn add(&mut self, policy: &PolicyFile) -> Result<(), TranslateError> {
        for filter in &policy.filters {
            self.add_filter(&filter.header, &filter.terms)?;
        }
        Ok(())
    }

    /// Consume the run and return the accumulated collections.
    pub fn finish(self) -> Translation {
        Translation {
            rulesets: self.rulesets,
            addressbook: self.addressbook,
            services: self.services,
            applications: self.applications,
            notices: self.notices,
        }
    }

    fn add_filter(&mut self, header: &Header, terms: &[Term]) -> Result<(), TranslateError> {
        if let Some(platform) = &header.platform {
            if platform != PLATFORM {
                self.notices.push(Notice::info(
                    "skipped_platform",
                    format!(
                        "filter {} targets platform {} and will not be rendered",
                        header.zones_label(),
                        platform
                    ),
                ));
                return Ok(());
            }
        }
        if header.from_zone.is_empty() || header.to_zone.is_empty() {
            return Err(TranslateError::EmptyZone {
                zones: header.zones_label(),
            });
        }

        let today = self
            .options
            .today
            .unwrap_or_else(|| Utc::now().date_naive());
        let expiring_cutoff = today + Duration::weeks(self.options.expiration_weeks);

        let mut seen_names = BTreeSet::new();
        let mut rules = Vec::new();
        for term in terms {
            if let Some(rule) =
                self.translate_term(header, term, today, expiring_cutoff, &mut seen_names)?
            {
                rules.push(rule);
            }
        }

        self.rulesets.push(RuleSet {
            from_zone: header.from_zone.clone(),
            to_zone: header.to_zone.clone(),
            rules,
        });
        Ok(())
    }

    fn translate_term(
        &mut self,
        header: &Header,
        term: &Term,
        today: NaiveDate,
        expiring_cutoff: NaiveDate,
        seen_names: &mut BTreeSet<String>,
    ) -> Result<Option<Rule>, TranslateError> {
        let zones = header.zones_label();

        if term.stateless_reply {
            self.warn_term(
                "stateless_reply_term",
                &term.name,
                &zones,
                "is a stateless reply term and will not be rendered",
            );
            return Ok(None);
        }
        if term.option.contains(&TermOption::Established) {
            self.warn_term(
                "established_term",
                &term.name,
                &zones,
                "is an established term and will not be rendered",
            );
            return Ok(None);
        }
        if term.option.contains(&TermOption::TcpEstablished) {
            self.warn_term(
                "tcp_established_term",
                &term.name,
                &zones,
                "is a tcp-established term and will not be rendered",
            );
            return Ok(None);
        }

        if term.name.len() > MAX_TERM_NAME_LENGTH {
            return Err(TranslateError::TermNameTooLong {
                term: term.name.clone(),
            });
        }
        if !seen_names.insert(term.name.clone()) {
            return Err(TranslateError::DuplicateTerm {
                zones,
                term: term.name.clone(),
            });
        }

        if let Some(expiration) = term.expiration {
            if expiration <= expiring_cutoff {
                self.notices.push(Notice::info(
                    "expiring_term",
                    format!(
                        "term {} in policy {} expires in less than {} weeks",
                        term.name, zones, self.options.expiration_weeks
                    ),
                ));
            }
            if expiration <= today {
                self.warn_term(
                    "expired_term",
                    &term.name,
                    &zones,
                    "is expired and will not be rendered",
                );
                return Ok(None);
            }
        }

        let source = exclude_networks(
            term.source_address.clone(),
            &term.source_address_exclude,
        );
        let destination = exclude_networks(
            term.destination_address.clone(),
            &term.destination_address_exclude,
        );

        let flows = flow::term_flows(&source, &destination);
        let excluded_families =
            match flow::gate(header.filter_type, &flows, &term.protocol) {
                FamilyDecision::Keep(exclude) => exclude,
                FamilyDecision::KeepPartial { exclude } => {
                    self.warn_term(
                        "address_family_mismatch",
                        &term.name,
                        &zones,
                        &format!(
                            "has invalid src-dest combinations {}, the term will be rendered without them",
                            flow::render_flows(&flows)
                        ),
                    );
                    exclude
                }
                FamilyDecision::Drop(reason) => {
                    self.warn_family_drop(reason, &term.name, &zones, &flows);
                    return Ok(None);
                }
            };

        for addr in &source {
            if excluded_families.contains(&addr.version()) {
                continue;
            }
            self.addressbook.register(&header.from_zone, addr);
        }
        for addr in &destination {
            if excluded_families.contains(&addr.version()) {
                continue;
            }
            self.addressbook.register(&header.to_zone, addr);
        }

        let mut applications = term.pan_application.clone();
        self.attach_icmp_applications(header, term, &flows, &mut applications)?;

        for protocol in &term.protocol {
            if !SUPPORTED_PROTOCOLS.contains(&protocol.as_str()) {
                return Err(TranslateError::UnsupportedProtocol {
                    term: term.name.clone(),
                    protocol: protocol.clone(),
                });
            }
        }

        let mut services = Vec::new();
        if !term.destination_port.is_empty() {
            for protocol in &term.protocol {
                let name = self
                    .services
                    .get_or_create(&term.destination_port, protocol, &term.name)
                    .map_err(|source| TranslateError::Service {
                        term: term.name.clone(),
                        source,
                    })?;
                services.push(name);
            }
        }

        for protocol in &term.protocol {
            match protocol.as_str() {
                "icmp" | "icmpv6" => {}
                "igmp" | "sctp" => push_unique(&mut applications, protocol),
                "tcp" | "udp" => push_unique(&mut applications, "any"),
                _ => {}
            }
        }

        Ok(Some(Rule {
            name: term.name.clone(),
            description: term.comment.join(" "),
            from_zone: header.from_zone.clone(),
            to_zone: header.to_zone.clone(),
            source: member_tokens(&source),
            destination: member_tokens(&destination),
            service: services,
            application: applications,
            action: term.action,
            logging: LogDecision::from_modes(&term.logging),
        }))
    }

    /// ICMP handling: generic tokens for type-less terms, custom catalog
    /// entries per referenced type.
    fn attach_icmp_applications(
        &mut self,
        header: &Header,
        term: &Term,
        flows: &[Flow],
        applications: &mut Vec<String>,
    ) -> Result<(), TranslateError> {
        let has_icmp_protocol = term
            .protocol
            .iter()
            .any(|p| p == "icmp" || p == "icmpv6");
        if !term.icmp_type.is_empty() && !has_icmp_protocol {
            return Err(TranslateError::IcmpTypeWithoutProtocol {
                term: term.name.clone(),
            });
        }

        for family in [IcmpFamily::V4, IcmpFamily::V6] {
            if !term
                .protocol
                .iter()
                .any(|p| p == family.protocol_name())
            {
                continue;
            }
            let dual = match family {
                IcmpFamily::V4 => Flow::Ip4ToIp4,
                IcmpFamily::V6 => Flow::Ip6ToIp6,
            };
            if !flows.contains(&dual) {
                continue;
            }
            let excluded_mode = match family {
                IcmpFamily::V4 => FilterType::Inet6,
                IcmpFamily::V6 => FilterType::Inet,
            };
            if header.filter_type == excluded_mode {
                continue;
            }

            if term.icmp_type.is_empty() {
                push_unique(applications, family.generic_application());
                continue;
            }

            for type_name in &term.icmp_type {
                let code = icmp::type_code(family.version(), type_name).ok_or_else(|| {
                    TranslateError::BadIcmpType {
                        term: term.name.clone(),
                        icmp_type: type_name.clone(),
                    }
                })?;
                let app_name = self
                    .applications
                    .register_icmp_type(family, type_name, code);
                push_unique(applications, &app_name);
            }
        }
        Ok(())
    }

    fn warn_term(&mut self, code: &str, term: &str, zones: &str, what: &str) {
        self.notices.push(Notice::warning(
            code,
            format!("term {} in policy {} {}", term, zones, what),
        ));
    }

    fn warn_family_drop(
        &mut self,
        reason: FamilyDropReason,
        term: &str,
        zones: &str,
        flows: &[Flow],
    ) {
        let (code, what) = match reason {
            FamilyDropReason::Icmp6InInetFilter => (
                "icmpv6_in_inet_filter",
                "references ICMPv6 protocol, term will not be rendered".to_string(),
            ),
            FamilyDropReason::IcmpInInet6Filter => (
                "icmp_in_inet6_filter",
                "references ICMP protocol, term will not be rendered".to_string(),
            ),
            FamilyDropReason::MissingDualFlow => (
                "address_family_mismatch",
                format!(
                    "has one or more invalid src-dest combinations {}, term will not be rendered",
                    flow::render_flows(flows)
                ),
            ),
            FamilyDropReason::DisjointFamilies => (
                "disjoint_address_families",
                format!(
                    "has source and destinations of different address families {}, term will not be rendered",
                    flow::render_flows(flows)
                ),
            ),
        };
        self.warn_term(code, term, zones, &what);
    }
}

/// Translate a single policy document with a fresh run state.
pub fn translate(
    policy: &PolicyFile,
    options: TranslateOptions,
) -> Result<Translation, TranslateError> {
    let mut translator = Translator::new(options);
    translator.add(policy)?;
    Ok(translator.finish())
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::policy::{Action, FilterType, Header, PolicyFile, Term, TermOption};
    use crate::report::Severity;
    use crate::rule::LogDecision;

    use super::{translate, TranslateError, TranslateOptions, Translator};

    fn header(filter_type: FilterType) -> Header {
        Header {
            platform: None,
            from_zone: "trust".to_string(),
            to_zone: "untrust".to_string(),
            filter_type,
        }
    }

    fn term(name: &str) -> Term {
        Term {
            name: name.to_string(),
            comment: Vec::new(),
            source_address: Vec::new(),
            source_address_exclude: Vec::new(),
            destination_address: Vec::new(),
            destination_address_exclude: Vec::new(),
            protocol: Vec::new(),
            source_port: Vec::new(),
            destination_port: Vec::new(),
            pan_application: Vec::new(),
            icmp_type: Vec::new(),
            action: Action::Accept,
            option: Vec::new(),
            logging: Vec::new(),
            expiration: None,
            stateless_reply: false,
        }
    }

    fn policy(filter_type: FilterType, terms: Vec<Term>) -> PolicyFile {
        PolicyFile {
            filters: vec![crate::policy::Filter {
                header: header(filter_type),
                terms,
            }],
        }
    }

    fn named(net: &str, token: &str) -> crate::nets::NamedNetwork {
        crate::nets::NamedNetwork {
            net: net.parse().expect("test network"),
            token: token.to_string(),
        }
    }

    #[test]
    fn tcp_term_with_ports_gets_service_and_any_application() {
        let mut t = term("allow-smtp");
        t.protocol = vec!["tcp".to_string()];
        t.destination_port = vec![(25, 25)];
        t.destination_address = vec![named("10.0.0.0/8", "MAIL")];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");

        let rule = &translation.rulesets[0].rules[0];
        assert_eq!(rule.service, vec!["service-allow-smtp-tcp"]);
        assert_eq!(rule.application, vec!["any"]);
        assert_eq!(rule.destination, vec!["MAIL"]);
        assert_eq!(rule.source, vec!["any"]);
        assert_eq!(rule.logging, LogDecision::Unset);
    }

    #[test]
    fn stateless_reply_and_established_terms_are_dropped_with_warnings() {
        let mut stateless = term("stateless");
        stateless.stateless_reply = true;
        let mut established = term("established-term");
        established.option = vec![TermOption::Established];
        let mut tcp_established = term("tcp-established-term");
        tcp_established.option = vec![TermOption::TcpEstablished];

        let translation = translate(
            &policy(
                FilterType::Inet,
                vec![stateless, established, tcp_established],
            ),
            TranslateOptions::default(),
        )
        .expect("translate");

        assert!(translation.rulesets[0].rules.is_empty());
        assert_eq!(translation.notices.len(), 3);
        assert!(translation
            .notices
            .iter()
            .all(|n| n.severity == Severity::Warning));
    }

    #[test]
    fn duplicate_term_in_one_header_is_fatal() {
        let err = translate(
            &policy(FilterType::Inet, vec![term("dup"), term("dup")]),
            TranslateOptions::default(),
        )
        .expect_err("duplicate should fail");
        assert!(matches!(err, TranslateError::DuplicateTerm { .. }));
    }

    #[test]
    fn same_term_name_in_different_headers_is_permitted() {
        let policy = PolicyFile {
            filters: vec![
                crate::policy::Filter {
                    header: header(FilterType::Inet),
                    terms: vec![term("shared-name")],
                },
                crate::policy::Filter {
                    header: Header {
                        platform: None,
                        from_zone: "dmz".to_string(),
                        to_zone: "trust".to_string(),
                        filter_type: FilterType::Inet,
                    },
                    terms: vec![term("shared-name")],
                },
            ],
        };

        let translation =
            translate(&policy, TranslateOptions::default()).expect("translate");
        assert_eq!(translation.rulesets.len(), 2);
        assert_eq!(translation.rulesets[1].rules[0].name, "shared-name");
    }

    #[test]
    fn over_long_term_name_is_fatal() {
        let err = translate(
            &policy(FilterType::Inet, vec![term(&"x".repeat(32))]),
            TranslateOptions::default(),
        )
        .expect_err("long name should fail");
        assert!(matches!(err, TranslateError::TermNameTooLong { .. }));
    }

    #[test]
    fn expired_term_is_dropped_and_expiring_term_noticed() {
        let mut expired = term("expired");
        expired.expiration = NaiveDate::from_ymd_opt(2000, 1, 1);
        let mut expiring = term("expiring");
        expiring.expiration = NaiveDate::from_ymd_opt(2026, 1, 10);

        let translation = translate(
            &policy(FilterType::Inet, vec![expired, expiring]),
            TranslateOptions {
                expiration_weeks: 2,
                today: NaiveDate::from_ymd_opt(2026, 1, 1),
            },
        )
        .expect("translate");

        let rules = &translation.rulesets[0].rules;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "expiring");
        assert!(translation
            .notices
            .iter()
            .any(|n| n.code == "expired_term" && n.severity == Severity::Warning));
        assert!(translation
            .notices
            .iter()
            .any(|n| n.code == "expiring_term" && n.severity == Severity::Info));
    }

    #[test]
    fn icmp_term_with_types_generates_custom_applications() {
        let mut t = term("test-icmp");
        t.protocol = vec!["icmp".to_string()];
        t.icmp_type = vec!["echo-request".to_string(), "echo-reply".to_string()];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");

        let rule = &translation.rulesets[0].rules[0];
        assert_eq!(
            rule.application,
            vec!["icmp-echo-request", "icmp-echo-reply"]
        );
        assert_eq!(translation.applications.len(), 2);
        let entry = &translation.applications.entries()[0];
        assert_eq!(entry.name, "icmp-echo-request");
        assert_eq!(entry.type_code, 8);
        assert_eq!(entry.risk, 4);
    }

    #[test]
    fn icmp_only_term_attaches_generic_token() {
        let mut t = term("test-icmp-only");
        t.protocol = vec!["icmp".to_string()];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert_eq!(
            translation.rulesets[0].rules[0].application,
            vec!["icmp"]
        );
        assert!(translation.applications.is_empty());
    }

    #[test]
    fn icmpv6_only_term_in_inet6_filter_attaches_ipv6_icmp() {
        let mut t = term("test-ipv6-icmp");
        t.protocol = vec!["icmpv6".to_string()];

        let translation = translate(
            &policy(FilterType::Inet6, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert_eq!(
            translation.rulesets[0].rules[0].application,
            vec!["ipv6-icmp"]
        );
    }

    #[test]
    fn bad_icmp_type_is_fatal_and_names_the_type() {
        let mut t = term("test-icmp");
        t.protocol = vec!["icmp".to_string()];
        t.icmp_type = vec!["no-such-type".to_string()];

        let err = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect_err("bad type should fail");
        match err {
            TranslateError::BadIcmpType { icmp_type, .. } => {
                assert_eq!(icmp_type, "no-such-type")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn icmp_type_without_icmp_protocol_is_fatal() {
        let mut t = term("test-icmp-type");
        t.icmp_type = vec!["echo-request".to_string()];

        let err = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect_err("should fail");
        assert!(matches!(err, TranslateError::IcmpTypeWithoutProtocol { .. }));
    }

    #[test]
    fn unsupported_protocol_is_fatal() {
        let mut t = term("bad-proto");
        t.protocol = vec!["gre".to_string()];

        let err = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect_err("should fail");
        assert!(matches!(err, TranslateError::UnsupportedProtocol { .. }));
    }

    #[test]
    fn icmpv6_term_in_inet_filter_is_dropped() {
        let mut t = term("v6-ping");
        t.protocol = vec!["icmpv6".to_string()];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert!(translation.rulesets[0].rules.is_empty());
        assert!(translation
            .notices
            .iter()
            .any(|n| n.code == "icmpv6_in_inet_filter"));
    }

    #[test]
    fn mixed_filter_drops_disjoint_family_term() {
        let mut t = term("cross-family");
        t.source_address = vec![named("10.0.0.0/8", "V4NET")];
        t.destination_address = vec![named("2001:db8::/32", "V6NET")];

        let translation = translate(
            &policy(FilterType::Mixed, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert!(translation.rulesets[0].rules.is_empty());
        assert!(translation
            .notices
            .iter()
            .any(|n| n.code == "disjoint_address_families"));
    }

    #[test]
    fn inet_filter_keeps_v6_addresses_out_of_the_address_book() {
        let mut t = term("dual-homed");
        t.source_address = vec![
            named("10.0.0.0/8", "NET"),
            named("2001:db8::/32", "NET"),
        ];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        let book = translation.addressbook.render();
        assert_eq!(book.addresses.len(), 1);
        assert_eq!(book.addresses[0].network.net.to_string(), "10.0.0.0/8");
        // rule members still carry the token for the whole term
        assert_eq!(translation.rulesets[0].rules[0].source, vec!["NET"]);
    }

    #[test]
    fn exclusion_subtraction_narrows_registered_addresses() {
        let mut t = term("no-loopback");
        t.source_address = vec![named("10.0.0.0/8", "CORP")];
        t.source_address_exclude = vec![named("10.0.0.0/9", "EXCL")];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        let book = translation.addressbook.render();
        assert_eq!(book.addresses.len(), 1);
        assert_eq!(book.addresses[0].network.net.to_string(), "10.128.0.0/9");
    }

    #[test]
    fn service_registry_is_shared_across_policies_in_one_run() {
        let mut a = term("shared-ports");
        a.protocol = vec!["tcp".to_string()];
        a.destination_port = vec![(443, 443)];

        let mut b = term("other-term");
        b.protocol = vec!["tcp".to_string()];
        b.destination_port = vec![(443, 443)];

        let mut translator = Translator::new(TranslateOptions::default());
        translator
            .add(&policy(FilterType::Inet, vec![a]))
            .expect("first policy");
        translator
            .add(&policy(FilterType::Inet, vec![b]))
            .expect("second policy");
        let translation = translator.finish();

        assert_eq!(translation.services.len(), 1);
        assert_eq!(
            translation.rulesets[1].rules[0].service,
            vec!["service-shared-ports-tcp"]
        );
    }

    #[test]
    fn igmp_and_sctp_map_to_themselves_as_applications() {
        let mut t = term("multicast");
        t.protocol = vec!["igmp".to_string(), "sctp".to_string()];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert_eq!(
            translation.rulesets[0].rules[0].application,
            vec!["igmp", "sctp"]
        );
    }

    #[test]
    fn pan_applications_pass_through_before_derived_ones() {
        let mut t = term("web");
        t.protocol = vec!["tcp".to_string()];
        t.pan_application = vec!["ssl".to_string(), "http".to_string()];

        let translation = translate(
            &policy(FilterType::Inet, vec![t]),
            TranslateOptions::default(),
        )
        .expect("translate");
        assert_eq!(
            translation.rulesets[0].rules[0].application,
            vec!["ssl", "http", "any"]
        );
    }

    #[test]
    fn non_paloalto_header_is_skipped() {
        let mut policy = policy(FilterType::Inet, vec![term("t")]);
        policy.filters[0].header.platform = Some("srx".to_string());

        let translation =
            translate(&policy, TranslateOptions::default()).expect("translate");
        assert!(translation.rulesets.is_empty());
        assert!(translation
            .notices
            .iter()
            .any(|n| n.code == "skipped_platform"));
    }

    #[test]
    fn empty_zone_is_fatal() {
        let mut policy = policy(FilterType::Inet, vec![term("t")]);
        policy.filters[0].header.from_zone = String::new();

        let err = translate(&policy, TranslateOptions::default())
            .expect_err("empty zone should fail");
        assert!(matches!(err, TranslateError::EmptyZone { .. }));
    }
}
