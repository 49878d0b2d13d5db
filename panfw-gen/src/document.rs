//! Assembly of the translated collections into the device configuration
//! tree.
//!
//! This is a pure fold: every ordering decision was made upstream, the
//! assembler only lays sections out in the fixed order the device expects.

use xml_build_core::Element;

use crate::addressbook::RenderedBook;
use crate::application::ApplicationCatalog;
use crate::rule::{LogDecision, Rule, RuleSet};
use crate::service::{render_port_list, ServiceRegistry};
use crate::translate::Translation;

/// Longest rule description the device accepts.
pub const MAX_RULE_DESCRIPTION_LENGTH: usize = 1024;

/// Build the full device configuration document.
pub fn build_document(translation: &Translation) -> Element {
    let book = translation.addressbook.render();

    let vsys_entry = Element::new("entry")
        .attr("name", "vsys1")
        .child(applications_element(&translation.applications))
        .child(Element::new("application-group"))
        .child(services_element(&translation.services))
        .child(rulebase_element(&translation.rulesets))
        .child(address_groups_element(&book))
        .child(addresses_element(&book));

    Element::new("config")
        .attr("version", "7.0.0")
        .attr("urldb", "paloaltonetworks")
        .child(
            Element::new("devices").child(
                Element::new("entry")
                    .attr("name", "localhost.localdomain")
                    .child(Element::new("vsys").child(vsys_entry)),
            ),
        )
}

fn applications_element(catalog: &ApplicationCatalog) -> Element {
    let mut node = Element::new("application");
    for app in catalog.entries() {
        let default = Element::new("default").child(
            Element::new(app.matcher)
                .child(Element::with_text("type", app.type_code.to_string())),
        );
        node.push(
            Element::new("entry")
                .attr("name", app.name.clone())
                .child(Element::with_text("category", "networking"))
                .child(Element::with_text("subcategory", "ip-protocol"))
                .child(Element::with_text("technology", "network-protocol"))
                .child(Element::with_text("description", app.name.clone()))
                .child(default)
                .child(Element::with_text("risk", app.risk.to_string())),
        );
    }
    node
}

fn services_element(registry: &ServiceRegistry) -> Element {
    let mut node = Element::new("service");
    for service in registry.entries() {
        let ports = Element::new(service.protocol.clone())
            .child(Element::with_text("port", render_port_list(&service.ports)));
        node.push(
            Element::new("entry")
                .attr("name", service.name.clone())
                .child(Element::new("protocol").child(ports)),
        );
    }
    node
}

fn rulebase_element(rulesets: &[RuleSet]) -> Element {
    let mut rules = Element::new("rules");
    for ruleset in rulesets {
        for rule in &ruleset.rules {
            rules.push(rule_entry(rule));
        }
    }
    Element::new("rulebase").child(Element::new("security").child(rules))
}

fn rule_entry(rule: &Rule) -> Element {
    let mut entry = Element::new("entry").attr("name", rule.name.clone());

    if !rule.description.is_empty() {
        entry.push(Element::with_text(
            "description",
            truncate_chars(&rule.description, MAX_RULE_DESCRIPTION_LENGTH),
        ));
    }

    entry.push(member_list("to", std::slice::from_ref(&rule.to_zone)));
    entry.push(member_list("from", std::slice::from_ref(&rule.from_zone)));
    entry.push(member_list("source", &rule.source));
    entry.push(member_list("destination", &rule.destination));

    let mut service = Element::new("service");
    if rule.service.is_empty() && rule.application.is_empty() {
        service.push(Element::with_text("member", "any"));
    } else if rule.service.is_empty() {
        service.push(Element::with_text("member", "application-default"));
    } else {
        for name in &rule.service {
            service.push(Element::with_text("member", name.clone()));
        }
    }
    entry.push(service);

    entry.push(Element::with_text("action", rule.action.rendered()));

    if rule.interzone() {
        entry.push(Element::with_text("rule-type", "interzone"));
    }

    if rule.application.is_empty() {
        entry.push(member_list("application", &["any".to_string()]));
    } else {
        entry.push(member_list("application", &rule.application));
    }

    match rule.logging {
        LogDecision::Unset => {}
        LogDecision::Disabled => {
            entry.push(Element::with_text("log-start", "no"));
            entry.push(Element::with_text("log-end", "no"));
        }
        LogDecision::StartAndEnd => {
            entry.push(Element::with_text("log-start", "yes"));
            entry.push(Element::with_text("log-end", "yes"));
        }
        LogDecision::EndOnly => {
            entry.push(Element::with_text("log-end", "yes"));
        }
    }

    entry
}

fn address_groups_element(book: &RenderedBook) -> Element {
    let mut node = Element::new("address-group");
    for group in &book.groups {
        let mut members = Element::new("static");
        for name in &group.members {
            members.push(Element::with_text("member", name.clone()));
        }
        node.push(
            Element::new("entry")
                .attr("name", group.token.clone())
                .child(members),
        );
    }
    node
}

fn addresses_element(book: &RenderedBook) -> Element {
    let mut node = Element::new("address");
    for address in &book.addresses {
        node.push(
            Element::new("entry")
                .attr("name", address.name.clone())
                .child(Element::with_text("description", address.name.clone()))
                .child(Element::with_text(
                    "ip-netmask",
                    address.network.net.to_string(),
                )),
        );
    }
    node
}

fn member_list(tag: &str, members: &[String]) -> Element {
    let mut node = Element::new(tag);
    for member in members {
        node.push(Element::with_text("member", member.clone()));
    }
    node
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
