//! Per-term address-family resolution.
//!
//! A term's source/destination addressing supports some combination of
//! IPv4/IPv6 traffic flows; the filter's address-family mode then decides
//! whether the term is emitted as-is, narrowed to one family, or dropped.

use std::fmt::{self, Display, Formatter};

use crate::nets::NamedNetwork;
use crate::policy::FilterType;

/// IP version combination supported by a term's addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Ip4ToIp4,
    Ip6ToIp6,
    Ip4SrcOnly,
    Ip4DstOnly,
    Ip4Only,
    Ip6SrcOnly,
    Ip6DstOnly,
    Ip6Only,
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Ip4ToIp4 => "ip4-ip4",
            Flow::Ip6ToIp6 => "ip6-ip6",
            Flow::Ip4SrcOnly => "ip4-src-only",
            Flow::Ip4DstOnly => "ip4-dst-only",
            Flow::Ip4Only => "ip4-only",
            Flow::Ip6SrcOnly => "ip6-src-only",
            Flow::Ip6DstOnly => "ip6-dst-only",
            Flow::Ip6Only => "ip6-only",
        }
    }
}

impl Display for Flow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Space-joined flow list for diagnostics.
pub fn render_flows(flows: &[Flow]) -> String {
    flows
        .iter()
        .map(|flow| flow.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn dual(version: u8) -> Flow {
    if version == 4 {
        Flow::Ip4ToIp4
    } else {
        Flow::Ip6ToIp6
    }
}

fn src_only(version: u8) -> Flow {
    if version == 4 {
        Flow::Ip4SrcOnly
    } else {
        Flow::Ip6SrcOnly
    }
}

fn dst_only(version: u8) -> Flow {
    if version == 4 {
        Flow::Ip4DstOnly
    } else {
        Flow::Ip6DstOnly
    }
}

fn only(version: u8) -> Flow {
    if version == 4 {
        Flow::Ip4Only
    } else {
        Flow::Ip6Only
    }
}

/// Compute the flows a term's (post-subtraction) addressing supports.
///
/// An empty side matches every version.
pub fn term_flows(source: &[NamedNetwork], destination: &[NamedNetwork]) -> Vec<Flow> {
    let src_any = source.is_empty();
    let dst_any = destination.is_empty();
    let mut flows = Vec::new();

    for version in [4u8, 6u8] {
        let src = source.iter().filter(|a| a.version() == version).count();
        let dst = destination.iter().filter(|a| a.version() == version).count();

        if src_any && dst_any {
            flows.push(dual(version));
            continue;
        }
        if (src == 0 && !src_any) && (dst == 0 && !dst_any) {
            continue;
        }
        if (src > 0 || src_any) && (dst > 0 || dst_any) {
            flows.push(dual(version));
            continue;
        }
        if (src > 0 || src_any) && dst == 0 {
            flows.push(src_only(version));
            flows.push(only(version));
            continue;
        }
        if src == 0 && (dst > 0 || dst_any) {
            flows.push(dst_only(version));
            flows.push(only(version));
        }
    }

    flows
}

/// Why a term is dropped during family resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyDropReason {
    /// `inet` filter on a term referencing the ICMPv6 protocol.
    Icmp6InInetFilter,
    /// `inet6` filter on a term referencing the ICMP protocol.
    IcmpInInet6Filter,
    /// The dual flow required by a single-family filter is missing.
    MissingDualFlow,
    /// Source and destination belong to disjoint single families.
    DisjointFamilies,
}

/// Outcome of gating a term's flows against the filter's mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyDecision {
    /// Emit the term; strip these IP versions from address resolution.
    Keep(Vec<u8>),
    /// Emit the term with a warning; strip these IP versions.
    KeepPartial { exclude: Vec<u8> },
    /// Drop the whole term.
    Drop(FamilyDropReason),
}

/// Gate a term's flows against the filter mode.
///
/// The `mixed` branch order is deliberate and matches the device generator
/// this reproduces: exclusive dual-flow narrowing first, then the dual-dual
/// keep, then the disjoint-families drop, then the asymmetric tail.
pub fn gate(filter_type: FilterType, flows: &[Flow], protocols: &[String]) -> FamilyDecision {
    match filter_type {
        FilterType::Inet => {
            if protocols.iter().any(|p| p == "icmpv6") {
                return FamilyDecision::Drop(FamilyDropReason::Icmp6InInetFilter);
            }
            if !flows.contains(&Flow::Ip4ToIp4) {
                return FamilyDecision::Drop(FamilyDropReason::MissingDualFlow);
            }
            FamilyDecision::Keep(vec![6])
        }
        FilterType::Inet6 => {
            if protocols.iter().any(|p| p == "icmp") {
                return FamilyDecision::Drop(FamilyDropReason::IcmpInInet6Filter);
            }
            if !flows.contains(&Flow::Ip6ToIp6) {
                return FamilyDecision::Drop(FamilyDropReason::MissingDualFlow);
            }
            FamilyDecision::Keep(vec![4])
        }
        FilterType::Mixed => {
            let has4 = flows.contains(&Flow::Ip4ToIp4);
            let has6 = flows.contains(&Flow::Ip6ToIp6);
            if has4 && !has6 {
                return FamilyDecision::Keep(vec![6]);
            }
            if has6 && !has4 {
                return FamilyDecision::Keep(vec![4]);
            }
            if has4 && has6 {
                return FamilyDecision::Keep(Vec::new());
            }
            if flows.contains(&Flow::Ip4Only) && flows.contains(&Flow::Ip6Only) {
                return FamilyDecision::Drop(FamilyDropReason::DisjointFamilies);
            }
            let exclude = if has4 { vec![6] } else { vec![4] };
            FamilyDecision::KeepPartial { exclude }
        }
    }
}
