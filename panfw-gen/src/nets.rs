use std::fmt::{self, Display, Formatter};
use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use serde::{Deserialize, Serialize};

/// A concrete network object carrying the symbolic group it was defined
/// under.
///
/// Addresses arrive already resolved by the naming layer; the token is the
/// group name used for address-book buckets and rule members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNetwork {
    /// Network in CIDR form.
    pub net: IpNetwork,
    /// Symbolic group name (parent token).
    pub token: String,
}

impl NamedNetwork {
    /// IP version of the network: 4 or 6.
    pub fn version(&self) -> u8 {
        if self.net.is_ipv4() {
            4
        } else {
            6
        }
    }
}

impl Display for NamedNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.net)
    }
}

/// True when `outer` contains every address of `inner` (same family).
pub fn is_supernet(outer: &IpNetwork, inner: &IpNetwork) -> bool {
    if outer.is_ipv4() != inner.is_ipv4() {
        return false;
    }
    outer.prefix() <= inner.prefix() && outer.contains(inner.network())
}

/// True when `outer` contains `inner` and the two are not equal.
pub fn is_strict_supernet(outer: &IpNetwork, inner: &IpNetwork) -> bool {
    outer != inner && is_supernet(outer, inner)
}

fn overlaps(a: &IpNetwork, b: &IpNetwork) -> bool {
    is_supernet(a, b) || is_supernet(b, a)
}

/// Subtract every network in `excluded` from every network in `list`.
///
/// Networks fully covered by an exclusion are removed; partially covered
/// networks are split into the uncovered remainder, keeping their token.
pub fn exclude_networks(list: Vec<NamedNetwork>, excluded: &[NamedNetwork]) -> Vec<NamedNetwork> {
    let mut current = list;
    for exclusion in excluded {
        current = current
            .into_iter()
            .flat_map(|addr| {
                let token = addr.token;
                exclude_one(addr.net, &exclusion.net)
                    .into_iter()
                    .map(move |net| NamedNetwork {
                        net,
                        token: token.clone(),
                    })
            })
            .collect();
    }
    current
}

fn exclude_one(net: IpNetwork, exclusion: &IpNetwork) -> Vec<IpNetwork> {
    if !overlaps(&net, exclusion) {
        return vec![net];
    }
    if is_supernet(exclusion, &net) {
        return Vec::new();
    }
    match halves(&net) {
        Some((lower, upper)) => {
            let mut out = exclude_one(lower, exclusion);
            out.extend(exclude_one(upper, exclusion));
            out
        }
        None => vec![net],
    }
}

/// Split a network into its two equal-sized child networks.
fn halves(net: &IpNetwork) -> Option<(IpNetwork, IpNetwork)> {
    match net {
        IpNetwork::V4(n) => {
            if n.prefix() >= 32 {
                return None;
            }
            let prefix = n.prefix() + 1;
            let base = u32::from(n.network());
            let upper = base | 1u32 << (32 - prefix);
            let lower = Ipv4Network::new(Ipv4Addr::from(base), prefix).ok()?;
            let upper = Ipv4Network::new(Ipv4Addr::from(upper), prefix).ok()?;
            Some((IpNetwork::V4(lower), IpNetwork::V4(upper)))
        }
        IpNetwork::V6(n) => {
            if n.prefix() >= 128 {
                return None;
            }
            let prefix = n.prefix() + 1;
            let base = u128::from(n.network());
            let upper = base | 1u128 << (128 - prefix);
            let lower = Ipv6Network::new(Ipv6Addr::from(base), prefix).ok()?;
            let upper = Ipv6Network::new(Ipv6Addr::from(upper), prefix).ok()?;
            Some((IpNetwork::V6(lower), IpNetwork::V6(upper)))
        }
    }
}
