//! Per-zone catalog of named network objects.
//!
//! Objects register under a `(zone, token)` bucket and receive a stable name
//! `token_N` in first-seen order. Registration collapses exact duplicates and
//! strict subnets of an already-registered object in the same bucket; the
//! rendered view additionally collapses identical names across zones.

use serde::Serialize;

use crate::nets::{is_strict_supernet, NamedNetwork};

/// One named object inside a zone/token bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BookEntry {
    pub network: NamedNetwork,
    pub name: String,
}

#[derive(Debug)]
struct TokenBucket {
    token: String,
    entries: Vec<BookEntry>,
}

#[derive(Debug)]
struct ZoneBook {
    zone: String,
    buckets: Vec<TokenBucket>,
}

/// Accumulates the network objects referenced by a translation run.
#[derive(Debug, Default)]
pub struct AddressBook {
    zones: Vec<ZoneBook>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one object under a zone.
    ///
    /// No-op when the bucket already holds an object with the identical
    /// string form, or one that is a strict supernet of `object`.
    pub fn register(&mut self, zone: &str, object: &NamedNetwork) {
        let zone_idx = match self.zones.iter().position(|z| z.zone == zone) {
            Some(idx) => idx,
            None => {
                self.zones.push(ZoneBook {
                    zone: zone.to_string(),
                    buckets: Vec::new(),
                });
                self.zones.len() - 1
            }
        };
        let zone_book = &mut self.zones[zone_idx];

        let bucket_idx = match zone_book
            .buckets
            .iter()
            .position(|b| b.token == object.token)
        {
            Some(idx) => idx,
            None => {
                zone_book.buckets.push(TokenBucket {
                    token: object.token.clone(),
                    entries: Vec::new(),
                });
                zone_book.buckets.len() - 1
            }
        };
        let bucket = &mut zone_book.buckets[bucket_idx];

        for entry in &bucket.entries {
            if entry.network.net == object.net {
                return;
            }
            if is_strict_supernet(&entry.network.net, &object.net) {
                return;
            }
        }

        let name = format!("{}_{}", object.token, bucket.entries.len());
        bucket.entries.push(BookEntry {
            network: object.clone(),
            name,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Flatten into the deduplicated name/group view used for output.
    ///
    /// Zones are visited in first-registration order with token buckets
    /// sorted per zone. A name seen again in a later zone only displaces the
    /// earlier object when the newcomer is a strict supernet of it. A token
    /// grouped in several zones keeps the last zone's member list.
    pub fn render(&self) -> RenderedBook {
        let mut addresses: Vec<RenderedAddress> = Vec::new();
        let mut groups: Vec<RenderedGroup> = Vec::new();

        for zone in &self.zones {
            let mut buckets: Vec<&TokenBucket> = zone.buckets.iter().collect();
            buckets.sort_by(|a, b| a.token.cmp(&b.token));

            for bucket in &buckets {
                for entry in &bucket.entries {
                    match addresses.iter().position(|a| a.name == entry.name) {
                        Some(idx) => {
                            if is_strict_supernet(&entry.network.net, &addresses[idx].network.net)
                            {
                                addresses[idx].network = entry.network.clone();
                            }
                        }
                        None => addresses.push(RenderedAddress {
                            name: entry.name.clone(),
                            network: entry.network.clone(),
                        }),
                    }
                }

                let members: Vec<String> =
                    bucket.entries.iter().map(|e| e.name.clone()).collect();
                match groups.iter().position(|g| g.token == bucket.token) {
                    Some(idx) => groups[idx].members = members,
                    None => groups.push(RenderedGroup {
                        token: bucket.token.clone(),
                        members,
                    }),
                }
            }
        }

        addresses.sort_by(|a, b| natural_key(&a.name).cmp(&natural_key(&b.name)));
        groups.sort_by(|a, b| a.token.cmp(&b.token));

        RenderedBook { addresses, groups }
    }
}

/// One final address-book entry.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedAddress {
    pub name: String,
    pub network: NamedNetwork,
}

/// One final address-group entry.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedGroup {
    pub token: String,
    pub members: Vec<String>,
}

/// Flattened, deduplicated view of the address book.
#[derive(Debug, Default, Serialize)]
pub struct RenderedBook {
    /// Name/object pairs in natural name order.
    pub addresses: Vec<RenderedAddress>,
    /// Token groups in alphabetical token order.
    pub groups: Vec<RenderedGroup>,
}

/// Natural ordering key: alphabetic prefix, then the numeric `_N` suffix.
fn natural_key(name: &str) -> (String, u64) {
    if let Some((alpha, digits)) = name.rsplit_once('_') {
        if let Ok(num) = digits.parse::<u64>() {
            return (alpha.to_string(), num);
        }
    }
    (name.to_string(), 0)
}
