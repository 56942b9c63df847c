//! # Sweep Result Model
//!
//! A [`ProbeResult`] exists only for addresses that answered the reachability probe.
//! Reverse DNS outcome is carried by [`Hostname`] and never removes a result.

use std::fmt;
use std::net::Ipv4Addr;

use crate::network::range::Ipv4Range;

/// Text written in place of a hostname when reverse DNS fails.
pub const LOOKUP_FAILED: &str = "NSLookup failed";

/// Separator between multiple PTR names of one address.
pub const NAME_DELIMITER: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hostname {
    /// Names in the order the resolver returned them. Never empty.
    Resolved(Vec<String>),
    Unresolved,
}

impl Hostname {
    /// Builds a hostname from resolver output; no usable names means [`Hostname::Unresolved`].
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .collect();

        if names.is_empty() {
            Hostname::Unresolved
        } else {
            Hostname::Resolved(names)
        }
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hostname::Resolved(names) => f.write_str(&names.join(NAME_DELIMITER)),
            Hostname::Unresolved => f.write_str(LOOKUP_FAILED),
        }
    }
}

/// One reachable host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub address: Ipv4Addr,
    pub hostname: Hostname,
    /// `address - range start`, the ordering key of the report.
    pub distance: i64,
}

impl ProbeResult {
    pub fn new(range: &Ipv4Range, address: Ipv4Addr, hostname: Hostname) -> Self {
        Self {
            address,
            hostname,
            distance: range.distance_of(address),
        }
    }
}
