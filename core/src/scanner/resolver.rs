use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use pingsweep_common::result::Hostname;
use tracing::{debug, trace};

/// Reverse DNS for hosts that already answered a probe.
///
/// Failures are folded into [`Hostname::Unresolved`] so a lookup can never drop a host.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Hostname;
}

#[async_trait]
impl<T: NameResolver + ?Sized> NameResolver for std::sync::Arc<T> {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Hostname {
        (**self).reverse_lookup(addr).await
    }
}

/// Resolves through the operating system (`getnameinfo`), honouring hosts files and the
/// configured nameservers.
///
/// `getnameinfo` reports a single canonical name, so this resolver yields at most one entry even
/// when an address carries several PTR records. Multi-name [`Hostname::Resolved`] values only come
/// from resolvers that query PTR records directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl NameResolver for SystemResolver {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Hostname {
        let lookup = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&IpAddr::V4(addr)));

        match lookup.await {
            Ok(Ok(name)) => hostname_from_lookup(addr, name),
            Ok(Err(e)) => {
                trace!("reverse lookup for {addr} failed: {e}");
                Hostname::Unresolved
            }
            Err(e) => {
                debug!("reverse lookup task for {addr} aborted: {e}");
                Hostname::Unresolved
            }
        }
    }
}

// getnameinfo hands back the numeric form when no PTR record exists
fn hostname_from_lookup(addr: Ipv4Addr, name: String) -> Hostname {
    if name.parse::<IpAddr>().is_ok_and(|ip| ip == IpAddr::V4(addr)) {
        return Hostname::Unresolved;
    }
    Hostname::from_names([name])
}
