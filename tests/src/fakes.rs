use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::Mutex;

use async_trait::async_trait;
use pingsweep_common::result::Hostname;
use pingsweep_core::scanner::{NameResolver, Prober};

/// Answers for a fixed set of addresses and remembers every address it was asked about.
pub struct ScriptedProber {
    up: HashSet<Ipv4Addr>,
    pub probed: Mutex<Vec<Ipv4Addr>>,
}

impl ScriptedProber {
    pub fn up<I: IntoIterator<Item = Ipv4Addr>>(addrs: I) -> Self {
        Self {
            up: addrs.into_iter().collect(),
            probed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool {
        self.probed.lock().unwrap().push(addr);
        self.up.contains(&addr)
    }
}

/// PTR table; anything missing fails to resolve.
pub struct ScriptedResolver {
    names: HashMap<Ipv4Addr, Vec<&'static str>>,
}

impl ScriptedResolver {
    pub fn new<I: IntoIterator<Item = (Ipv4Addr, Vec<&'static str>)>>(names: I) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }
}

#[async_trait]
impl NameResolver for ScriptedResolver {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Hostname {
        match self.names.get(&addr) {
            Some(names) => Hostname::from_names(names.iter().copied()),
            None => Hostname::Unresolved,
        }
    }
}
