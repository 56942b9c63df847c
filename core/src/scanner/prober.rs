//! ICMP reachability through the operating system's `ping` utility.
//!
//! Spawning `ping` keeps the sweep unprivileged: no raw sockets, no capabilities. The price is one
//! child process per probe, which the coordinator bounds.

use std::net::Ipv4Addr;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

#[cfg(target_os = "windows")]
const COUNT_ARGS: [&str; 2] = ["-n", "1"];
#[cfg(not(target_os = "windows"))]
const COUNT_ARGS: [&str; 2] = ["-c", "1"];

const PING_PROGRAM: &str = "ping";

/// Decides whether a single address answers.
///
/// Every failure mode collapses into `false`; implementations never return errors.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool;
}

#[async_trait]
impl<T: Prober + ?Sized> Prober for std::sync::Arc<T> {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool {
        (**self).is_reachable(addr).await
    }
}

/// Sends exactly one echo request per call, with the utility's own default timeout.
#[derive(Debug, Clone)]
pub struct PingProber {
    program: String,
}

impl PingProber {
    pub fn new() -> Self {
        Self::with_program(PING_PROGRAM)
    }

    /// Uses another executable with `ping`'s calling convention.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool {
        let status = Command::new(&self.program)
            .args(COUNT_ARGS)
            .arg(addr.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await;

        match status {
            Ok(status) if status.success() => true,
            Ok(status) => {
                trace!("{addr} did not answer ({status})");
                false
            }
            Err(e) => {
                debug!("failed to run {} for {addr}: {e}", self.program);
                false
            }
        }
    }
}
