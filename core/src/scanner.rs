//! The concurrent **sweep** pipeline.
//!
//! One unit of work is spawned per address of an [`Ipv4Range`]. A unit probes its address and,
//! only when the host answers, resolves its name and emits a [`ProbeResult`]. Results travel over
//! a channel to a single collector task, which is the only owner of the result vector.
//!
//! Admission is bounded by a semaphore sized from [`Config::concurrency`], so at most that many
//! `ping` children and lookups are alive at once. Once every unit has finished, the sender side
//! is dropped, the collector drains and the collected vector is returned in arrival order.
//! Ordering is the job of [`crate::ranker`].
//!
//! The probing and naming strategies sit behind the [`Prober`] and [`NameResolver`] traits;
//! [`perform_sweep`] wires the operating-system backed implementations.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use pingsweep_common::config::Config;
use pingsweep_common::error;
use pingsweep_common::network::range::Ipv4Range;
use pingsweep_common::result::ProbeResult;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

mod prober;
mod resolver;

pub use prober::{PingProber, Prober};
pub use resolver::{NameResolver, SystemResolver};

/// Snapshot handed to the progress callback after each unit completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepProgress {
    pub probed: u64,
    pub found: u64,
    pub total: u64,
}

pub type ProgressCallback = Arc<dyn Fn(SweepProgress) + Send + Sync>;

#[derive(Default)]
struct Counters {
    probed: AtomicU64,
    found: AtomicU64,
}

pub struct Sweeper<P, R> {
    prober: Arc<P>,
    resolver: Arc<R>,
    concurrency: usize,
    on_progress: Option<ProgressCallback>,
}

impl<P, R> Sweeper<P, R>
where
    P: Prober + 'static,
    R: NameResolver + 'static,
{
    pub fn new(prober: P, resolver: R, cfg: &Config) -> Self {
        Self {
            prober: Arc::new(prober),
            resolver: Arc::new(resolver),
            concurrency: cfg.concurrency(),
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Probes every address of `range` once and returns the hosts that answered.
    ///
    /// Never fails because of a single address; an empty vector is a valid outcome.
    pub async fn sweep(&self, range: Ipv4Range) -> anyhow::Result<Vec<ProbeResult>> {
        let (tx, rx) = mpsc::unbounded_channel::<ProbeResult>();
        let collector = tokio::spawn(collect(rx));

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let counters = Arc::new(Counters::default());
        let total: u64 = range.len();
        let mut units: JoinSet<()> = JoinSet::new();

        debug!(
            "sweeping {total} addresses from {} to {} with {} probes in flight",
            range.start_addr, range.end_addr, self.concurrency
        );

        for addr in range.to_iter() {
            let permit = permits
                .clone()
                .acquire_owned()
                .await
                .context("probe permits closed")?;

            let prober = Arc::clone(&self.prober);
            let resolver = Arc::clone(&self.resolver);
            let counters = Arc::clone(&counters);
            let on_progress = self.on_progress.clone();
            let tx = tx.clone();

            units.spawn(async move {
                let _permit = permit;

                if let Some(result) = probe_one(&*prober, &*resolver, &range, addr).await {
                    counters.found.fetch_add(1, Ordering::Relaxed);
                    if tx.send(result).is_err() {
                        error!("Result for {addr} dropped: collector is gone");
                    }
                }

                let probed = counters.probed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(cb) = on_progress {
                    cb(SweepProgress {
                        probed,
                        found: counters.found.load(Ordering::Relaxed),
                        total,
                    });
                }
            });

            while let Some(finished) = units.try_join_next() {
                log_unit_failure(finished);
            }
        }

        while let Some(finished) = units.join_next().await {
            log_unit_failure(finished);
        }

        drop(tx);
        collector.await.context("result collector failed")
    }
}

/// Executes a sweep with the `ping` prober and the system resolver.
pub async fn perform_sweep(
    range: Ipv4Range,
    cfg: &Config,
    on_progress: Option<Box<dyn Fn(SweepProgress) + Send + Sync>>,
) -> anyhow::Result<Vec<ProbeResult>> {
    let mut sweeper = Sweeper::new(PingProber::new(), SystemResolver, cfg);
    if let Some(cb) = on_progress {
        sweeper = sweeper.with_progress(Arc::from(cb));
    }
    sweeper.sweep(range).await
}

async fn probe_one<P, R>(
    prober: &P,
    resolver: &R,
    range: &Ipv4Range,
    addr: Ipv4Addr,
) -> Option<ProbeResult>
where
    P: Prober + ?Sized,
    R: NameResolver + ?Sized,
{
    if !prober.is_reachable(addr).await {
        return None;
    }
    let hostname = resolver.reverse_lookup(addr).await;
    debug!("{addr} is up ({hostname})");
    Some(ProbeResult::new(range, addr, hostname))
}

async fn collect(mut rx: mpsc::UnboundedReceiver<ProbeResult>) -> Vec<ProbeResult> {
    let mut results = Vec::new();
    while let Some(result) = rx.recv().await {
        results.push(result);
    }
    results
}

fn log_unit_failure(finished: Result<(), JoinError>) {
    if let Err(e) = finished {
        error!("Probe task failed: {e}");
    }
}
