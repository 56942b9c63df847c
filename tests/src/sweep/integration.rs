#![cfg(test)]
use std::net::Ipv4Addr;
use std::sync::Arc;

use pingsweep_common::config::Config;
use pingsweep_common::network::range::Ipv4Range;
use pingsweep_common::network::target;
use pingsweep_common::result::{LOOKUP_FAILED, ProbeResult};
use pingsweep_core::scanner::Sweeper;
use pingsweep_core::{ranker, report};

use crate::fakes::{ScriptedProber, ScriptedResolver};

fn lan(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, last)
}

async fn ranked_sweep(
    prober: Arc<ScriptedProber>,
    resolver: ScriptedResolver,
    range: Ipv4Range,
) -> Vec<ProbeResult> {
    let sweeper = Sweeper::new(prober, resolver, &Config::default());
    let mut results = sweeper.sweep(range).await.expect("sweep failed");
    ranker::rank_by_distance(&mut results);
    results
}

fn to_csv(results: &[ProbeResult]) -> String {
    let mut out = Vec::new();
    report::write_csv(&mut out, results).expect("csv report failed");
    String::from_utf8(out).unwrap()
}

fn sweep_range(start: &str, end: &str) -> Ipv4Range {
    let start = target::parse_ipv4(start).unwrap();
    let end = target::parse_ipv4(end).unwrap();
    Ipv4Range::new(start, end).unwrap()
}

/// Only the middle host of three answers and it has a PTR record.
#[tokio::test]
async fn three_address_range_reports_single_router() {
    let range = sweep_range("192.168.1.1", "192.168.1.3");
    let prober = Arc::new(ScriptedProber::up([lan(2)]));
    let resolver = ScriptedResolver::new([(lan(2), vec!["router.local"])]);

    let results = ranked_sweep(Arc::clone(&prober), resolver, range).await;

    assert_eq!(to_csv(&results), "IP,Hostname\n192.168.1.2,router.local\n");

    let mut probed = prober.probed.lock().unwrap().clone();
    probed.sort();
    assert_eq!(probed, vec![lan(1), lan(2), lan(3)]);
}

#[tokio::test]
async fn single_address_range_is_considered_once() {
    let range = sweep_range("192.168.1.1", "192.168.1.1");
    let prober = Arc::new(ScriptedProber::up([lan(1)]));

    let results = ranked_sweep(Arc::clone(&prober), ScriptedResolver::empty(), range).await;

    assert_eq!(*prober.probed.lock().unwrap(), vec![lan(1)]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].distance, 0);
}

#[tokio::test]
async fn failed_reverse_lookup_keeps_the_host() {
    let range = sweep_range("10.0.0.1", "10.0.0.4");
    let up = [Ipv4Addr::new(10, 0, 0, 3)];
    let prober = Arc::new(ScriptedProber::up(up));

    let results = ranked_sweep(prober, ScriptedResolver::empty(), range).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].hostname.to_string(), LOOKUP_FAILED);
    assert_eq!(to_csv(&results), "IP,Hostname\n10.0.0.3,NSLookup failed\n");
}

#[tokio::test]
async fn unreachable_hosts_never_appear_even_with_ptr_records() {
    let range = sweep_range("192.168.1.1", "192.168.1.20");
    let prober = Arc::new(ScriptedProber::up([lan(7)]));
    let resolver = ScriptedResolver::new([
        (lan(7), vec!["desk.lan"]),
        (lan(8), vec!["offline.lan"]),
        (lan(9), vec!["printer.lan"]),
    ]);

    let results = ranked_sweep(prober, resolver, range).await;

    let addrs: Vec<Ipv4Addr> = results.iter().map(|r| r.address).collect();
    assert_eq!(addrs, vec![lan(7)]);
}

/// Crosses a third-octet boundary and checks ordering plus distances.
#[tokio::test]
async fn results_are_ranked_by_distance_across_octets() {
    let range = sweep_range("10.0.0.250", "10.0.1.5");
    let up = [
        Ipv4Addr::new(10, 0, 1, 5),
        Ipv4Addr::new(10, 0, 0, 250),
        Ipv4Addr::new(10, 0, 1, 0),
        Ipv4Addr::new(10, 0, 0, 255),
    ];
    let prober = Arc::new(ScriptedProber::up(up));

    let results = ranked_sweep(Arc::clone(&prober), ScriptedResolver::empty(), range).await;

    assert_eq!(prober.probed.lock().unwrap().len() as u64, range.len());
    let distances: Vec<i64> = results.iter().map(|r| r.distance).collect();
    assert_eq!(distances, vec![0, 5, 6, 11]);
    for result in &results {
        assert_eq!(
            result.distance,
            i64::from(u32::from(result.address)) - i64::from(u32::from(range.start_addr))
        );
    }
}

#[tokio::test]
async fn repeated_sweeps_agree() {
    let range = sweep_range("172.16.0.1", "172.16.0.64");
    let up: Vec<Ipv4Addr> = range.to_iter().filter(|ip| ip.octets()[3] % 5 == 0).collect();
    let names = || ScriptedResolver::new(up.iter().map(|ip| (*ip, vec!["host.lan"])));

    let first = ranked_sweep(Arc::new(ScriptedProber::up(up.clone())), names(), range).await;
    let second = ranked_sweep(Arc::new(ScriptedProber::up(up.clone())), names(), range).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), up.len());
}

#[tokio::test]
async fn empty_sweep_writes_header_only() {
    let range = sweep_range("192.168.1.1", "192.168.1.10");
    let results = ranked_sweep(
        Arc::new(ScriptedProber::up([])),
        ScriptedResolver::empty(),
        range,
    )
    .await;

    assert!(results.is_empty());
    assert_eq!(to_csv(&results), "IP,Hostname\n");
}
