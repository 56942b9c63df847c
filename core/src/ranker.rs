use pingsweep_common::result::ProbeResult;

/// Orders results by distance from the start of the swept range, nearest first.
///
/// Addresses inside one sweep are unique, so distances never tie and stability is irrelevant.
pub fn rank_by_distance(results: &mut [ProbeResult]) {
    results.sort_unstable_by_key(|result| result.distance);
}
