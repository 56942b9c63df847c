//! Sweep engine for `pingsweep`.
//!
//! * [`scanner`]: the concurrent probe-and-collect pipeline and its prober/resolver seams.
//! * [`ranker`]: orders collected results.
//! * [`report`]: CSV and console output.

pub mod ranker;
pub mod report;
pub mod scanner;
