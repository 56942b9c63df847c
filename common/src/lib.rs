//! Shared building blocks for `pingsweep`.
//!
//! * [`config`]: runtime settings handed from the command line to the sweep.
//! * [`network`]: IPv4 ranges and address parsing.
//! * [`result`]: the per-host record produced by a sweep.
//! * [`logging`]: `tracing` wrappers used across the workspace.

pub mod config;
pub mod logging;
pub mod network;
pub mod result;

#[doc(hidden)]
pub use tracing;
