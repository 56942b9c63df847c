//! Logging macros shared by every crate in the workspace.
//!
//! Each macro forwards to `tracing` under a fixed target so the terminal formatter can pick a
//! symbol for it. `success!` is an `INFO` event under [`SUCCESS_TARGET`].

pub const SUCCESS_TARGET: &str = "pingsweep::success";
pub const PRINT_TARGET: &str = "pingsweep::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "pingsweep", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "pingsweep::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "pingsweep", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "pingsweep", $($arg)*)
    };
}
