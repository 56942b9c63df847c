use colored::*;
use indicatif::ProgressStyle;
use pingsweep_core::scanner::SweepProgress;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Prepares the sweep span's spinner; the bar itself appears once the span is entered.
pub fn start_sweep_spinner(span: &Span, total: u64) {
    span.pb_set_style(&progress_style());
    span.pb_set_length(total);
    span.pb_set_message(&format!("Probing {} addresses...", total.to_string().bold()));
}

pub fn report_sweep_progress(span: &Span, progress: SweepProgress) {
    span.pb_set_position(progress.probed);
    span.pb_set_message(
        &format!(
            "Probed {}/{} addresses, {} alive so far...",
            progress.probed,
            progress.total,
            format!("{}", progress.found).green().bold()
        )
        .color(colors::TEXT_DEFAULT)
        .to_string(),
    );
}
