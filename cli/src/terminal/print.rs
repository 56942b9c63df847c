use std::time::Duration;

use colored::*;
use pingsweep_common::logging::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Emits a decorative line on the log stream, without a level symbol.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PINGSWEEP v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(side).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn sweep_summary(active_hosts: usize, total_time: Duration, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let noun: &str = if active_hosts == 1 { "active host" } else { "active hosts" };
    let active: ColoredString = format!("{active_hosts} {noun}").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Sweep complete: {active} in {elapsed}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match q_level {
        0 => {
            fat_separator();
            centerln(&output);
            fat_separator();
        }
        _ => print(&output),
    }
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    header("zero hosts responded", q_level);
    print(&format!("{}", "No address in the range answered a ping.".red().bold()));
}

pub fn destination(path: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let key: ColoredString = "Output".color(colors::PRIMARY);
    let arrow: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{arrow} {key}: {}", path.color(colors::ACCENT)));
}
