//! Output of a ranked sweep, either as a CSV file or as plain lines on a console.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use pingsweep_common::result::ProbeResult;
use pingsweep_common::{error, info};

pub const CSV_HEADER: [&str; 2] = ["IP", "Hostname"];
pub const CONSOLE_HEADER: &str = "IP, Hostname";

pub type CsvFile = BufWriter<File>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub written: usize,
    pub failed: usize,
    /// `false` when the final flush failed and trailing rows may be missing.
    pub flushed: bool,
}

/// Creates (or truncates) the CSV destination.
///
/// Called before the sweep starts so an unwritable path fails fast.
pub fn create_csv(path: &Path) -> anyhow::Result<CsvFile> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes the header and one row per result, then flushes.
///
/// Each record is encoded on its own and handed to `out` in one `write_all`, so a failing row
/// never leaves a half-written record for the next one to append to. Row and flush failures
/// are logged; only a failed header is returned as an error.
pub fn write_csv<W: Write>(out: &mut W, results: &[ProbeResult]) -> anyhow::Result<ReportSummary> {
    let header = encode_record(CSV_HEADER).context("encoding CSV header")?;
    out.write_all(&header).context("writing CSV header")?;

    let mut summary = ReportSummary::default();
    for result in results {
        let ip = result.address.to_string();
        let hostname = result.hostname.to_string();

        let written = encode_record([ip.as_str(), hostname.as_str()])
            .and_then(|record| out.write_all(&record));

        match written {
            Ok(()) => {
                summary.written += 1;
                info!("Wrote to CSV: {ip}, {hostname}");
            }
            Err(e) => {
                summary.failed += 1;
                error!("Error writing {ip} to CSV: {e}");
            }
        }
    }

    match out.flush() {
        Ok(()) => summary.flushed = true,
        Err(e) => error!("Error flushing CSV output: {e}"),
    }
    Ok(summary)
}

fn encode_record(fields: [&str; 2]) -> io::Result<Vec<u8>> {
    let mut encoder = csv::Writer::from_writer(Vec::new());
    encoder.write_record(fields)?;
    encoder
        .into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))
}

/// Writes `IP, Hostname` followed by one `<ip>, <hostname>` line per result.
pub fn write_console<W: Write>(mut out: W, results: &[ProbeResult]) -> io::Result<()> {
    writeln!(out, "{CONSOLE_HEADER}")?;
    for result in results {
        writeln!(out, "{}, {}", result.address, result.hostname)?;
    }
    out.flush()
}
