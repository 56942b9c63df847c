use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use tracing::{Instrument, info_span};

use crate::terminal::{print, spinner};
use pingsweep_common::config::Config;
use pingsweep_common::network::range::Ipv4Range;
use pingsweep_common::result::ProbeResult;
use pingsweep_common::{success, warn};
use pingsweep_core::scanner::{self, SweepProgress};
use pingsweep_core::{ranker, report};

pub async fn sweep(range: Ipv4Range, output: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    let mut csv_out = match &output {
        Some(path) => {
            print::destination(&path.display().to_string(), cfg.quiet);
            Some(report::create_csv(path)?)
        }
        None => None,
    };

    print::header("starting ping sweep", cfg.quiet);

    let span = info_span!("sweep", indicatif.pb_show = true);
    spinner::start_sweep_spinner(&span, range.len());

    let progress_span = span.clone();
    let on_progress: Box<dyn Fn(SweepProgress) + Send + Sync> =
        Box::new(move |progress: SweepProgress| spinner::report_sweep_progress(&progress_span, progress));

    let start_time: Instant = Instant::now();
    let mut results: Vec<ProbeResult> = scanner::perform_sweep(range, cfg, Some(on_progress))
        .instrument(span)
        .await?;
    let elapsed = start_time.elapsed();

    ranker::rank_by_distance(&mut results);

    if results.is_empty() {
        print::no_results(cfg.quiet);
    }

    match csv_out.as_mut() {
        Some(out) => {
            let summary = report::write_csv(out, &results)?;
            if summary.failed > 0 {
                warn!("{} of {} rows could not be written", summary.failed, results.len());
            }
            if !summary.flushed {
                warn!("CSV output may be incomplete");
            }
            if summary.failed == 0 && summary.flushed {
                if let Some(path) = &output {
                    success!("Results written to {}", path.display());
                }
            }
        }
        None => {
            let stdout = io::stdout();
            report::write_console(stdout.lock(), &results).context("writing results to stdout")?;
        }
    }

    print::sweep_summary(results.len(), elapsed, cfg.quiet);
    Ok(())
}
