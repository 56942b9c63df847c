pub mod sweep;

use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pingsweep_common::config::{Config, DEFAULT_CONCURRENCY};
use pingsweep_common::network::range::Ipv4Range;
use pingsweep_common::network::target::{self, TargetError};

#[derive(Parser)]
#[command(name = "pingsweep")]
#[command(about = "Sweep an IPv4 range for hosts that answer ICMP echo.")]
#[command(version)]
pub struct CommandLine {
    /// First address of the range, e.g. 192.168.1.1
    #[arg(short, long, value_parser = target::parse_ipv4)]
    pub start: Ipv4Addr,

    /// Last address of the range (inclusive)
    #[arg(short, long, value_parser = target::parse_ipv4)]
    pub end: Ipv4Addr,

    /// Write results to this CSV file instead of the console
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of probes in flight
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Less decoration; repeat to also hide the summary
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    /// Parses `std::env::args`, leaving usage errors to the caller.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn range(&self) -> Result<Ipv4Range, TargetError> {
        Ok(Ipv4Range::new(self.start, self.end)?)
    }

    pub fn config(&self) -> Config {
        Config {
            concurrency: self.concurrency,
            quiet: self.quiet,
        }
    }
}
