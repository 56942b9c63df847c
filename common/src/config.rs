pub const DEFAULT_CONCURRENCY: usize = 256;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on probes in flight at the same time.
    ///
    /// Values below 1 are treated as 1.
    pub concurrency: usize,
    /// 0 prints everything, 1 drops headers, 2 also drops the summary.
    pub quiet: u8,
}

impl Config {
    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            quiet: 0,
        }
    }
}
