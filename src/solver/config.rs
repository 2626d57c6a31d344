//! Solver configuration

use std::num::NonZeroUsize;
use std::thread;

/// Tunables for a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Parallelism degree for ranking passes; only affects latency
    pub workers: usize,
    /// How many recommendations to show by default
    pub top_n: usize,
}

impl SolverConfig {
    pub const DEFAULT_TOP_N: usize = 10;

    /// Create a config with `workers` ranking threads
    #[must_use]
    pub const fn new(workers: usize) -> Self {
        Self {
            workers,
            top_n: Self::DEFAULT_TOP_N,
        }
    }

    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(thread::available_parallelism().map_or(1, NonZeroUsize::get))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_available_parallelism() {
        let config = SolverConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn builder_overrides() {
        let config = SolverConfig::new(3).with_top_n(5);
        assert_eq!(config.workers, 3);
        assert_eq!(config.top_n, 5);
    }
}
