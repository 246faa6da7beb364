//! Memoizing estimator
//!
//! Presentation layers recompute on every input change. Most changes are
//! no-ops (re-renders, the same value typed twice), so the estimator keeps
//! the last configuration/report pair and skips recomputation when the
//! configuration is unchanged. A cached report is always equal to a fresh
//! [`compute_cost_report`] of the same configuration.

use tracing::trace;

use super::engine::compute_cost_report;
use crate::models::{Configuration, CostReport};

/// Single-entry report cache keyed by configuration
#[derive(Debug, Default)]
pub struct CostEstimator {
    last: Option<(Configuration, CostReport)>,
    computations: u64,
}

impl CostEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for `config`, recomputed only if it differs from the last one
    pub fn estimate(&mut self, config: &Configuration) -> &CostReport {
        if !matches!(&self.last, Some((cached, _)) if cached == config) {
            self.last = None;
        }

        let computations = &mut self.computations;
        let (_, report) = self.last.get_or_insert_with(|| {
            *computations += 1;
            trace!(computations = *computations, "recomputing cost report");
            (config.clone(), compute_cost_report(config))
        });
        report
    }

    /// Most recent report, if any
    pub fn last_report(&self) -> Option<&CostReport> {
        self.last.as_ref().map(|(_, report)| report)
    }

    /// Number of times the model actually ran
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accelerator, InfrastructureTier};

    #[test]
    fn test_same_config_is_computed_once() {
        let mut estimator = CostEstimator::new();
        let config = Configuration::default();

        estimator.estimate(&config);
        estimator.estimate(&config);
        estimator.estimate(&config.clone());

        assert_eq!(estimator.computations(), 1);
    }

    #[test]
    fn test_changed_config_recomputes() {
        let mut estimator = CostEstimator::new();
        let mut config = Configuration::default();

        let first_total = estimator.estimate(&config).monthly_total;
        config.infrastructure_tier = InfrastructureTier::Production;
        let second_total = estimator.estimate(&config).monthly_total;

        assert_eq!(estimator.computations(), 2);
        assert!((second_total - first_total - (133.0 - 47.0)).abs() < 1e-9);
    }

    #[test]
    fn test_cached_report_equals_fresh_report() {
        let mut estimator = CostEstimator::new();
        let mut config = Configuration::default();
        config.accelerators.set(Accelerator::DocCapture, true);

        let cached = estimator.estimate(&config).clone();
        let again = estimator.estimate(&config).clone();

        assert_eq!(cached, compute_cost_report(&config));
        assert_eq!(again, cached);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let mut estimator = CostEstimator::new();
        let config = Configuration::default();

        estimator.estimate(&config);
        estimator.clear();
        assert!(estimator.last_report().is_none());

        estimator.estimate(&config);
        assert_eq!(estimator.computations(), 2);
    }
}
