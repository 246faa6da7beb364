//! PyO3 wrapper for the memoizing estimator
//!
//! Lets a Python UI call `estimate` on every input change without paying
//! for recomputation when nothing changed.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{cost_report_to_py, parse_configuration_input};
use crate::estimator::CostEstimator as RustEstimator;

/// Python wrapper for Rust CostEstimator
///
/// # Example (from Python)
///
/// ```python
/// from kodiak_cost_core import CostEstimator
///
/// estimator = CostEstimator()
/// report = estimator.estimate({
///     "weekly_hires": 150,
///     "support_hours_per_month": 6,
///     "infrastructure_tier": "standard",
///     "accelerators": {"sms": True, "riskScoring": True},
/// })
/// print(report["monthly_total"])
/// ```
#[pyclass(name = "CostEstimator")]
pub struct PyCostEstimator {
    inner: RustEstimator,
}

#[pymethods]
impl PyCostEstimator {
    #[new]
    fn new() -> Self {
        PyCostEstimator {
            inner: RustEstimator::new(),
        }
    }

    /// Compute (or reuse) the report for a configuration dict
    ///
    /// # Errors
    ///
    /// Raises ValueError for negative volumes or unknown tier/accelerator keys.
    fn estimate(&mut self, py: Python<'_>, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
        let config = parse_configuration_input(config)?.validate()?;
        let report = self.inner.estimate(&config);
        cost_report_to_py(py, report)
    }

    /// Number of times the model actually ran
    fn computations(&self) -> u64 {
        self.inner.computations()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
