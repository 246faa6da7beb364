//! Kodiak Cost Model - Rust Engine
//!
//! Operating-cost projection for the Milo onboarding platform: volume and
//! feature toggles in, a categorized monthly/annual cost breakdown out.
//!
//! # Architecture
//!
//! - **models**: Domain types (Configuration, CategoryBreakdown, CostReport)
//! - **costs**: Unit prices and pricing schema documentation
//! - **estimator**: The cost model, memoizing estimator, config fingerprints
//! - **format**: USD display formatting
//!
//! # Critical Invariants
//!
//! 1. The cost model is a pure function of a validated `Configuration`
//! 2. Every total is the in-order sum of its line items
//! 3. Invalid input is rejected, never coerced to zero
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod costs;
pub mod error;
pub mod estimator;
pub mod format;
pub mod models;

// Re-exports for convenience
pub use error::EstimateError;
pub use estimator::{compute_config_hash, compute_cost_report, estimate, CostEstimator};
pub use models::{
    Accelerator, AcceleratorSet, CategoryBreakdown, Configuration, ConfigurationInput,
    CostReport, InfrastructureTier, LineItem,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Compute a cost report from a configuration dict.
///
/// Missing keys take the calculator defaults. Raises ValueError on negative
/// volumes or unknown tier/accelerator keys.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "compute_cost_report")]
fn py_compute_cost_report(
    py: Python<'_>,
    config: &Bound<'_, pyo3::types::PyDict>,
) -> PyResult<Py<pyo3::types::PyDict>> {
    let input = ffi::types::parse_configuration_input(config)?;
    let report = estimate(&input)?;
    ffi::types::cost_report_to_py(py, &report)
}

/// Get the pricing schema documentation as a JSON string.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "get_pricing_schema")]
fn py_get_pricing_schema() -> PyResult<String> {
    Ok(costs::get_pricing_schema()?)
}

/// Format a USD amount the way the report renders it.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "format_currency", signature = (value, decimals = 2))]
fn py_format_currency(value: f64, decimals: usize) -> String {
    format::format_currency(value, decimals)
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn kodiak_cost_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::estimator::PyCostEstimator>()?;
    m.add_function(wrap_pyfunction!(py_compute_cost_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_pricing_schema, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_currency, m)?)?;
    Ok(())
}
