//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict).
//! Reports cross as nested dicts; Python dicts keep insertion order, so line
//! items arrive in display order.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::BTreeMap;

use crate::models::{CategoryBreakdown, ConfigurationInput, CostReport};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Configuration Parser
// ========================================================================

/// Convert Python dict to [`ConfigurationInput`]
///
/// Missing keys fall back to the default configuration. Values are not
/// range-checked here; [`ConfigurationInput::validate`] does that.
///
/// # Errors
///
/// Returns PyErr if a value has the wrong Python type (e.g. a string for
/// `weekly_hires`) or `accelerators` is not a dict.
pub fn parse_configuration_input(py_config: &Bound<'_, PyDict>) -> PyResult<ConfigurationInput> {
    let defaults = ConfigurationInput::default();

    let weekly_hires: i64 = extract_with_default(py_config, "weekly_hires", defaults.weekly_hires)?;
    let support_hours_per_month: i64 = extract_with_default(
        py_config,
        "support_hours_per_month",
        defaults.support_hours_per_month,
    )?;
    let infrastructure_tier: String = extract_with_default(
        py_config,
        "infrastructure_tier",
        defaults.infrastructure_tier.clone(),
    )?;

    let accelerators = match py_config.get_item("accelerators")? {
        Some(py_accelerators) => {
            let toggles: Bound<'_, PyDict> = py_accelerators.downcast_into()?;
            let mut parsed = BTreeMap::new();
            for (key, enabled) in toggles.iter() {
                parsed.insert(key.extract::<String>()?, enabled.extract::<bool>()?);
            }
            parsed
        }
        None => defaults.accelerators,
    };

    Ok(ConfigurationInput {
        weekly_hires,
        support_hours_per_month,
        infrastructure_tier,
        accelerators,
    })
}

// ========================================================================
// Report Conversion
// ========================================================================

/// Convert a category to `{"name", "breakdown": {label: amount}, "total"}`
fn category_to_py<'py>(
    py: Python<'py>,
    category: &CategoryBreakdown,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", category.name())?;

    let breakdown = PyDict::new(py);
    for item in category.items() {
        breakdown.set_item(item.label.as_str(), item.amount)?;
    }
    dict.set_item("breakdown", breakdown)?;
    dict.set_item("total", category.total())?;

    Ok(dict)
}

/// Convert CostReport to Python dict
///
/// `cost_per_hire` is `None` when there are no monthly hires.
pub fn cost_report_to_py(py: Python<'_>, report: &CostReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("infrastructure_tier", report.infrastructure_tier.key())?;
    dict.set_item("support_hours_per_month", report.support_hours_per_month)?;
    dict.set_item("monthly_hires", report.monthly_hires)?;
    dict.set_item("annual_hires", report.annual_hires)?;
    dict.set_item("exception_count", report.exception_count)?;

    dict.set_item("ai", category_to_py(py, &report.ai)?)?;
    dict.set_item("infrastructure", category_to_py(py, &report.infrastructure)?)?;
    dict.set_item("labor", category_to_py(py, &report.labor)?)?;
    dict.set_item("core_platform", report.core_platform)?;

    let accelerators = PyDict::new(py);
    for (accelerator, category) in &report.accelerators {
        accelerators.set_item(accelerator.key(), category_to_py(py, category)?)?;
    }
    dict.set_item("accelerators", accelerators)?;

    dict.set_item("accelerator_subtotal", report.accelerator_subtotal)?;
    dict.set_item("monthly_total", report.monthly_total)?;
    dict.set_item("annual_total", report.annual_total)?;
    dict.set_item("cost_per_hire", report.cost_per_hire)?;

    Ok(dict.unbind())
}
