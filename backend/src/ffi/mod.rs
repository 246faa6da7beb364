//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the cost model to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Use primitives, strings, dicts at boundary
//! 3. **Validate inputs**: Raw values go through `ConfigurationInput::validate`
//! 4. **Safe errors**: Convert all Rust errors to Python exceptions

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use crate::error::EstimateError;

pub mod estimator;
pub mod types;

impl From<EstimateError> for PyErr {
    fn from(err: EstimateError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
