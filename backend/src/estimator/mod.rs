//! Cost estimation
//!
//! - `engine`: the pure cost model
//! - `memo`: single-entry cache for recompute-on-change callers
//! - `fingerprint`: stable configuration hashes

pub mod engine;
pub mod fingerprint;
pub mod memo;

pub use engine::{
    accelerator_costs, compute_cost_report, cost_per_hire, estimate, exception_count,
    monthly_hires,
};
pub use fingerprint::compute_config_hash;
pub use memo::CostEstimator;
