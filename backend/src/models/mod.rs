//! Domain models for the cost estimator

pub mod breakdown;
pub mod config;
pub mod report;

// Re-exports
pub use breakdown::{CategoryBreakdown, LineItem};
pub use config::{
    Accelerator, AcceleratorSet, Configuration, ConfigurationInput, InfrastructureTier,
};
pub use report::CostReport;
