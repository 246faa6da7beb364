//! Pricing constants and schema documentation
//!
//! This module provides:
//! - Unit prices and usage assumptions (`rates`)
//! - Self-documenting pricing schema (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Prices live only in `rates.rs`. The schema documentation renders them
//! for the CLI command `kodiak-cost schema` and the Python bindings.

pub mod rates;
pub mod schema_docs;

// Re-exports
pub use rates::{InfrastructureCosts, TokenPricing, MILO_ADVANCED, MILO_STANDARD};
pub use schema_docs::{
    get_pricing_schema, pricing_elements, provider_reference, PricingCategory, PricingElement,
    PricingExample, PricingSchemaDoc, ProviderReference,
};
