//! Cost report produced by the estimator

use serde::Serialize;
use std::collections::BTreeMap;

use super::breakdown::CategoryBreakdown;
use super::config::{Accelerator, InfrastructureTier};

/// Monthly/annual operating-cost projection
///
/// Always a fresh derivation of one [`Configuration`]; nothing in here is
/// updated in place.
///
/// [`Configuration`]: super::config::Configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    /// Tier the infrastructure category was looked up from
    pub infrastructure_tier: InfrastructureTier,

    /// Support hours the labor category was priced from
    pub support_hours_per_month: u32,

    /// round(weekly_hires × 4.33)
    pub monthly_hires: u64,

    /// monthly_hires × 12
    pub annual_hires: u64,

    /// Hires routed to the advanced model (≈10%)
    pub exception_count: u64,

    pub ai: CategoryBreakdown,
    pub infrastructure: CategoryBreakdown,
    pub labor: CategoryBreakdown,

    /// ai + infrastructure + labor
    pub core_platform: f64,

    /// Enabled accelerators only, in display order
    pub accelerators: BTreeMap<Accelerator, CategoryBreakdown>,

    pub accelerator_subtotal: f64,
    pub monthly_total: f64,
    pub annual_total: f64,

    /// monthly_total / monthly_hires; `None` when there are no hires
    pub cost_per_hire: Option<f64>,
}

impl CostReport {
    /// Core categories followed by enabled accelerator categories
    pub fn categories(&self) -> impl Iterator<Item = &CategoryBreakdown> {
        [&self.ai, &self.infrastructure, &self.labor]
            .into_iter()
            .chain(self.accelerators.values())
    }

    pub fn accelerator(&self, accelerator: Accelerator) -> Option<&CategoryBreakdown> {
        self.accelerators.get(&accelerator)
    }
}
