//! Estimator configuration
//!
//! Two layers:
//! - [`ConfigurationInput`]: raw values as a presentation layer or scenario
//!   file delivers them (signed integers, string keys)
//! - [`Configuration`]: the validated record the cost model consumes
//!
//! Nothing is coerced. A negative volume or an unknown key is rejected with
//! [`EstimateError::InvalidInput`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::EstimateError;

/// Deployment scale profile with a fixed monthly cost table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureTier {
    /// Lambda + DynamoDB, pay-per-use
    Minimal,
    /// ECS Fargate + single-AZ RDS
    Standard,
    /// Multi-AZ Fargate + RDS
    Production,
}

impl InfrastructureTier {
    pub const ALL: [InfrastructureTier; 3] = [
        InfrastructureTier::Minimal,
        InfrastructureTier::Standard,
        InfrastructureTier::Production,
    ];

    /// Wire key (`minimal`, `standard`, `production`)
    pub fn key(self) -> &'static str {
        match self {
            InfrastructureTier::Minimal => "minimal",
            InfrastructureTier::Standard => "standard",
            InfrastructureTier::Production => "production",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            InfrastructureTier::Minimal => "Minimal",
            InfrastructureTier::Standard => "Standard",
            InfrastructureTier::Production => "Production",
        }
    }

    /// Short description of the deployment behind the tier
    pub fn description(self) -> &'static str {
        match self {
            InfrastructureTier::Minimal => "Lambda + DynamoDB",
            InfrastructureTier::Standard => "Fargate + RDS",
            InfrastructureTier::Production => "Multi-AZ, HA",
        }
    }
}

impl fmt::Display for InfrastructureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InfrastructureTier {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InfrastructureTier::ALL
            .into_iter()
            .find(|tier| tier.key() == s)
            .ok_or_else(|| {
                EstimateError::invalid(
                    "infrastructure_tier",
                    format!(
                        "unknown tier '{}', expected one of: minimal, standard, production",
                        s
                    ),
                )
            })
    }
}

/// Optional feature module with its own incremental monthly cost
///
/// Variant order is display order; reports list enabled accelerators in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accelerator {
    Sms,
    DocCapture,
    RiskScoring,
    I9Command,
    BatchMode,
    SlackTeams,
}

impl Accelerator {
    pub const ALL: [Accelerator; 6] = [
        Accelerator::Sms,
        Accelerator::DocCapture,
        Accelerator::RiskScoring,
        Accelerator::I9Command,
        Accelerator::BatchMode,
        Accelerator::SlackTeams,
    ];

    /// Wire key (`sms`, `docCapture`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Accelerator::Sms => "sms",
            Accelerator::DocCapture => "docCapture",
            Accelerator::RiskScoring => "riskScoring",
            Accelerator::I9Command => "i9Command",
            Accelerator::BatchMode => "batchMode",
            Accelerator::SlackTeams => "slackTeams",
        }
    }

    /// Name used as the heading of the accelerator's cost category
    pub fn display_name(self) -> &'static str {
        match self {
            Accelerator::Sms => "SMS Concierge",
            Accelerator::DocCapture => "Smart Document Capture",
            Accelerator::RiskScoring => "Predictive Risk Scoring",
            Accelerator::I9Command => "I-9 Deadline Command Center",
            Accelerator::BatchMode => "Batch Onboarding Mode",
            Accelerator::SlackTeams => "Slack & Teams Integration",
        }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Accelerator {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accelerator::ALL
            .into_iter()
            .find(|acc| acc.key() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Accelerator::ALL.iter().map(|a| a.key()).collect();
                EstimateError::invalid(
                    "accelerators",
                    format!(
                        "unknown accelerator '{}', expected one of: {}",
                        s,
                        known.join(", ")
                    ),
                )
            })
    }
}

/// Set of enabled accelerators, iterated in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcceleratorSet(BTreeSet<Accelerator>);

impl AcceleratorSet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Accelerator::ALL.into_iter().collect()
    }

    /// Builder-style insert
    pub fn with(mut self, accelerator: Accelerator) -> Self {
        self.0.insert(accelerator);
        self
    }

    /// Turn a single toggle on or off
    pub fn set(&mut self, accelerator: Accelerator, enabled: bool) {
        if enabled {
            self.0.insert(accelerator);
        } else {
            self.0.remove(&accelerator);
        }
    }

    pub fn contains(&self, accelerator: Accelerator) -> bool {
        self.0.contains(&accelerator)
    }

    pub fn iter(&self) -> impl Iterator<Item = Accelerator> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Accelerator> for AcceleratorSet {
    fn from_iter<I: IntoIterator<Item = Accelerator>>(iter: I) -> Self {
        AcceleratorSet(iter.into_iter().collect())
    }
}

/// Validated estimator configuration
///
/// # Example
/// ```
/// use kodiak_cost_core::{Accelerator, AcceleratorSet, Configuration, InfrastructureTier};
///
/// let config = Configuration {
///     weekly_hires: 150,
///     support_hours_per_month: 6,
///     infrastructure_tier: InfrastructureTier::Standard,
///     accelerators: AcceleratorSet::none().with(Accelerator::Sms),
/// };
/// assert!(config.accelerators.contains(Accelerator::Sms));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// New hires onboarded per week
    pub weekly_hires: u32,

    /// Human support hours billed per month
    pub support_hours_per_month: u32,

    /// Selected infrastructure profile
    pub infrastructure_tier: InfrastructureTier,

    /// Enabled accelerators
    pub accelerators: AcceleratorSet,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            weekly_hires: 150,
            support_hours_per_month: 6,
            infrastructure_tier: InfrastructureTier::Standard,
            accelerators: AcceleratorSet::none()
                .with(Accelerator::Sms)
                .with(Accelerator::RiskScoring)
                .with(Accelerator::I9Command)
                .with(Accelerator::SlackTeams),
        }
    }
}

/// Unvalidated configuration as supplied by an outer layer
///
/// Missing fields fall back to [`Configuration::default`]. Accelerators are
/// a toggle map keyed by wire key; keys absent from the map are off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationInput {
    pub weekly_hires: i64,
    pub support_hours_per_month: i64,
    pub infrastructure_tier: String,
    pub accelerators: BTreeMap<String, bool>,
}

impl Default for ConfigurationInput {
    fn default() -> Self {
        ConfigurationInput::from(&Configuration::default())
    }
}

impl From<&Configuration> for ConfigurationInput {
    fn from(config: &Configuration) -> Self {
        ConfigurationInput {
            weekly_hires: i64::from(config.weekly_hires),
            support_hours_per_month: i64::from(config.support_hours_per_month),
            infrastructure_tier: config.infrastructure_tier.key().to_string(),
            accelerators: Accelerator::ALL
                .into_iter()
                .map(|acc| (acc.key().to_string(), config.accelerators.contains(acc)))
                .collect(),
        }
    }
}

impl ConfigurationInput {
    /// Validate raw input into a [`Configuration`]
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if:
    /// - a volume is negative or exceeds `u32::MAX`
    /// - the tier key is unknown
    /// - an accelerator key is unknown (even when toggled off)
    pub fn validate(&self) -> Result<Configuration, EstimateError> {
        let weekly_hires = non_negative("weekly_hires", self.weekly_hires)?;
        let support_hours_per_month =
            non_negative("support_hours_per_month", self.support_hours_per_month)?;
        let infrastructure_tier = self.infrastructure_tier.parse::<InfrastructureTier>()?;

        let mut accelerators = AcceleratorSet::none();
        for (key, enabled) in &self.accelerators {
            let accelerator = key.parse::<Accelerator>()?;
            accelerators.set(accelerator, *enabled);
        }

        Ok(Configuration {
            weekly_hires,
            support_hours_per_month,
            infrastructure_tier,
            accelerators,
        })
    }
}

fn non_negative(field: &str, value: i64) -> Result<u32, EstimateError> {
    if value < 0 {
        return Err(EstimateError::invalid(
            field,
            format!("must be >= 0, got {}", value),
        ));
    }
    u32::try_from(value).map_err(|_| {
        EstimateError::invalid(field, format!("must be <= {}, got {}", u32::MAX, value))
    })
}
