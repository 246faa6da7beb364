//! Scenario loading
//!
//! Layers, lowest to highest precedence:
//! 1. calculator defaults (`ConfigurationInput::default`)
//! 2. scenario file (`--scenario`)
//! 3. `KODIAK__*` environment variables
//! 4. command-line flags
//!
//! The result is raw input; the core validates ranges and keys. Scalar
//! types are checked here, before `config` gets a chance to convert them:
//! `weekly_hires = 12.7`, `true` or `"yes"` is rejected, not turned into a
//! number.

use anyhow::{Context, Result};
use config::{Config, Environment, File, Value, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use kodiak_cost_core::{Accelerator, ConfigurationInput, EstimateError};

use crate::cli::EstimateArgs;

pub const ENV_PREFIX: &str = "KODIAK";
pub const ENV_SEPARATOR: &str = "__";

/// Load a scenario from an optional file plus the process environment
pub fn load_scenario(path: Option<&Path>) -> Result<ConfigurationInput> {
    load_scenario_with_env(path, None)
}

/// Same as [`load_scenario`], with an explicit environment map instead of
/// the process environment when `env` is `Some`
pub fn load_scenario_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<ConfigurationInput> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!(path = %path.display(), "loading scenario file");
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(env),
    );

    let settings = builder.build().context("Failed to load scenario")?;
    let raw: RawScenario = settings
        .try_deserialize()
        .context("Scenario has invalid structure")?;
    let mut input = raw.into_input().map_err(|e| {
        warn!(error = %e, "rejected scenario");
        e
    })?;
    normalize_accelerator_keys(&mut input);

    debug!(?input, "scenario loaded");
    Ok(input)
}

/// Scenario as loaded, before scalar type checks
#[derive(Debug, Default, Deserialize)]
struct RawScenario {
    weekly_hires: Option<Value>,
    support_hours_per_month: Option<Value>,
    infrastructure_tier: Option<Value>,
    accelerators: Option<BTreeMap<String, Value>>,
}

impl RawScenario {
    /// Fill missing fields from the defaults, rejecting mistyped ones
    fn into_input(self) -> Result<ConfigurationInput, EstimateError> {
        let defaults = ConfigurationInput::default();

        let weekly_hires = match self.weekly_hires {
            Some(value) => integer("weekly_hires", value)?,
            None => defaults.weekly_hires,
        };
        let support_hours_per_month = match self.support_hours_per_month {
            Some(value) => integer("support_hours_per_month", value)?,
            None => defaults.support_hours_per_month,
        };
        let infrastructure_tier = match self.infrastructure_tier {
            Some(value) => string("infrastructure_tier", value)?,
            None => defaults.infrastructure_tier,
        };
        let accelerators = match self.accelerators {
            Some(toggles) => toggles
                .into_iter()
                .map(|(key, value)| Ok((key, boolean("accelerators", value)?)))
                .collect::<Result<_, EstimateError>>()?,
            None => defaults.accelerators,
        };

        Ok(ConfigurationInput {
            weekly_hires,
            support_hours_per_month,
            infrastructure_tier,
            accelerators,
        })
    }
}

fn type_error(field: &str, expected: &str, value: &Value) -> EstimateError {
    EstimateError::InvalidInput {
        field: field.to_string(),
        reason: format!("must be {}, got {}", expected, kind_name(&value.kind)),
    }
}

fn kind_name(kind: &ValueKind) -> String {
    match kind {
        ValueKind::Nil => "nothing".to_string(),
        ValueKind::Boolean(b) => format!("boolean {}", b),
        ValueKind::I64(n) => format!("integer {}", n),
        ValueKind::I128(n) => format!("integer {}", n),
        ValueKind::U64(n) => format!("integer {}", n),
        ValueKind::U128(n) => format!("integer {}", n),
        ValueKind::Float(x) => format!("float {}", x),
        ValueKind::String(s) => format!("string {:?}", s),
        ValueKind::Table(_) => "a table".to_string(),
        ValueKind::Array(_) => "an array".to_string(),
    }
}

fn integer(field: &str, value: Value) -> Result<i64, EstimateError> {
    let out_of_range = || EstimateError::InvalidInput {
        field: field.to_string(),
        reason: "integer out of range".to_string(),
    };
    match value.kind {
        ValueKind::I64(n) => Ok(n),
        ValueKind::I128(n) => i64::try_from(n).map_err(|_| out_of_range()),
        ValueKind::U64(n) => i64::try_from(n).map_err(|_| out_of_range()),
        ValueKind::U128(n) => i64::try_from(n).map_err(|_| out_of_range()),
        _ => Err(type_error(field, "an integer", &value)),
    }
}

fn string(field: &str, value: Value) -> Result<String, EstimateError> {
    match value.kind {
        ValueKind::String(s) => Ok(s),
        _ => Err(type_error(field, "a string", &value)),
    }
}

fn boolean(field: &str, value: Value) -> Result<bool, EstimateError> {
    match value.kind {
        ValueKind::Boolean(b) => Ok(b),
        _ => Err(type_error(field, "true or false", &value)),
    }
}

/// Map case-insensitive accelerator keys back to their wire spelling
///
/// `config` lowercases keys coming from the environment (and, depending on
/// source, from files), which would turn `docCapture` into `doccapture`.
/// Keys that match nothing are left alone so validation still rejects them.
fn normalize_accelerator_keys(input: &mut ConfigurationInput) {
    let toggles = std::mem::take(&mut input.accelerators);
    input.accelerators = toggles
        .into_iter()
        .map(|(key, enabled)| {
            let canonical = Accelerator::ALL
                .into_iter()
                .find(|acc| acc.key().eq_ignore_ascii_case(&key))
                .map(|acc| acc.key().to_string())
                .unwrap_or(key);
            (canonical, enabled)
        })
        .collect();
}

/// Apply command-line overrides on top of a loaded scenario
pub fn apply_overrides(input: &mut ConfigurationInput, args: &EstimateArgs) {
    if let Some(weekly_hires) = args.weekly_hires {
        input.weekly_hires = weekly_hires;
    }
    if let Some(support_hours) = args.support_hours {
        input.support_hours_per_month = support_hours;
    }
    if let Some(tier) = &args.tier {
        input.infrastructure_tier = tier.clone();
    }

    if args.no_accelerators || !args.accelerators.is_empty() {
        input.accelerators = Accelerator::ALL
            .into_iter()
            .map(|acc| (acc.key().to_string(), false))
            .collect();
        for key in &args.accelerators {
            input.accelerators.insert(key.clone(), true);
        }
    }
}
