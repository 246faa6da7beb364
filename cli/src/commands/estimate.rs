use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use kodiak_cost_core::{
    compute_config_hash, compute_cost_report, Configuration, ConfigurationInput, CostReport,
};

use crate::cli::EstimateArgs;
use crate::render::render_report;
use crate::scenario::{apply_overrides, load_scenario};

/// JSON output of `estimate --json`
#[derive(Debug, Serialize)]
pub struct EstimateOutput<'a> {
    pub config_hash: String,
    pub configuration: &'a Configuration,
    pub report: &'a CostReport,
}

/// Resolve the configuration from scenario file, environment and flags
pub fn resolve_configuration(args: &EstimateArgs) -> Result<Configuration> {
    let input = load_scenario(args.scenario.as_deref())?;
    finish_configuration(input, args)
}

/// Apply flag overrides to a loaded scenario and validate it
pub fn finish_configuration(
    mut input: ConfigurationInput,
    args: &EstimateArgs,
) -> Result<Configuration> {
    apply_overrides(&mut input, args);
    input
        .validate()
        .map_err(|e| {
            warn!(error = %e, "rejected configuration");
            e
        })
        .context("Invalid configuration")
}

/// Render the estimate for an already-validated configuration
pub fn render(config: &Configuration, json: bool) -> Result<String> {
    let report = compute_cost_report(config);

    if json {
        let output = EstimateOutput {
            config_hash: compute_config_hash(config)?,
            configuration: config,
            report: &report,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(render_report(&report))
    }
}

/// Execute the estimate command
pub fn execute(args: &EstimateArgs) -> Result<()> {
    let config = resolve_configuration(args)?;
    info!(
        weekly_hires = config.weekly_hires,
        tier = %config.infrastructure_tier,
        accelerators = config.accelerators.len(),
        "Estimating operating cost"
    );

    println!("{}", render(&config, args.json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::load_scenario_with_env;
    use kodiak_cost_core::{AcceleratorSet, EstimateError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Layer;

    fn scenario_without_env() -> ConfigurationInput {
        load_scenario_with_env(None, Some(config::Map::new())).unwrap()
    }

    #[test]
    fn test_json_output_shape() {
        let config = Configuration::default();
        let text = render(&config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["config_hash"].as_str().unwrap().len(), 64);
        assert_eq!(value["configuration"]["weekly_hires"], 150);
        assert_eq!(value["report"]["monthly_hires"], 650);
        assert!(value["report"]["accelerators"]["sms"].is_object());
    }

    #[test]
    fn test_json_output_is_stable() {
        let config = Configuration {
            accelerators: AcceleratorSet::all(),
            ..Configuration::default()
        };
        assert_eq!(render(&config, true).unwrap(), render(&config, true).unwrap());
    }

    #[test]
    fn test_flags_only_resolution() {
        let args = EstimateArgs {
            weekly_hires: Some(0),
            tier: Some("minimal".to_string()),
            no_accelerators: true,
            ..EstimateArgs::default()
        };
        let config = finish_configuration(scenario_without_env(), &args).unwrap();
        assert_eq!(config.weekly_hires, 0);
        assert_eq!(config.support_hours_per_month, 6);
        assert!(config.accelerators.is_empty());
    }

    #[test]
    fn test_invalid_flags_are_reported() {
        let args = EstimateArgs {
            weekly_hires: Some(-3),
            ..EstimateArgs::default()
        };
        let err = finish_configuration(scenario_without_env(), &args).unwrap_err();

        assert!(format!("{:#}", err).contains("weekly_hires"));
        assert_eq!(
            err.downcast_ref::<EstimateError>().and_then(|e| e.field()),
            Some("weekly_hires")
        );
    }

    /// Counts WARN events
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_rejection_emits_warning() {
        let args = EstimateArgs {
            tier: Some("enterprise".to_string()),
            ..EstimateArgs::default()
        };
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

        let result = tracing::subscriber::with_default(subscriber, || {
            finish_configuration(scenario_without_env(), &args)
        });

        assert!(result.is_err());
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
