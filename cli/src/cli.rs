use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kodiak-cost",
    version,
    about = "Kodiak onboarding platform operating-cost calculator"
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Get the command to execute, defaulting to `estimate` with no overrides
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Estimate(EstimateArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate monthly and annual operating cost (default)
    Estimate(EstimateArgs),

    /// Print the pricing schema as JSON
    Schema,

    /// Print the provider reference table
    Providers,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Scenario file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// New hires per week
    #[arg(long, allow_negative_numbers = true)]
    pub weekly_hires: Option<i64>,

    /// Support hours per month
    #[arg(long, allow_negative_numbers = true)]
    pub support_hours: Option<i64>,

    /// Infrastructure tier: minimal, standard or production
    #[arg(long)]
    pub tier: Option<String>,

    /// Enable an accelerator (repeatable); replaces the scenario's toggles
    #[arg(short, long = "accelerator", value_name = "KEY")]
    pub accelerators: Vec<String>,

    /// Disable every accelerator
    #[arg(long, conflicts_with = "accelerators")]
    pub no_accelerators: bool,

    /// Print the configuration, its hash and the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_estimate() {
        let cli = Cli::try_parse_from(["kodiak-cost"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Estimate(args) if args.scenario.is_none()));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_estimate_flags() {
        let cli = Cli::try_parse_from([
            "kodiak-cost",
            "estimate",
            "--weekly-hires",
            "200",
            "--tier",
            "production",
            "-a",
            "sms",
            "--accelerator",
            "batchMode",
            "--json",
        ])
        .unwrap();

        let Commands::Estimate(args) = cli.get_command() else {
            panic!("expected estimate");
        };
        assert_eq!(args.weekly_hires, Some(200));
        assert_eq!(args.tier.as_deref(), Some("production"));
        assert_eq!(args.accelerators, vec!["sms", "batchMode"]);
        assert!(args.json);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["kodiak-cost", "estimate", "--weekly-hires", "-5"]).unwrap();
        let Commands::Estimate(args) = cli.get_command() else {
            panic!("expected estimate");
        };
        assert_eq!(args.weekly_hires, Some(-5));
    }

    #[test]
    fn test_no_accelerators_conflicts_with_accelerator() {
        let result = Cli::try_parse_from([
            "kodiak-cost",
            "estimate",
            "--no-accelerators",
            "-a",
            "sms",
        ]);
        assert!(result.is_err());
    }
}
