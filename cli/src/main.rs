use anyhow::Result;
use clap::Parser;

use kodiak_cost_cli::cli::{Cli, Commands};
use kodiak_cost_cli::{commands, init_tracing};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level);

    match args.get_command() {
        Commands::Estimate(estimate) => commands::estimate::execute(&estimate)?,
        Commands::Schema => commands::schema::schema()?,
        Commands::Providers => commands::schema::providers()?,
    }

    Ok(())
}
