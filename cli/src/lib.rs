//! Command-line front end for the Kodiak cost model
//!
//! Loads a scenario, validates it through `kodiak_cost_core` and prints
//! either a colored breakdown or a JSON document.

pub mod cli;
pub mod commands;
pub mod render;
pub mod scenario;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins over `default_level`. Logs go to stderr so that JSON
/// output on stdout stays parseable.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
