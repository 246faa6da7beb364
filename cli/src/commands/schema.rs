use anyhow::Result;
use tracing::info;

use kodiak_cost_core::costs::get_pricing_schema;

use crate::render::render_providers;

/// Execute the schema command
///
/// Prints the pricing schema document as JSON
pub fn schema() -> Result<()> {
    info!("Generating pricing schema");
    println!("{}", get_pricing_schema()?);
    Ok(())
}

/// Execute the providers command
pub fn providers() -> Result<()> {
    print!("{}", render_providers());
    Ok(())
}
