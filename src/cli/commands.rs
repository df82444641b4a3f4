pub mod inspect;
pub mod render;

pub use inspect::inspect;
pub use render::render;

use std::path::Path;

use anyhow::{Context, Result};
use common::{ConsumptionSummary, ContractVersion};
use tracing::{debug, info};

/// Reads a saved visualize response and decodes it per `contract`.
pub(crate) fn load_summary(input: &Path, contract: ContractVersion) -> Result<ConsumptionSummary> {
    info!("Loading consumption summary from {}", input.display());
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let body: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    debug!("Decoding summary with contract {}", contract);
    let summary = ConsumptionSummary::from_body(body, contract.summary_layout())
        .with_context(|| format!("Failed to decode {} as a {} summary", input.display(), contract))?;

    info!("Summary carries {} datasets", summary.dataset_count());
    Ok(summary)
}
