use common::{FetchError, VISUALIZE_ENDPOINT};
use serde_json::Value;

use crate::api_client;

/// Fetch the consumption summary behind the four charts
pub async fn get_consumption_summary() -> Result<Value, FetchError> {
    log::trace!("Fetching consumption summary");
    let result = api_client::get_json(VISUALIZE_ENDPOINT).await;
    if let Err(e) = &result {
        log::error!("Failed to fetch consumption summary: {}", e);
    }
    result
}
