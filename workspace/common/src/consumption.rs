use serde_json::Value;
use tracing::{debug, warn};

use crate::contract::SummaryLayout;
use crate::error::FetchError;

const FLOOR_WISE_KEY: &str = "floor_wise_consumption";
const APPLIANCE_WISE_KEY: &str = "appliance_wise_consumption";
const FLOOR_APPLIANCE_KEY: &str = "floor_appliance_consumption";
const HOURLY_KEY: &str = "hourly_consumption";

/// Consumption summary split into its four raw sub-datasets.
///
/// The sub-datasets stay raw JSON: each one is validated separately by the
/// chart that consumes it, so a malformed dataset only fails its own chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsumptionSummary {
    pub floor_wise: Option<Value>,
    pub appliance_wise: Option<Value>,
    pub floor_appliance: Option<Value>,
    pub hourly: Option<Value>,
}

impl ConsumptionSummary {
    /// Splits a decoded response body according to the configured layout.
    pub fn from_body(body: Value, layout: SummaryLayout) -> Result<Self, FetchError> {
        if let Some(error) = crate::backend_error(&body) {
            return Err(FetchError::Backend(error.to_string()));
        }

        let Value::Object(mut object) = body else {
            return Err(FetchError::Decode(
                "consumption summary must be a JSON object".to_string(),
            ));
        };

        let summary = match layout {
            SummaryLayout::Flat => Self {
                floor_wise: Some(Value::Object(object)),
                ..Self::default()
            },
            SummaryLayout::Nested => {
                let summary = Self {
                    floor_wise: object.remove(FLOOR_WISE_KEY),
                    appliance_wise: object.remove(APPLIANCE_WISE_KEY),
                    floor_appliance: object.remove(FLOOR_APPLIANCE_KEY),
                    hourly: object.remove(HOURLY_KEY),
                };
                for key in object.keys() {
                    warn!(key = %key, "Ignoring unknown key in consumption summary");
                }
                summary
            }
        };

        debug!(?layout, datasets = summary.dataset_count(), "Decoded consumption summary");
        Ok(summary)
    }

    /// Number of sub-datasets present.
    pub fn dataset_count(&self) -> usize {
        [
            &self.floor_wise,
            &self.appliance_wise,
            &self.floor_appliance,
            &self.hourly,
        ]
        .iter()
        .filter(|dataset| dataset.is_some())
        .count()
    }
}
