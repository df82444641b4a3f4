//! Common transport-layer types shared between the browser dashboard and the
//! offline CLI. These structs mirror the consumption backend's request and
//! response payloads so both consumers decode them the same way.

mod consumption;
mod contract;
mod error;
mod forecast;

pub use consumption::ConsumptionSummary;
pub use contract::{ContractVersion, PlotEncoding, SummaryLayout};
pub use error::FetchError;
pub use forecast::{ForecastRequest, ForecastResponse};

/// Endpoint that accepts the forecast form.
pub const FORECAST_ENDPOINT: &str = "/forecast";

/// Endpoint that serves the consumption summary.
pub const VISUALIZE_ENDPOINT: &str = "/visualize";

/// Extracts an explicit `{"error": "..."}` message from a decoded body.
///
/// Only a string-valued `error` key counts; anything else is treated as data.
pub fn backend_error(body: &serde_json::Value) -> Option<&str> {
    body.as_object()
        .and_then(|object| object.get("error"))
        .and_then(|error| error.as_str())
}
