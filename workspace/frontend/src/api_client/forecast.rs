use common::{FetchError, ForecastRequest, FORECAST_ENDPOINT};
use serde_json::Value;
use web_sys::FormData;

use crate::api_client;

/// Submit a forecast request as multipart form data
pub async fn submit_forecast(request: &ForecastRequest) -> Result<Value, FetchError> {
    log::trace!("Submitting forecast for floor {}", request.floor);

    let form = FormData::new().map_err(|e| FetchError::Transport(format!("{:?}", e)))?;
    for (name, value) in request.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| FetchError::Transport(format!("{:?}", e)))?;
    }

    let result = api_client::post_form(FORECAST_ENDPOINT, form).await;
    match &result {
        Ok(_) => log::info!("Forecast response received for {} - {}", request.start_date, request.end_date),
        Err(e) => log::error!("Failed to submit forecast: {}", e),
    }
    result
}
