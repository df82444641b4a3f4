pub mod consumption;
pub mod forecast;

use common::FetchError;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::FormData;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get_json(endpoint: &str) -> Result<Value, FetchError> {
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error = FetchError::Transport(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    read_json("GET", endpoint, response).await
}

/// Common multipart POST request handler
pub async fn post_form(endpoint: &str, form: FormData) -> Result<Value, FetchError> {
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let error = FetchError::Transport(e.to_string());
            log::error!("POST {} - Failed to build request: {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = FetchError::Transport(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?;

    read_json("POST", endpoint, response).await
}

async fn read_json(method: &str, endpoint: &str, response: Response) -> Result<Value, FetchError> {
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        // Backend errors arrive as {"error": ...} with a 4xx status
        let error = match response.json::<Value>().await {
            Ok(body) => match common::backend_error(&body) {
                Some(message) => FetchError::Backend(message.to_string()),
                None => FetchError::Status(status),
            },
            Err(_) => FetchError::Status(status),
        };
        log::error!("{} {} - {}", method, endpoint, error);
        return Err(error);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let body = response.json::<Value>().await.map_err(|e| {
        let error = FetchError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, error);
        error
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(body)
}
