use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contract::PlotEncoding;
use crate::error::FetchError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields submitted to the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub floor: String,
}

impl ForecastRequest {
    /// Validates raw form values.
    pub fn new(start_date: &str, end_date: &str, floor: &str) -> Result<Self, FetchError> {
        let start = parse_date("start_date", start_date)?;
        let end = parse_date("end_date", end_date)?;
        if end < start {
            return Err(FetchError::InvalidInput(format!(
                "end_date {} is before start_date {}",
                end, start
            )));
        }

        let floor = floor.trim();
        if floor.is_empty() {
            return Err(FetchError::InvalidInput("floor must not be empty".to_string()));
        }

        Ok(Self {
            start_date: start,
            end_date: end,
            floor: floor.to_string(),
        })
    }

    /// Multipart field set in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", self.start_date.format(DATE_FORMAT).to_string()),
            ("end_date", self.end_date.format(DATE_FORMAT).to_string()),
            ("floor", self.floor.clone()),
        ]
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        FetchError::InvalidInput(format!("{} '{}' is not a YYYY-MM-DD date: {}", field, value, e))
    })
}

/// Decoded forecast response body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub plot_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ForecastResponse {
    pub fn from_body(body: serde_json::Value) -> Result<Self, FetchError> {
        Ok(serde_json::from_value(body)?)
    }

    /// Turns the response into an `<img src>` value for the given encoding.
    pub fn into_image_source(self, encoding: PlotEncoding) -> Result<String, FetchError> {
        if let Some(error) = self.error {
            return Err(FetchError::Backend(error));
        }

        let plot = self
            .plot_url
            .filter(|plot| !plot.is_empty())
            .ok_or_else(|| FetchError::Decode("response carries neither plot_url nor error".to_string()))?;

        debug!(?encoding, len = plot.len(), "Decoded forecast plot");
        Ok(match encoding {
            PlotEncoding::Url => plot,
            PlotEncoding::Base64Png => format!("data:image/png;base64,{}", plot),
        })
    }
}
