//! State transitions of the two user-facing flows.
//!
//! The browser app performs the requests; everything that happens to the
//! page once a response (or failure) is in hand lives here so it can be
//! exercised without a browser.

use common::{ConsumptionSummary, FetchError, ForecastResponse, PlotEncoding, SummaryLayout};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::builder::build_chart;
use crate::color::ColorSource;
use crate::error::ChartError;
use crate::instance::{ChartBackend, ChartInstanceManager};
use crate::spec::ChartSlot;

/// What the forecast result region shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastPanel {
    pub revealed: bool,
    pub image_src: Option<String>,
    pub message: Option<String>,
}

impl ForecastPanel {
    /// Applies the outcome of one submission.
    ///
    /// A new image replaces everything shown before. A failure replaces the
    /// previous message but leaves the previous image as it was.
    pub fn apply(&mut self, outcome: Result<String, FetchError>) {
        self.revealed = true;
        match outcome {
            Ok(image_src) => {
                info!("Forecast plot received");
                self.image_src = Some(image_src);
                self.message = None;
            }
            Err(err) => {
                error!(%err, "Forecast request failed");
                self.message = Some(format!(
                    "An error occurred while fetching the forecast: {}. Please try again.",
                    err
                ));
            }
        }
    }
}

/// Decodes a forecast response body into an image source.
pub fn forecast_outcome(
    response: Result<Value, FetchError>,
    encoding: PlotEncoding,
) -> Result<String, FetchError> {
    ForecastResponse::from_body(response?)?.into_image_source(encoding)
}

/// One chart that could not be built or rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFailure {
    pub slot: ChartSlot,
    pub error: ChartError,
}

impl ChartFailure {
    pub fn message(&self) -> String {
        format!("Error creating {} chart: {}", self.slot, self.error)
    }
}

/// Per-chart outcome of rendering one summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualizationReport {
    pub rendered: Vec<ChartSlot>,
    pub failures: Vec<ChartFailure>,
}

/// Builds and renders every dataset present in `summary`.
///
/// Each chart runs in its own failure boundary: a failing chart is recorded
/// and the remaining ones are still attempted. A dataset that cannot be built
/// also disposes the chart its slot held, so no stale chart outlives the
/// response that replaced it.
pub fn render_summary<B: ChartBackend>(
    manager: &mut ChartInstanceManager<B>,
    summary: &ConsumptionSummary,
    colors: &mut dyn ColorSource,
) -> VisualizationReport {
    let mut report = VisualizationReport::default();

    for slot in ChartSlot::ALL {
        let Some(raw) = dataset_for(summary, slot) else {
            continue;
        };

        let outcome = match build_chart(slot, raw, colors) {
            Ok(spec) => manager.render_or_replace(slot, &spec),
            Err(error) => {
                if manager.dispose(slot) {
                    debug!(%slot, "Disposed chart left over from the previous summary");
                }
                Err(error)
            }
        };

        match outcome {
            Ok(()) => report.rendered.push(slot),
            Err(error) => {
                warn!(%slot, %error, "Chart construction failed");
                report.failures.push(ChartFailure { slot, error });
            }
        }
    }

    report
}

/// Raw dataset feeding `slot`, if the summary carries one.
pub fn dataset_for(summary: &ConsumptionSummary, slot: ChartSlot) -> Option<&Value> {
    match slot {
        ChartSlot::FloorWise => summary.floor_wise.as_ref(),
        ChartSlot::ApplianceWise => summary.appliance_wise.as_ref(),
        ChartSlot::FloorAppliance => summary.floor_appliance.as_ref(),
        ChartSlot::Hourly => summary.hourly.as_ref(),
    }
}

/// What the visualization results container shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualizationPanel {
    pub revealed: bool,
    pub messages: Vec<String>,
    pub rendered: Vec<ChartSlot>,
}

/// Applies one visualization response to the charts and the panel.
///
/// Request and backend failures never touch the chart instances.
pub fn visualize<B: ChartBackend>(
    manager: &mut ChartInstanceManager<B>,
    colors: &mut dyn ColorSource,
    layout: SummaryLayout,
    response: Result<Value, FetchError>,
) -> VisualizationPanel {
    let summary = response.and_then(|body| ConsumptionSummary::from_body(body, layout));

    let summary = match summary {
        Ok(summary) => summary,
        Err(err) => {
            error!(%err, "Visualization request failed");
            return VisualizationPanel {
                revealed: true,
                messages: vec![format!(
                    "An error occurred while visualizing the data: {}. Please try again.",
                    err
                )],
                rendered: Vec::new(),
            };
        }
    };

    if summary.dataset_count() == 0 {
        warn!("Consumption summary contained no datasets");
        return VisualizationPanel {
            revealed: true,
            messages: vec!["The consumption summary contained no datasets.".to_string()],
            rendered: Vec::new(),
        };
    }

    let report = render_summary(manager, &summary, colors);
    info!(
        rendered = report.rendered.len(),
        failed = report.failures.len(),
        "Visualization finished"
    );

    VisualizationPanel {
        revealed: true,
        messages: report.failures.iter().map(ChartFailure::message).collect(),
        rendered: report.rendered,
    }
}
