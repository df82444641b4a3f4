use thiserror::Error;

use crate::spec::ChartSlot;

/// Error types for chart construction and rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Dataset does not have the shape its chart expects
    #[error("{dataset} dataset is malformed: {reason}")]
    Shape { dataset: &'static str, reason: String },

    /// Rendering surface for the slot is absent or unusable
    #[error("{slot} chart target not found: {reason}")]
    TargetMissing { slot: ChartSlot, reason: String },

    /// Rendering library refused the chart
    #[error("{slot} chart could not be rendered: {reason}")]
    Render { slot: ChartSlot, reason: String },
}

impl ChartError {
    pub fn shape(dataset: &'static str, reason: impl Into<String>) -> Self {
        ChartError::Shape {
            dataset,
            reason: reason.into(),
        }
    }

    pub fn target_missing(slot: ChartSlot, reason: impl Into<String>) -> Self {
        ChartError::TargetMissing {
            slot,
            reason: reason.into(),
        }
    }

    pub fn render(slot: ChartSlot, reason: impl Into<String>) -> Self {
        ChartError::Render {
            slot,
            reason: reason.into(),
        }
    }
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
