use std::fmt;

use serde::Serialize;

/// Named rendering location hosting at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartSlot {
    FloorWise,
    ApplianceWise,
    FloorAppliance,
    Hourly,
}

impl ChartSlot {
    /// Every slot, in page order.
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::FloorWise,
        ChartSlot::ApplianceWise,
        ChartSlot::FloorAppliance,
        ChartSlot::Hourly,
    ];

    /// Id of the page element hosting the chart.
    pub fn element_id(self) -> &'static str {
        match self {
            ChartSlot::FloorWise => "floor-wise-chart",
            ChartSlot::ApplianceWise => "appliance-wise-chart",
            ChartSlot::FloorAppliance => "floor-appliance-chart",
            ChartSlot::Hourly => "hourly-consumption-chart",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ChartSlot::FloorWise => "floor-wise",
            ChartSlot::ApplianceWise => "appliance-wise",
            ChartSlot::FloorAppliance => "floor-appliance",
            ChartSlot::Hourly => "hourly",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartSlot::FloorWise => "Floor-wise",
            ChartSlot::ApplianceWise => "Appliance-wise",
            ChartSlot::FloorAppliance => "Floor and appliance",
            ChartSlot::Hourly => "Hourly",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Typing of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Date axis with ticks at day granularity
    Temporal,
    /// Labels taken verbatim from the dataset keys
    Categorical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: String,
    /// `None` is rendered as a gap
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
    pub color: String,
}

/// Renderer-agnostic description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: AxisKind,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Bars of all series at one x position sum visually
    pub stacked: bool,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn point_counts(&self) -> Vec<usize> {
        self.series.iter().map(|series| series.points.len()).collect()
    }
}
