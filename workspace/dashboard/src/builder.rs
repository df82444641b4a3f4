//! Chart construction, one entry point per dataset shape.
//!
//! Builders never render anything: they only turn a validated dataset into a
//! [`ChartSpec`]. An empty dataset is rejected instead of producing an empty
//! chart.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::color::ColorSource;
use crate::dataset::{CategoryMatrix, CategoryTotals, GroupedTimeSeries, HourlyAverages, Scalars};
use crate::error::{ChartError, Result};
use crate::spec::{AxisKind, ChartKind, ChartSlot, ChartSpec, Point, Series};

const CONSUMPTION_AXIS: &str = "Energy Consumption (kWh)";

/// Parses the raw dataset of `slot` and builds its chart.
pub fn build_chart(slot: ChartSlot, raw: &Value, colors: &mut dyn ColorSource) -> Result<ChartSpec> {
    match slot {
        ChartSlot::FloorWise => build_grouped_time_series(&GroupedTimeSeries::from_json(raw)?, colors),
        ChartSlot::ApplianceWise => build_category_totals(&CategoryTotals::from_json(raw)?, colors),
        ChartSlot::FloorAppliance => build_category_matrix(&CategoryMatrix::from_json(raw)?, colors),
        ChartSlot::Hourly => build_hourly_averages(&HourlyAverages::from_json(raw)?, colors),
    }
}

/// One line per group, points in input order on a daily time axis.
#[instrument(skip_all, fields(groups = dataset.groups.len()))]
pub fn build_grouped_time_series(
    dataset: &GroupedTimeSeries,
    colors: &mut dyn ColorSource,
) -> Result<ChartSpec> {
    if dataset.groups.is_empty() {
        return Err(ChartError::shape(GroupedTimeSeries::NAME, "dataset has no groups"));
    }

    let series = dataset
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| Series {
            label: format!("Floor {}", group.label),
            points: group
                .points
                .iter()
                .map(|(timestamp, value)| Point {
                    x: timestamp.clone(),
                    y: *value,
                })
                .collect(),
            color: colors.color_for(index),
        })
        .collect();

    Ok(ChartSpec {
        title: "Floor-wise Energy Consumption".to_string(),
        kind: ChartKind::Line,
        x_axis: AxisKind::Temporal,
        x_title: Some("Date".to_string()),
        y_title: Some(CONSUMPTION_AXIS.to_string()),
        stacked: false,
        series,
    })
}

/// Single bar series, one bar per category.
#[instrument(skip_all, fields(categories = dataset.totals.len()))]
pub fn build_category_totals(dataset: &CategoryTotals, colors: &mut dyn ColorSource) -> Result<ChartSpec> {
    if dataset.totals.is_empty() {
        return Err(ChartError::shape(CategoryTotals::NAME, "dataset has no categories"));
    }

    Ok(ChartSpec {
        title: "Appliance-wise Energy Consumption".to_string(),
        kind: ChartKind::Bar,
        x_axis: AxisKind::Categorical,
        x_title: Some("Appliance".to_string()),
        y_title: Some(CONSUMPTION_AXIS.to_string()),
        stacked: false,
        series: vec![single_series("Energy Consumption", &dataset.totals, colors)],
    })
}

/// Stacked bars: one series per inner category, one bar per outer category.
///
/// The inner categories are read from the first outer entry only. Later
/// entries missing one of those keys get a gap, and keys only they define
/// are not shown.
#[instrument(skip_all, fields(rows = dataset.rows.len()))]
pub fn build_category_matrix(dataset: &CategoryMatrix, colors: &mut dyn ColorSource) -> Result<ChartSpec> {
    let first = dataset
        .rows
        .first()
        .ok_or_else(|| ChartError::shape(CategoryMatrix::NAME, "dataset has no outer categories"))?;

    if first.cells.is_empty() {
        return Err(ChartError::shape(
            CategoryMatrix::NAME,
            format!("first outer category '{}' has no inner categories", first.label),
        ));
    }

    let series = first
        .cells
        .iter()
        .enumerate()
        .map(|(index, (inner, _))| Series {
            label: inner.clone(),
            points: dataset
                .rows
                .iter()
                .map(|row| Point {
                    x: row.label.clone(),
                    y: row.cell(inner),
                })
                .collect(),
            color: colors.color_for(index),
        })
        .collect::<Vec<_>>();

    debug!(series = series.len(), "Built category matrix from first outer key");

    Ok(ChartSpec {
        title: "Floor and Appliance-wise Energy Consumption".to_string(),
        kind: ChartKind::Bar,
        x_axis: AxisKind::Categorical,
        x_title: Some("Floor".to_string()),
        y_title: Some(CONSUMPTION_AXIS.to_string()),
        stacked: true,
        series,
    })
}

/// Single line over the hour labels, in the order they arrived.
#[instrument(skip_all, fields(hours = dataset.hours.len()))]
pub fn build_hourly_averages(dataset: &HourlyAverages, colors: &mut dyn ColorSource) -> Result<ChartSpec> {
    if dataset.hours.is_empty() {
        return Err(ChartError::shape(HourlyAverages::NAME, "dataset has no hours"));
    }

    Ok(ChartSpec {
        title: "Average Hourly Energy Consumption".to_string(),
        kind: ChartKind::Line,
        x_axis: AxisKind::Categorical,
        x_title: Some("Hour of the Day".to_string()),
        y_title: Some(format!("Average {}", CONSUMPTION_AXIS)),
        stacked: false,
        series: vec![single_series("Average Energy Consumption", &dataset.hours, colors)],
    })
}

fn single_series(label: &str, scalars: &Scalars, colors: &mut dyn ColorSource) -> Series {
    Series {
        label: label.to_string(),
        points: scalars
            .iter()
            .map(|(x, y)| Point { x: x.clone(), y: *y })
            .collect(),
        color: colors.color_for(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{PaletteColors, RandomColors};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn palette() -> PaletteColors {
        PaletteColors
    }

    #[test]
    fn test_grouped_time_series_one_series_per_group() {
        let raw = json!({
            "1": [["2024-01-01", 10], ["2024-01-02", 12], ["2024-01-03", 9]],
            "2": [["2024-01-01", 5]],
            "3": []
        });

        let spec = build_chart(ChartSlot::FloorWise, &raw, &mut palette()).unwrap();
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.x_axis, AxisKind::Temporal);
        assert!(!spec.stacked);
        assert_eq!(spec.point_counts(), vec![3, 1, 0]);
        assert_eq!(spec.series[0].label, "Floor 1");
        let xs: Vec<_> = spec.series[0].points.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(xs, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_grouped_time_series_is_not_resorted() {
        let raw = json!({"1": [["2024-01-03", 3], ["2024-01-01", 1]]});
        let spec = build_chart(ChartSlot::FloorWise, &raw, &mut palette()).unwrap();
        assert_eq!(spec.series[0].points[0].x, "2024-01-03");
        assert_eq!(spec.series[0].points[0].y, Some(3.0));
    }

    #[test]
    fn test_empty_grouped_time_series_is_shape_error() {
        let err = build_chart(ChartSlot::FloorWise, &json!({}), &mut palette()).unwrap_err();
        assert!(matches!(err, ChartError::Shape { .. }));
        assert!(err.to_string().contains("no groups"));
    }

    #[test]
    fn test_category_totals_single_series_in_key_order() {
        let raw: Value = serde_json::from_str(r#"{"Lights": 30, "AC": 100, "Fridge": 40}"#).unwrap();
        let spec = build_chart(ChartSlot::ApplianceWise, &raw, &mut palette()).unwrap();

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.series.len(), 1);
        let points: Vec<_> = spec.series[0]
            .points
            .iter()
            .map(|p| (p.x.as_str(), p.y))
            .collect();
        assert_eq!(
            points,
            vec![("Lights", Some(30.0)), ("AC", Some(100.0)), ("Fridge", Some(40.0))]
        );
    }

    #[test]
    fn test_category_matrix_series_per_inner_key_stacked() {
        let raw = json!({
            "1": {"AC": 60, "Fridge": 20},
            "2": {"AC": 40, "Fridge": 20}
        });
        let spec = build_chart(ChartSlot::FloorAppliance, &raw, &mut palette()).unwrap();

        assert_eq!(spec.kind, ChartKind::Bar);
        assert!(spec.stacked);
        assert_eq!(spec.point_counts(), vec![2, 2]);
        assert_eq!(spec.series[0].label, "AC");
        assert_eq!(spec.series[0].points[1].x, "2");
        assert_eq!(spec.series[0].points[1].y, Some(40.0));
    }

    #[test]
    fn test_category_matrix_first_key_defines_series() {
        // Later rows with extra or missing inner keys do not change the series set.
        let raw = json!({
            "1": {"AC": 60},
            "2": {"Fridge": 20, "Heater": 5},
            "3": {"AC": 10, "Heater": 7}
        });
        let spec = build_chart(ChartSlot::FloorAppliance, &raw, &mut palette()).unwrap();

        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "AC");
        let ys: Vec<_> = spec.series[0].points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![Some(60.0), None, Some(10.0)]);
    }

    #[test]
    fn test_category_matrix_without_inner_keys_is_shape_error() {
        let raw = json!({"1": {}, "2": {"AC": 3}});
        let err = build_chart(ChartSlot::FloorAppliance, &raw, &mut palette()).unwrap_err();
        assert!(err.to_string().contains("first outer category '1' has no inner categories"));

        let err = build_chart(ChartSlot::FloorAppliance, &json!({}), &mut palette()).unwrap_err();
        assert!(matches!(err, ChartError::Shape { .. }));
    }

    #[test]
    fn test_hourly_averages_keep_insertion_order() {
        let raw: Value = serde_json::from_str(r#"{"0": 1.2, "1": 0.9, "10": 2.5, "2": 0.7}"#).unwrap();
        let spec = build_chart(ChartSlot::Hourly, &raw, &mut palette()).unwrap();

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.x_axis, AxisKind::Categorical);
        let xs: Vec<_> = spec.series[0].points.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(xs, vec!["0", "1", "10", "2"]);
    }

    #[test]
    fn test_non_object_dataset_is_shape_error() {
        for slot in ChartSlot::ALL {
            let err = build_chart(slot, &json!([1, 2, 3]), &mut palette()).unwrap_err();
            assert!(matches!(err, ChartError::Shape { .. }), "{}: {}", slot, err);
        }
    }

    #[test]
    fn test_random_colors_assigned_per_series() {
        let raw = json!({"1": [["2024-01-01", 1]], "2": [["2024-01-01", 2]]});
        let mut colors = RandomColors::new(StdRng::seed_from_u64(3));
        let spec = build_chart(ChartSlot::FloorWise, &raw, &mut colors).unwrap();
        assert!(spec.series.iter().all(|s| s.color.len() == 7));
    }
}
