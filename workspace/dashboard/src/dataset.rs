//! Typed views over the raw consumption datasets.
//!
//! Each shape is parsed from a `serde_json::Value` whose object key order is
//! the backend's insertion order; that order is kept everywhere since it is
//! the display order. Parsing only checks JSON types; emptiness is judged by
//! the builders.

use serde_json::{Map, Value};

use crate::error::{ChartError, Result};

/// Ordered `(label, value)` entries; `None` stands for a JSON `null`.
pub type Scalars = Vec<(String, Option<f64>)>;

/// Group label → ordered `[timestamp, value]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTimeSeries {
    pub groups: Vec<TimeSeriesGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesGroup {
    pub label: String,
    pub points: Vec<(String, Option<f64>)>,
}

/// Category label → single total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub totals: Scalars,
}

/// Outer category → inner category → value.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatrix {
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub label: String,
    pub cells: Scalars,
}

/// Hour label → average, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyAverages {
    pub hours: Scalars,
}

impl GroupedTimeSeries {
    pub const NAME: &'static str = "grouped time series";

    pub fn from_json(value: &Value) -> Result<Self> {
        let groups = object(Self::NAME, value)?
            .iter()
            .map(|(label, points)| -> Result<TimeSeriesGroup> {
                let points = points.as_array().ok_or_else(|| {
                    ChartError::shape(
                        Self::NAME,
                        format!("group '{}' is {}, expected an array of points", label, kind(points)),
                    )
                })?;

                let points = points
                    .iter()
                    .enumerate()
                    .map(|(index, point)| time_point(label, index, point))
                    .collect::<Result<Vec<_>>>()?;

                Ok(TimeSeriesGroup {
                    label: label.clone(),
                    points,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { groups })
    }
}

impl CategoryTotals {
    pub const NAME: &'static str = "category totals";

    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            totals: scalars(Self::NAME, object(Self::NAME, value)?)?,
        })
    }
}

impl CategoryMatrix {
    pub const NAME: &'static str = "category matrix";

    pub fn from_json(value: &Value) -> Result<Self> {
        let rows = object(Self::NAME, value)?
            .iter()
            .map(|(label, row)| -> Result<MatrixRow> {
                let row = row.as_object().ok_or_else(|| {
                    ChartError::shape(
                        Self::NAME,
                        format!("row '{}' is {}, expected an object", label, kind(row)),
                    )
                })?;
                Ok(MatrixRow {
                    label: label.clone(),
                    cells: scalars(Self::NAME, row)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }
}

impl MatrixRow {
    /// Value of an inner category; absent keys read as `None`.
    pub fn cell(&self, key: &str) -> Option<f64> {
        self.cells
            .iter()
            .find(|(label, _)| label == key)
            .and_then(|(_, value)| *value)
    }
}

impl HourlyAverages {
    pub const NAME: &'static str = "hourly averages";

    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            hours: scalars(Self::NAME, object(Self::NAME, value)?)?,
        })
    }
}

fn object<'a>(dataset: &'static str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ChartError::shape(dataset, format!("expected a JSON object, got {}", kind(value)))
    })
}

fn scalars(dataset: &'static str, entries: &Map<String, Value>) -> Result<Scalars> {
    entries
        .iter()
        .map(|(label, value)| -> Result<(String, Option<f64>)> {
            Ok((label.clone(), scalar(dataset, label, value)?))
        })
        .collect()
}

fn scalar(dataset: &'static str, label: &str, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(number.as_f64()),
        other => Err(ChartError::shape(
            dataset,
            format!("value of '{}' is {}, expected a number", label, kind(other)),
        )),
    }
}

fn time_point(group: &str, index: usize, point: &Value) -> Result<(String, Option<f64>)> {
    let malformed = || {
        ChartError::shape(
            GroupedTimeSeries::NAME,
            format!(
                "point {} of group '{}' is not a [timestamp, value] pair",
                index, group
            ),
        )
    };

    match point.as_array().map(Vec::as_slice) {
        Some([Value::String(timestamp), value]) => {
            let value = match value {
                Value::Null => None,
                Value::Number(number) => number.as_f64(),
                _ => return Err(malformed()),
            };
            Ok((timestamp.clone(), value))
        }
        _ => Err(malformed()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grouped_time_series_keeps_order_and_gaps() {
        let dataset = GroupedTimeSeries::from_json(&json!({
            "2": [["2024-01-02", 5], ["2024-01-01", null]],
            "1": [["2024-01-01", 10.5]]
        }))
        .unwrap();

        assert_eq!(dataset.groups.len(), 2);
        assert_eq!(dataset.groups[0].label, "2");
        assert_eq!(
            dataset.groups[0].points,
            vec![
                ("2024-01-02".to_string(), Some(5.0)),
                ("2024-01-01".to_string(), None)
            ]
        );
        assert_eq!(dataset.groups[1].points, vec![("2024-01-01".to_string(), Some(10.5))]);
    }

    #[test]
    fn test_grouped_time_series_rejects_bad_points() {
        for bad in [
            json!({"1": {"2024-01-01": 10}}),
            json!({"1": [["2024-01-01"]]}),
            json!({"1": [[20240101, 10]]}),
            json!({"1": [["2024-01-01", "10"]]}),
        ] {
            assert!(matches!(
                GroupedTimeSeries::from_json(&bad),
                Err(ChartError::Shape { dataset: GroupedTimeSeries::NAME, .. })
            ));
        }
    }

    #[test]
    fn test_non_object_datasets() {
        assert!(CategoryTotals::from_json(&json!([1, 2])).is_err());
        assert!(HourlyAverages::from_json(&json!("0")).is_err());
        assert!(CategoryMatrix::from_json(&json!(null)).is_err());
        assert!(CategoryMatrix::from_json(&json!({"1": [1]})).is_err());
        assert!(CategoryTotals::from_json(&json!({"AC": "lots"})).is_err());
    }

    #[test]
    fn test_matrix_cell_lookup() {
        let matrix = CategoryMatrix::from_json(&json!({
            "1": {"AC": 60, "Fridge": null},
            "2": {"Fridge": 20}
        }))
        .unwrap();

        assert_eq!(matrix.rows[0].cell("AC"), Some(60.0));
        assert_eq!(matrix.rows[0].cell("Fridge"), None);
        assert_eq!(matrix.rows[1].cell("AC"), None);
        assert_eq!(matrix.rows[1].cell("Fridge"), Some(20.0));
    }
}
