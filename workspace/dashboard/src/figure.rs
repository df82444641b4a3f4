use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, AxisType, BarMode};
use plotly::{Bar, Layout, Plot, Scatter};

use crate::spec::{AxisKind, ChartKind, ChartSpec};

const DAY_TICK_FORMAT: &str = "%Y-%m-%d";

/// Translates a chart specification into a Plotly figure.
pub fn to_plot(spec: &ChartSpec) -> Plot {
    let mut plot = Plot::new();

    for series in &spec.series {
        let xs: Vec<String> = series.points.iter().map(|p| p.x.clone()).collect();
        let ys: Vec<Option<f64>> = series.points.iter().map(|p| p.y).collect();

        match spec.kind {
            ChartKind::Line => {
                let trace = Scatter::new(xs, ys)
                    .name(&series.label)
                    .mode(Mode::Lines)
                    .line(Line::new().color(series.color.clone()).width(2.0));
                plot.add_trace(trace);
            }
            ChartKind::Bar => {
                let trace = Bar::new(xs, ys)
                    .name(&series.label)
                    .marker(Marker::new().color(series.color.clone()));
                plot.add_trace(trace);
            }
        }
    }

    let mut x_axis = match spec.x_axis {
        AxisKind::Temporal => Axis::new().type_(AxisType::Date).tick_format(DAY_TICK_FORMAT),
        AxisKind::Categorical => Axis::new().type_(AxisType::Category),
    };
    if let Some(title) = &spec.x_title {
        x_axis = x_axis.title(Title::from(title.as_str()));
    }

    let mut y_axis = Axis::new();
    if let Some(title) = &spec.y_title {
        y_axis = y_axis.title(Title::from(title.as_str()));
    }

    let mut layout = Layout::new()
        .title(Title::from(spec.title.as_str()))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .height(400);
    if spec.stacked {
        layout = layout.bar_mode(BarMode::Stack);
    }

    plot.set_layout(layout);
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Point, Series};
    use serde_json::Value;

    fn spec(kind: ChartKind, x_axis: AxisKind, stacked: bool) -> ChartSpec {
        ChartSpec {
            title: "Test".to_string(),
            kind,
            x_axis,
            x_title: Some("X".to_string()),
            y_title: None,
            stacked,
            series: vec![
                Series {
                    label: "a".to_string(),
                    points: vec![
                        Point { x: "1".to_string(), y: Some(1.0) },
                        Point { x: "2".to_string(), y: None },
                    ],
                    color: "#112233".to_string(),
                },
                Series {
                    label: "b".to_string(),
                    points: vec![Point { x: "1".to_string(), y: Some(2.0) }],
                    color: "#445566".to_string(),
                },
            ],
        }
    }

    fn figure(spec: &ChartSpec) -> Value {
        serde_json::from_str(&to_plot(spec).to_json()).unwrap()
    }

    #[test]
    fn test_stacked_bar_figure() {
        let figure = figure(&spec(ChartKind::Bar, AxisKind::Categorical, true));

        let data = figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "bar");
        assert_eq!(data[0]["name"], "a");
        assert_eq!(data[0]["y"][1], Value::Null);
        assert_eq!(figure["layout"]["barmode"], "stack");
        assert_eq!(figure["layout"]["xaxis"]["type"], "category");
    }

    #[test]
    fn test_time_series_line_figure() {
        let figure = figure(&spec(ChartKind::Line, AxisKind::Temporal, false));

        let data = figure["data"].as_array().unwrap();
        assert_eq!(data[1]["type"], "scatter");
        assert_eq!(data[1]["mode"], "lines");
        assert_eq!(data[1]["line"]["color"], "#445566");
        assert_eq!(figure["layout"]["xaxis"]["type"], "date");
        assert!(figure["layout"].get("barmode").is_none());
    }
}
