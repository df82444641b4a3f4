use std::path::Path;

use anyhow::Result;
use common::{ConsumptionSummary, ContractVersion};
use dashboard::color::PaletteColors;
use dashboard::flow::dataset_for;
use dashboard::{build_chart, ChartKind, ChartSlot};
use serde_json::{Map, Value};
use tracing::trace;

use super::load_summary;

pub fn inspect(input: &Path, contract: ContractVersion, as_json: bool) -> Result<String> {
    trace!("Entering inspect command");
    let summary = load_summary(input, contract)?;
    if as_json {
        return Ok(describe_json(&summary)?);
    }
    Ok(describe(&summary))
}

/// Every chart as `{"slot": ..., "chart": <spec>}`, or `{"slot": ..., "error": ...}`
/// when its dataset cannot be built.
fn describe_json(summary: &ConsumptionSummary) -> serde_json::Result<String> {
    let mut colors = PaletteColors;
    let mut charts = Vec::new();

    for slot in ChartSlot::ALL {
        let Some(raw) = dataset_for(summary, slot) else {
            continue;
        };

        let mut entry = Map::new();
        entry.insert("slot".to_string(), serde_json::to_value(slot)?);
        match build_chart(slot, raw, &mut colors) {
            Ok(spec) => entry.insert("chart".to_string(), serde_json::to_value(&spec)?),
            Err(e) => entry.insert("error".to_string(), Value::String(e.to_string())),
        };
        charts.push(Value::Object(entry));
    }

    let mut text = serde_json::to_string_pretty(&charts)?;
    text.push('\n');
    Ok(text)
}

/// One block per chart: kind, stacking and the point count of every series.
fn describe(summary: &ConsumptionSummary) -> String {
    let mut colors = PaletteColors;
    let mut lines = Vec::new();

    for slot in ChartSlot::ALL {
        let Some(raw) = dataset_for(summary, slot) else {
            continue;
        };

        match build_chart(slot, raw, &mut colors) {
            Ok(spec) => {
                let kind = match spec.kind {
                    ChartKind::Line => "line",
                    ChartKind::Bar => "bar",
                };
                let stacked = if spec.stacked { ", stacked" } else { "" };
                lines.push(format!("{}: {} ({}{})", slot.slug(), spec.title, kind, stacked));
                for series in &spec.series {
                    lines.push(format!("  {}: {} points", series.label, series.points.len()));
                }
            }
            Err(e) => lines.push(format!("{}: {}", slot.slug(), e)),
        }
    }

    if lines.is_empty() {
        lines.push("The consumption summary contained no datasets.".to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
