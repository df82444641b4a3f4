use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use common::ContractVersion;
use dashboard::flow::{render_summary, ChartFailure};
use dashboard::{ChartInstanceManager, ChartSlot, ColorScheme};
use tracing::{info, trace, warn};

use super::load_summary;
use crate::output::HtmlDirectoryBackend;

/// Outcome of one `render` run.
#[derive(Debug)]
pub struct RenderReport {
    pub pages: Vec<(ChartSlot, PathBuf)>,
    pub failures: Vec<ChartFailure>,
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pages.is_empty() && self.failures.is_empty() {
            return writeln!(f, "The consumption summary contained no datasets.");
        }
        for (slot, path) in &self.pages {
            writeln!(f, "{} chart written to {}", slot, path.display())?;
        }
        for failure in &self.failures {
            writeln!(f, "{}", failure.message())?;
        }
        Ok(())
    }
}

pub fn render(input: &Path, out_dir: &Path, contract: ContractVersion, colors: ColorScheme) -> Result<RenderReport> {
    trace!("Entering render command");
    let summary = load_summary(input, contract)?;

    info!("Rendering charts into {} with {} colors", out_dir.display(), colors);
    let mut colors = colors.source();
    let mut manager = ChartInstanceManager::new(HtmlDirectoryBackend::new(out_dir));
    let report = render_summary(&mut manager, &summary, &mut *colors);

    for failure in &report.failures {
        warn!("{}", failure.message());
    }

    // Pages stay on disk once the command is done
    let pages = manager.detach_all();
    info!("Rendered {} charts, {} failed", pages.len(), report.failures.len());

    Ok(RenderReport {
        pages,
        failures: report.failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::ChartError;
    use serde_json::json;

    fn write_summary(dir: &Path, body: serde_json::Value) -> PathBuf {
        let path = dir.join("summary.json");
        std::fs::write(&path, body.to_string()).unwrap();
        path
    }

    fn nested_summary() -> serde_json::Value {
        json!({
            "floor_wise_consumption": {
                "1": [["2024-01-01", 10], ["2024-01-02", 12]],
                "2": [["2024-01-01", 5]]
            },
            "appliance_wise_consumption": {"AC": 100, "Fridge": 40},
            "floor_appliance_consumption": {
                "1": {"AC": 60, "Fridge": 20},
                "2": {"AC": 40, "Fridge": 20}
            },
            "hourly_consumption": {"0": 1.2, "1": 0.9}
        })
    }

    #[test]
    fn test_renders_one_page_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_summary(dir.path(), nested_summary());

        let report = render(&input, dir.path(), ContractVersion::V2, ColorScheme::Palette).unwrap();

        assert!(report.failures.is_empty());
        let slots: Vec<_> = report.pages.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(slots, ChartSlot::ALL.to_vec());
        for slot in ChartSlot::ALL {
            let page = dir.path().join(format!("{}.html", slot.element_id()));
            assert!(page.exists(), "missing page for {}", slot);
        }

        let floor_page = std::fs::read_to_string(dir.path().join("floor-wise-chart.html")).unwrap();
        assert!(floor_page.contains("Floor-wise Energy Consumption"));
        assert!(report.to_string().contains("Hourly chart written to"));
    }

    #[test]
    fn test_failing_chart_does_not_stop_the_others() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = nested_summary();
        body["floor_wise_consumption"] = json!({});
        let input = write_summary(dir.path(), body);

        let report = render(&input, dir.path(), ContractVersion::V2, ColorScheme::Palette).unwrap();

        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].slot, ChartSlot::FloorWise);
        assert!(matches!(report.failures[0].error, ChartError::Shape { .. }));
        assert!(!dir.path().join("floor-wise-chart.html").exists());
        assert!(report.to_string().contains("Error creating Floor-wise chart"));
    }

    #[test]
    fn test_flat_contract_renders_floor_chart_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_summary(dir.path(), json!({"1": [["2024-01-01", 10]]}));

        let report = render(&input, dir.path(), ContractVersion::V1, ColorScheme::Random).unwrap();

        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.pages[0].0, ChartSlot::FloorWise);
    }

    #[test]
    fn test_missing_output_directory_fails_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_summary(dir.path(), nested_summary());

        let report = render(&input, &dir.path().join("absent"), ContractVersion::V2, ColorScheme::Palette).unwrap();

        assert!(report.pages.is_empty());
        assert_eq!(report.failures.len(), 4);
        assert!(report
            .failures
            .iter()
            .all(|failure| matches!(failure.error, ChartError::TargetMissing { .. })));
    }

    #[test]
    fn test_backend_error_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_summary(dir.path(), json!({"error": "Data file not found"}));

        let err = render(&input, dir.path(), ContractVersion::V2, ColorScheme::Palette).unwrap_err();
        assert!(format!("{:#}", err).contains("Data file not found"));
    }

    #[test]
    fn test_empty_summary_reports_no_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_summary(dir.path(), json!({}));

        let report = render(&input, dir.path(), ContractVersion::V2, ColorScheme::Palette).unwrap();
        assert_eq!(report.to_string(), "The consumption summary contained no datasets.\n");
    }
}
