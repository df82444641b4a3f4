//! Chart backend writing every chart as a standalone HTML page.

use std::fs;
use std::path::PathBuf;

use dashboard::figure::to_plot;
use dashboard::{ChartBackend, ChartError, ChartSlot, ChartSpec};
use tracing::{debug, warn};

/// Writes `<element-id>.html` pages into one directory.
///
/// Disposing a chart deletes its page.
#[derive(Debug)]
pub struct HtmlDirectoryBackend {
    out_dir: PathBuf,
}

impl HtmlDirectoryBackend {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn page_path(&self, slot: ChartSlot) -> PathBuf {
        self.out_dir.join(format!("{}.html", slot.element_id()))
    }
}

impl ChartBackend for HtmlDirectoryBackend {
    type Target = PathBuf;
    type Handle = PathBuf;

    fn locate(&self, slot: ChartSlot) -> dashboard::Result<PathBuf> {
        if !self.out_dir.is_dir() {
            return Err(ChartError::target_missing(
                slot,
                format!("{} is not a directory", self.out_dir.display()),
            ));
        }
        Ok(self.page_path(slot))
    }

    fn create(&mut self, slot: ChartSlot, target: &PathBuf, spec: &ChartSpec) -> dashboard::Result<PathBuf> {
        let html = to_plot(spec).to_html();
        fs::write(target, html)
            .map_err(|e| ChartError::render(slot, format!("cannot write {}: {}", target.display(), e)))?;

        debug!("Wrote {} chart to {}", slot, target.display());
        Ok(target.clone())
    }

    fn dispose(&mut self, slot: ChartSlot, handle: PathBuf) {
        if let Err(e) = fs::remove_file(&handle) {
            warn!("Failed to remove {} chart page {}: {}", slot, handle.display(), e);
        }
    }
}
