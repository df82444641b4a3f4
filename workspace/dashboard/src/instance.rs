//! Slot-scoped ownership of rendered charts.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::spec::{ChartSlot, ChartSpec};

/// Seam to the rendering library.
pub trait ChartBackend {
    /// Rendering surface resolved for a slot
    type Target;
    /// Opaque handle to one live chart
    type Handle;

    /// Resolves the surface of `slot`, failing with `ChartError::TargetMissing`.
    fn locate(&self, slot: ChartSlot) -> Result<Self::Target>;

    /// Draws `spec` onto `target`.
    fn create(&mut self, slot: ChartSlot, target: &Self::Target, spec: &ChartSpec) -> Result<Self::Handle>;

    /// Releases every rendering resource held by `handle`.
    fn dispose(&mut self, slot: ChartSlot, handle: Self::Handle);
}

/// Keeps at most one live chart per slot.
///
/// Replacing a chart always disposes the previous instance before the new one
/// is created; dropping the manager disposes everything still live.
pub struct ChartInstanceManager<B: ChartBackend> {
    backend: B,
    live: HashMap<ChartSlot, B::Handle>,
}

impl<B: ChartBackend> ChartInstanceManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Looks up the rendering surface for `slot`.
    pub fn require_render_target(&self, slot: ChartSlot) -> Result<B::Target> {
        self.backend.locate(slot).inspect_err(|err| {
            warn!(%slot, %err, "Render target unavailable");
        })
    }

    /// Renders `spec` into `slot`, disposing whatever the slot held before.
    ///
    /// A missing target leaves the previous instance untouched. When the
    /// backend fails to create the new chart the slot ends up empty.
    #[instrument(skip(self, spec), fields(series = spec.series.len()))]
    pub fn render_or_replace(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<()> {
        let target = self.require_render_target(slot)?;

        if let Some(previous) = self.live.remove(&slot) {
            debug!(%slot, "Disposing previous chart instance");
            self.backend.dispose(slot, previous);
        }

        let handle = self.backend.create(slot, &target, spec)?;
        self.live.insert(slot, handle);
        info!(%slot, "Chart rendered");
        Ok(())
    }

    /// Disposes the chart in `slot`, returning whether one was live.
    pub fn dispose(&mut self, slot: ChartSlot) -> bool {
        match self.live.remove(&slot) {
            Some(handle) => {
                self.backend.dispose(slot, handle);
                true
            }
            None => false,
        }
    }

    pub fn dispose_all(&mut self) {
        let live: Vec<_> = self.live.drain().collect();
        for (slot, handle) in live {
            self.backend.dispose(slot, handle);
        }
    }

    /// Forgets every live chart without disposing it, handing the handles back.
    pub fn detach_all(&mut self) -> Vec<(ChartSlot, B::Handle)> {
        let mut detached: Vec<_> = self.live.drain().collect();
        detached.sort_by_key(|(slot, _)| *slot);
        detached
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.live.contains_key(&slot)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartInstanceManager<B> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
