//! Test fakes shared by the unit tests of this crate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ChartError, Result};
use crate::instance::ChartBackend;
use crate::spec::{AxisKind, ChartKind, ChartSlot, ChartSpec, Point, Series};

#[derive(Debug, Default)]
pub struct RecordingLog {
    pub created: Vec<(ChartSlot, u32)>,
    pub disposed: Vec<(ChartSlot, u32)>,
    pub specs: Vec<(ChartSlot, ChartSpec)>,
    /// Slots whose target cannot be located
    pub missing: Vec<ChartSlot>,
    /// Slots whose creation fails
    pub failing: Vec<ChartSlot>,
    next_handle: u32,
}

impl RecordingLog {
    pub fn live_handles(&self) -> Vec<(ChartSlot, u32)> {
        self.created
            .iter()
            .filter(|created| !self.disposed.contains(created))
            .copied()
            .collect()
    }

    pub fn last_spec(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.specs
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, spec)| spec)
    }
}

/// Backend that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: Rc<RefCell<RecordingLog>>,
}

impl RecordingBackend {
    pub fn log(&self) -> Rc<RefCell<RecordingLog>> {
        Rc::clone(&self.log)
    }
}

impl ChartBackend for RecordingBackend {
    type Target = ();
    type Handle = u32;

    fn locate(&self, slot: ChartSlot) -> Result<()> {
        if self.log.borrow().missing.contains(&slot) {
            return Err(ChartError::target_missing(
                slot,
                format!("element #{} not found", slot.element_id()),
            ));
        }
        Ok(())
    }

    fn create(&mut self, slot: ChartSlot, _target: &(), spec: &ChartSpec) -> Result<u32> {
        let mut log = self.log.borrow_mut();
        if log.failing.contains(&slot) {
            return Err(ChartError::render(slot, "backend refused the chart"));
        }
        log.next_handle += 1;
        let handle = log.next_handle;
        log.created.push((slot, handle));
        log.specs.push((slot, spec.clone()));
        Ok(handle)
    }

    fn dispose(&mut self, slot: ChartSlot, handle: u32) {
        self.log.borrow_mut().disposed.push((slot, handle));
    }
}

pub fn sample_spec() -> ChartSpec {
    ChartSpec {
        title: "Sample".to_string(),
        kind: ChartKind::Line,
        x_axis: AxisKind::Categorical,
        x_title: None,
        y_title: None,
        stacked: false,
        series: vec![Series {
            label: "sample".to_string(),
            points: vec![Point {
                x: "0".to_string(),
                y: Some(1.0),
            }],
            color: "#000000".to_string(),
        }],
    }
}
