//! Visualization composition pipeline for the energy dashboard.
//!
//! Raw consumption datasets are validated into typed shapes ([`dataset`]),
//! turned into renderer-agnostic chart specifications ([`builder`],
//! [`spec`]), translated into Plotly figures ([`figure`]) and handed to a
//! [`ChartInstanceManager`](instance::ChartInstanceManager), which keeps at
//! most one live chart per slot. The [`flow`] module ties these together for
//! the two user-facing flows.

pub mod builder;
pub mod color;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod flow;
pub mod instance;
pub mod spec;

pub use builder::build_chart;
pub use color::{ColorScheme, ColorSource};
pub use error::{ChartError, Result};
pub use instance::{ChartBackend, ChartInstanceManager};
pub use spec::{ChartKind, ChartSlot, ChartSpec, Series};

#[cfg(test)]
pub(crate) mod testing;
