pub mod view;

pub use view::ConsumptionCharts;
