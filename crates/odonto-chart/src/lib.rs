//! odonto-chart
//!
//! The interactive tooth chart: per-tooth condition state, the presentation
//! data derived from it (cell fill, tooltip text, legend) and the
//! per-patient chart session. Everything is in memory and lives as long as
//! the view that owns it.

pub mod chart;
pub mod config;
pub mod display;
pub mod error;
pub mod legend;
pub mod store;

pub use chart::PatientChart;
pub use config::ChartConfig;
pub use error::ChartError;
pub use store::ToothConditionStore;
