//! odonto-core
//!
//! Pure dental chart vocabulary: tooth addressing, condition catalogs,
//! display colors and per-tooth state. No logging, no I/O. This is the
//! shared language between the chart engine and the frontend.

pub mod catalog;
pub mod error;
pub mod models;
