// src/models/mod.rs

pub mod error;
pub mod lighthouse;

pub use error::ReportError;
pub use lighthouse::{Audit, CategoryKind, MetricKind, Report};
