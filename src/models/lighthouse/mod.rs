pub mod audit;
pub mod category;
pub mod report;

pub use audit::{Audit, MetricKind};
pub use category::CategoryKind;
pub use report::Report;
