// src/services/report_service/mod.rs

pub mod loader;
pub mod printer;

pub use loader::{load_report, parse_report};
pub use printer::{print_summary, write_summary};
