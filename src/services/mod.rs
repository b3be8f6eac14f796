pub mod report_service;

pub use report_service::{load_report, print_summary};
