// Compiled-in settings; the tool has no runtime configuration surface.

/// Report location, relative to the working directory.
pub const REPORT_PATH: &str = "lighthouse-after.report.json";

pub const SCORES_HEADER: &str = "LIGHTHOUSE SCORES (PRODUCTION):";
pub const METRICS_HEADER: &str = "KEY METRICS:";
pub const SEPARATOR_WIDTH: usize = 40;

// Shown in place of a missing displayValue
pub const NOT_AVAILABLE: &str = "N/A";

// Shown for a JSON `null` title, displayValue or audit score
pub const NULL_TEXT: &str = "None";

// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
