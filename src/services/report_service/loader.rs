use crate::models::{Report, ReportError};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads the whole report into memory and parses it.
///
/// The file handle is released before parsing starts.
pub fn load_report(path: &Path) -> Result<Report, ReportError> {
    let contents = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", contents.len(), path.display());

    parse_report(&contents).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_report(contents: &str) -> Result<Report, serde_json::Error> {
    serde_json::from_str(contents)
}
