use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse report {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing key `{0}` in report")]
    MissingKey(String),
    #[error("`{0}` is null in report")]
    NullScore(String),
    #[error("failed to write summary")]
    Output(#[from] io::Error),
}
