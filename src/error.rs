use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that stop the run before anything is displayed.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The stats file is missing or cannot be read.
    #[error("could not read stats file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a usable csv table: bad delimited text, missing
    /// required columns or unparsable numbers.
    #[error("invalid stats file {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },
    #[error("could not open the plot window: {0}")]
    Display(String),
}

impl StatsError {
    /// io errors while reading keep their FileAccess meaning, everything else is a format problem
    pub(crate) fn from_csv_error(err: csv::Error, path: &Path) -> StatsError {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => StatsError::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            _ => StatsError::Format {
                path: path.to_path_buf(),
                message,
            },
        }
    }
}
