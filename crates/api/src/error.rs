use std::path::PathBuf;

/// Failures surfaced by the locator.
///
/// A lookup that simply finds nothing is not an error; operations return
/// `None` or an empty list for that case.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LocateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LocateResult<T> = std::result::Result<T, LocateError>;
