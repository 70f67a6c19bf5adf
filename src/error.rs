use std::io;
use std::path::PathBuf;

/// Errors produced while digesting a source.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("cannot open {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed{}: {source}", on_path(.path))]
    ReadFailure {
        /// `None` when the source was a bare reader.
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("unsupported hash algorithm: {name}")]
    Unsupported { name: String },

    #[error("digest worker failed: {reason}")]
    Worker { reason: String },
}

impl DigestError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadFailure {
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) fn reader_failure(source: io::Error) -> Self {
        Self::ReadFailure { path: None, source }
    }
}

fn on_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" on {}", p.display()))
        .unwrap_or_default()
}
