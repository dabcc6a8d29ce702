use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        // serde_json wraps reader failures; surface those as plain I/O errors.
        if source.is_io() {
            let kind = source.io_error_kind().unwrap_or(std::io::ErrorKind::Other);
            return Self::Io {
                path: path.into(),
                source: std::io::Error::new(kind, source),
            };
        }
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
