use thiserror::Error;

/// Errors that can arise while loading or writing catalog documents.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Wrapper around IO errors (missing files, unwritable data dir, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a catalog document fails to parse as JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Returned when serializing a catalog for writing fails.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Returned for a language code outside the supported set.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
