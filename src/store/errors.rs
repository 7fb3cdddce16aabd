use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures the storage layer can surface
///
/// Not-found never appears here: missing entities are omitted from result
/// sets rather than raised, and a read of an absent key yields a neutral
/// empty value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistent medium failed to read or write a key
    #[error("storage I/O failed for key '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The persistent medium returned data that does not parse
    #[error("malformed data under key '{key}'")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured remote backend could not serve the call
    #[error("backend '{provider}' unavailable: {message}")]
    BackendUnavailable { provider: String, message: String },

    /// A remote backend operation has no concrete implementation
    #[error("backend operation '{op}' is not implemented")]
    NotImplemented { op: &'static str },

    /// Registration attempted with an email that is already taken
    /// (compared case-insensitively)
    #[error("email '{email}' is already registered")]
    EmailTaken { email: String },
}
