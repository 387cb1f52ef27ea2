/// Error types for loading settings and resolver configuration
///
/// Resolution itself never fails: a missing provider or a lookup miss degrades
/// to an empty result. Errors only surface while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or does not match the expected shape
    #[error("Failed to parse JSON from '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The JSON root is not an object
    #[error("Invalid JSON in '{0}': root must be an object")]
    NotAnObject(String),
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;
