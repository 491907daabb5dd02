use thiserror::Error;

/// Errors that can occur while configuring or running an extraction
///
/// Per-field extraction failures are never reported here; they collapse to
/// the `"N/A"` sentinel on the record itself.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A selector string could not be read as `tag.class`
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A record lacks a field required by a typed conversion
    #[error("Record has no field named '{0}'")]
    MissingField(String),

    /// Failed to read the HTML input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Errors raised by table operations
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
