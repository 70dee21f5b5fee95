//! Error types for the releasekit CLI and library surface.
//!
//! The engine itself is total and never fails; errors only arise at the
//! edges, when talking to the filesystem or to the mediainfo binary.

/// Error type for releasekit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file was not found.
    #[error("File not found: {0}")]
    NotFound(String),

    /// A required external tool is missing from PATH.
    #[error("Tool not found: {0} (is it installed and on PATH?)")]
    ToolMissing(String),

    /// An external tool ran but reported failure.
    #[error("Tool failed: {0}")]
    Tool(String),

    /// Parsing tool output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new ToolMissing error.
    pub fn tool_missing<S: Into<String>>(name: S) -> Self {
        Self::ToolMissing(name.into())
    }

    /// Create a new Tool error.
    pub fn tool<S: Into<String>>(msg: S) -> Self {
        Self::Tool(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the releasekit Error type.
pub type Result<T> = std::result::Result<T, Error>;
