//! Error types and exit codes for `bindsheet`.

use thiserror::Error;

/// Exit codes for `bindsheet` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Decode error (input does not match the bind record shape)
    pub const DECODE_ERROR: i32 = 2;

    /// I/O error on the input or output stream
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

/// Top-level error type for `bindsheet` operations.
///
/// Exactly one functional failure mode exists — the input fails to decode —
/// plus I/O failure on the two stream handles. Rendering itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not structurally match the expected record shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error while reading stdin or writing stdout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Decode(_) => ExitCode::DECODE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

/// Result type alias for `bindsheet` operations.
pub type Result<T> = std::result::Result<T, Error>;
