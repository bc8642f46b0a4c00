use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for svcpin operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum SvcpinError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. svcpin.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your svcpin.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid or unreadable version catalog file.
    #[error("Catalog error: {message}")]
    #[diagnostic(help("A catalog maps each dependency name to a list of version strings"))]
    Catalog { message: String },

    /// Lockfile missing, malformed, or out of date.
    #[error("Lockfile error: {message}")]
    Lockfile { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
