//! Unified error types for arc-console.
//!
//! Errors exist only at the ambient edges of the crate (config files, CSV
//! export, terminal IO). Session-level boundary violations (selecting a
//! fourth asset, stepping past the last asset, toggling a filter twice)
//! are silent no-ops and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for arc-console operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ArcError {
    /// Errors while writing an export artifact
    #[error("Export failed: {context}: {source}")]
    Export {
        context: String,
        #[source]
        source: ExportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (CLI arguments, filter specs)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific export error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportErrorKind {
    #[error("Output directory does not exist: {0}")]
    MissingOutputDir(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),

    #[error("Nothing to export: {0}")]
    EmptyExport(String),
}

/// Convenient Result type for arc-console operations
pub type Result<T> = std::result::Result<T, ArcError>;

impl ArcError {
    /// Create an export error with context
    pub fn export(context: impl Into<String>, source: ExportErrorKind) -> Self {
        Self::Export {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for ArcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain front-to-back, so the outermost caller reads first:
/// `"writing portfolio export: creating output file: permission denied"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on the error path).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ArcError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context(e.into(), &ctx)
        })
    }
}

fn add_context(err: ArcError, new_ctx: &str) -> ArcError {
    match err {
        ArcError::Export {
            context: existing,
            source,
        } => ArcError::Export {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ArcError::Io {
            path,
            message,
            source,
        } => ArcError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ArcError::Config(msg) => ArcError::Config(chain_context(new_ctx, &msg)),
        ArcError::Validation(msg) => ArcError::Validation(chain_context(new_ctx, &msg)),
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArcError::export(
            "portfolio table",
            ExportErrorKind::MissingOutputDir("/nope".to_string()),
        );
        let display = err.to_string();
        assert!(display.contains("Export failed"), "got: {display}");

        let err = ArcError::validation("unknown filter category 'climate'");
        assert!(err.to_string().contains("unknown filter category"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ArcError::io("/tmp/portfolio.csv", io_err);
        assert!(err.to_string().contains("/tmp/portfolio.csv"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(ArcError::config("missing theme"));
        let chained = initial.context("loading config file");

        match chained {
            Err(ArcError::Config(msg)) => {
                assert!(msg.contains("loading config file"), "got: {msg}");
                assert!(msg.contains("missing theme"), "got: {msg}");
            }
            _ => panic!("expected Config error"),
        }
    }

    #[test]
    fn test_with_context_lazy() {
        let mut called = false;
        let ok: Result<i32> = Ok(7);
        let _ = ok.with_context(|| {
            called = true;
            "should not run"
        });
        assert!(!called, "closure must not run on the Ok path");

        let err: Result<i32> = Err(ArcError::validation("bad"));
        let _ = err.with_context(|| {
            called = true;
            "should run"
        });
        assert!(called);
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "inner"), "outer: inner");
    }
}
