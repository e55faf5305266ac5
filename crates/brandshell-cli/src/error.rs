//! Structured error handling for the Brandshell CLI.
//!
//! Provides:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use brandshell_core::error::BrandShellError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// All CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (bad file contents, bad combination of flags).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be parsed as JSON.
    #[error("{path} is not valid JSON")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The named input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `brandshell-core`.
    ///
    /// Wrapped here so the CLI can attach suggestions without touching core
    /// internals.  Validation errors already carry the full per-field list.
    #[error("{0}")]
    Core(#[from] BrandShellError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap a file-read failure, mapping missing files to their own variant
    /// so they get exit code 3 instead of 1.
    pub fn from_read(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            CliError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CliError::IoError {
                message: format!("could not read {}", path.display()),
                source: err,
            }
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::InvalidJson { path, .. } => vec![
                format!("'{}' could not be parsed as JSON", path.display()),
                "Validate the file with a JSON linter".into(),
                "Expected shape: {\"details\": {...}, \"theme\": {...}}".into(),
            ],

            Self::FileNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Check the path for typos".into(),
                "Paths are resolved relative to the current directory".into(),
            ],

            Self::Core(BrandShellError::Validation(err)) => {
                let mut suggestions: Vec<String> =
                    err.errors.iter().map(|e| format!("  • {e}")).collect();
                suggestions.push("Fix the fields above and re-run".into());
                suggestions.push("Use 'brandshell preview --force' to render anyway".into());
                suggestions
            }

            Self::Core(_) => vec![
                "The shell could not be rendered".into(),
                "Re-run with -vv for diagnostics".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::InvalidJson { .. } => ErrorCategory::UserError,
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core {
                BrandShellError::Validation(_) => ErrorCategory::UserError,
                BrandShellError::Payload { .. } => ErrorCategory::UserError,
                BrandShellError::Rendering { .. } => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category   | Code |
    /// |------------|------|
    /// | User error |  2   |
    /// | Not found  |  3   |
    /// | Internal   |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandshell_core::domain::ValidationError;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn validation_suggestions_list_each_field_error() {
        let err = CliError::Core(
            ValidationError::new(
                "BrandDetails",
                vec!["details.name must be a non-empty string.".into()],
            )
            .into(),
        );
        let suggestions = err.suggestions();
        assert!(
            suggestions
                .iter()
                .any(|s| s.contains("details.name must be a non-empty string."))
        );
        assert!(suggestions.iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn file_not_found_suggests_checking_the_path() {
        let err = CliError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("typos")));
    }

    #[test]
    fn invalid_json_suggests_the_expected_shape() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::InvalidJson {
            path: PathBuf::from("brand.json"),
            source,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("details")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into()
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_validation_is_user_error() {
        let err = CliError::Core(ValidationError::new("BrandDetails", vec!["e".into()]).into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::FileNotFound {
                path: PathBuf::from("x")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn from_read_maps_missing_files_to_not_found() {
        let err = CliError::from_read(
            std::path::Path::new("missing.json"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.exit_code(), 3);

        let err = CliError::from_read(
            std::path::Path::new("locked.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::FileNotFound {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
