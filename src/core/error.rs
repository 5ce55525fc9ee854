//! Error types and user-facing error display.
//!
//! All pipeline failures funnel through [`RelgateError`]. The binary's entry
//! point converts whatever `anyhow::Error` bubbles up into an
//! [`ErrorContext`] via [`user_friendly_error`], prints it, and exits with
//! [`ErrorContext::exit_code`], which is the failing subprocess's own exit
//! code whenever one is available.
//!
//! The pipeline adds no wrapping of its own around stage errors: a failing
//! tool's diagnostics have already been streamed to the terminal by the time
//! the error reaches `main`, so the display here is limited to a one-line
//! summary plus an optional suggestion.

use colored::Colorize;
use thiserror::Error;

/// Error taxonomy for the build-and-verification pipeline.
///
/// Variants are grouped by origin: tool invocation (`ToolNotFound`,
/// `ToolFailed`), the coverage gate (`Coverage*`), and stage-graph
/// construction (`UnknownDependency`, `DependencyCycle`).
#[derive(Error, Debug)]
pub enum RelgateError {
    /// A configured executable could not be found on `PATH`.
    ///
    /// Raised either up front by [`crate::config::require_tool`] or when
    /// spawning the process fails with a not-found error.
    #[error("'{program}' is not installed or not found in PATH")]
    ToolNotFound {
        /// The executable that could not be resolved
        program: String,
    },

    /// A subprocess exited with a non-zero status.
    ///
    /// The exit code is preserved so the pipeline can terminate with the
    /// first failing stage's own code. `stderr` is empty when the process
    /// ran with inherited stdio, since its diagnostics already reached the
    /// terminal directly.
    #[error("{program} {operation} failed with exit code {code}")]
    ToolFailed {
        /// The executable that failed
        program: String,
        /// The operation that failed (e.g. "mypy", "install")
        operation: String,
        /// The subprocess exit code
        code: i32,
        /// Captured standard error output, if any was captured
        stderr: String,
    },

    /// Measured aggregate coverage is strictly below the required threshold.
    #[error("coverage {measured:.1}% is below the required threshold of {required:.1}%")]
    CoverageBelowThreshold {
        /// The required coverage percentage
        required: f64,
        /// The measured coverage percentage
        measured: f64,
    },

    /// The coverage gate ran but found no report to read.
    #[error("coverage report not found at {path}")]
    CoverageReportMissing {
        /// Expected location of the JSON coverage report
        path: String,
    },

    /// The coverage report exists but could not be parsed.
    #[error("invalid coverage report {path}: {reason}")]
    CoverageReportInvalid {
        /// Location of the malformed report
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// A stage declares a predecessor that is not part of the pipeline.
    #[error("stage '{stage}' declares unknown dependency '{dependency}'")]
    UnknownDependency {
        /// The stage with the bad declaration
        stage: String,
        /// The missing predecessor name
        dependency: String,
    },

    /// The declared stage dependencies do not form a DAG.
    #[error("stage dependencies form a cycle involving '{stage}'")]
    DependencyCycle {
        /// A stage participating in the cycle
        stage: String,
    },
}

impl RelgateError {
    /// Process exit code for this error.
    ///
    /// Subprocess failures propagate their own exit code; every other
    /// failure maps to 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ToolFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// User-facing error presentation: the error itself plus an optional
/// suggestion and optional details.
pub struct ErrorContext {
    /// The underlying error
    pub error: anyhow::Error,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Print the error to stderr with colored severity labels.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }

    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        self.error.downcast_ref::<RelgateError>().map_or(1, RelgateError::exit_code)
    }
}

/// Convert an error into an [`ErrorContext`] with a resolution suggestion
/// where one is known.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let (suggestion, details) = match error.downcast_ref::<RelgateError>() {
        Some(RelgateError::ToolNotFound { program }) => (
            Some(format!(
                "Install '{program}' or point --python/--pip/--npm (or the matching RELGATE_* \
                 environment variable) at an existing executable"
            )),
            None,
        ),
        Some(RelgateError::ToolFailed { program, operation, stderr, .. }) => {
            let details = if stderr.trim().is_empty() {
                None
            } else {
                Some(stderr.trim().to_string())
            };
            (Some(format!("Inspect the output of `{program} {operation}` above")), details)
        }
        Some(RelgateError::CoverageBelowThreshold { .. }) => (
            Some("Add tests for the lines listed in the missing-lines summary above".to_string()),
            None,
        ),
        Some(RelgateError::CoverageReportMissing { .. }) => (
            Some("The coverage report is written by the test stage; run `relgate test`".to_string()),
            None,
        ),
        _ => (None, None),
    };

    ErrorContext {
        error,
        suggestion,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_propagates_its_exit_code() {
        let err = RelgateError::ToolFailed {
            program: "pip3".to_string(),
            operation: "install".to_string(),
            code: 7,
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn gate_failure_exits_with_one() {
        let err = RelgateError::CoverageBelowThreshold {
            required: 100.0,
            measured: 99.9,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn gate_message_cites_threshold_and_actual() {
        let err = RelgateError::CoverageBelowThreshold {
            required: 100.0,
            measured: 99.9,
        };
        let message = err.to_string();
        assert!(message.contains("99.9"), "missing measured value: {message}");
        assert!(message.contains("100.0"), "missing threshold: {message}");
    }

    #[test]
    fn context_exit_code_falls_back_to_one_for_foreign_errors() {
        let ctx = user_friendly_error(anyhow::anyhow!("something else"));
        assert_eq!(ctx.exit_code(), 1);
        assert!(ctx.suggestion.is_none());
    }

    #[test]
    fn tool_failure_context_surfaces_captured_stderr() {
        let err = RelgateError::ToolFailed {
            program: "npm".to_string(),
            operation: "install".to_string(),
            code: 2,
            stderr: "ENOENT: no such file".to_string(),
        };
        let ctx = user_friendly_error(err.into());
        assert_eq!(ctx.details.as_deref(), Some("ENOENT: no such file"));
        assert_eq!(ctx.exit_code(), 2);
    }
}
