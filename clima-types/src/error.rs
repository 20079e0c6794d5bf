use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Unified error type for the clima workspace.
///
/// Schema mismatches and I/O failures are fatal for a run. Statistical
/// operations that cannot produce a meaningful value report
/// `InsufficientData` instead of returning a default.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClimaError {
    /// An expected column or key is missing from a loaded table.
    #[error("schema error in {dataset}: missing column '{column}'")]
    Schema {
        /// Dataset being loaded (e.g. "temperature").
        dataset: String,
        /// Column name that could not be located.
        column: String,
    },

    /// A statistical operation was asked to run on too few usable observations.
    #[error("insufficient data for {operation}: {detail}")]
    InsufficientData {
        /// Operation label (e.g. "quantile", "pearson").
        operation: String,
        /// Human-readable description of what was missing.
        detail: String,
    },

    /// A source file could not be read or a destination could not be written.
    #[error("io error at {path}: {msg}")]
    Io {
        /// Path involved in the failed operation.
        path: String,
        /// Underlying error message.
        msg: String,
    },

    /// A decoder (CSV, spreadsheet, JSON) rejected its input.
    #[error("{format} decode error: {msg}")]
    Decode {
        /// Input format label.
        format: String,
        /// Underlying error message.
        msg: String,
    },

    /// Malformed cell values or violated table invariants.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Wraps an error with the pipeline stage in which it occurred.
    #[error("stage '{stage}' failed: {error}")]
    Stage {
        /// Stage label.
        stage: String,
        /// The failure raised by the stage.
        error: Box<ClimaError>,
    },
}

impl ClimaError {
    /// Helper: build a `Schema` error for a missing column.
    pub fn schema(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Schema {
            dataset: dataset.into(),
            column: column.into(),
        }
    }

    /// Helper: build an `InsufficientData` error.
    pub fn insufficient(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InsufficientData {
            operation: operation.into(),
            detail: detail.into(),
        }
    }

    /// Helper: build an `Io` error from a path and the underlying I/O failure.
    #[must_use]
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            msg: err.to_string(),
        }
    }

    /// Helper: build a `Decode` error.
    pub fn decode(format: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            format: format.into(),
            msg: msg.into(),
        }
    }

    /// Tag this error with the pipeline stage that produced it.
    ///
    /// An error that is already tagged keeps its innermost stage.
    #[must_use]
    pub fn in_stage(self, stage: impl Into<String>) -> Self {
        match self {
            tagged @ Self::Stage { .. } => tagged,
            other => Self::Stage {
                stage: stage.into(),
                error: Box::new(other),
            },
        }
    }

    /// The stage label, if this error was tagged with one.
    #[must_use]
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::Stage { stage, .. } => Some(stage),
            _ => None,
        }
    }

    /// The underlying error with any stage tagging removed.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Stage { error, .. } => error.root(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for ClimaError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode("json", e.to_string())
    }
}
