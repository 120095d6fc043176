use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("window error: {0}")]
    Window(String),
}

/// Everything that can go wrong while loading the widget list.
///
/// Entry-level variants carry the zero-based `index` of the offending entry
/// so the message points straight at the broken object in the file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("widget config must be a JSON array of widget objects")]
    NotAList,

    #[error("widget #{index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("widget #{index}: unknown type '{kind}' (expected \"icon\" or \"label\")")]
    UnknownType { index: usize, kind: String },

    #[error("widget #{index}: invalid `{field}`: {message}")]
    InvalidField {
        index: usize,
        field: &'static str,
        message: String,
    },
}

pub type Result<T, E = DashError> = std::result::Result<T, E>;
