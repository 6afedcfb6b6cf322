//! Error types

use std::path::PathBuf;

use navdom::DomError;

#[derive(Debug, thiserror::Error)]
pub enum CollapseError {
    /// A tree operation failed, e.g. on a handle from another document.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// The configured toggle template did not format into a single element.
    #[error("toggle template produced unusable markup '{markup}': {source}")]
    Template {
        markup: String,
        #[source]
        source: DomError,
    },

    /// A formatted toggle is missing a class the click handler relies on.
    #[error("toggle markup '{markup}' lacks class '{class}'")]
    ToggleClass { markup: String, class: String },

    #[error("failed to create log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, CollapseError>;
