use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Project {id} has progress {progress}, expected 0-100")]
    InvalidProgress { id: String, progress: u8 },

    #[error("Unknown {kind}: {label}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Grid supports 3, 5 or 7 columns, got {0}")]
    InvalidGridColumns(u8),

    #[error("Invalid date label {label:?}: {reason}")]
    InvalidDate { label: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
