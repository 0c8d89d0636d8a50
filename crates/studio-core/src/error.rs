use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("invalid project name '{0}': must contain at least one non-space character")]
    InvalidProjectName(String),

    #[error("base template not found for role '{role}' at {path}")]
    TemplateNotFound { role: String, path: PathBuf },

    #[error("malformed config at {path}: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("backup to {path} failed: {source}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
