use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    #[error("No version line found in '{}'", .0.display())]
    VersionNotFound(PathBuf),

    #[error("Invalid version, must be greater than previous: {current}")]
    VersionNotGreater { current: String },

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Failed to access manifest '{}': {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, VerbumpError>;
