use crate::error::{Result, VerbumpError};
use crate::utils::path_validator::PathValidator;
use std::path::{Path, PathBuf};

/// ProjectScannerAgent locates the manifest inside the project directory
pub struct ProjectScannerAgent {
    project_path: PathBuf,
    manifest_name: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>, M: AsRef<Path>>(project_path: P, manifest_name: M) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            manifest_name: manifest_name.as_ref().to_path_buf(),
        }
    }

    /// Validates the project structure
    pub fn validate(&self) -> Result<ProjectInfo> {
        let project_path = PathValidator::validate_project_path(&self.project_path)?;

        let candidate = project_path.join(&self.manifest_name);
        if !candidate.exists() {
            return Err(VerbumpError::ProjectValidation(format!(
                "{} not found in '{}'",
                self.manifest_name.display(),
                project_path.display()
            )));
        }

        let manifest_path = PathValidator::validate_file_path(&candidate, &project_path)?;
        crate::verbose!("Using manifest {}", manifest_path.display());

        Ok(ProjectInfo {
            project_path,
            manifest_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_path: PathBuf,
    pub manifest_path: PathBuf,
}
