use crate::error::{Result, VerbumpError};
use std::path::{Path, PathBuf};

pub struct PathValidator;

impl PathValidator {
    /// Canonical form of the project directory the manifest is looked up in.
    pub fn validate_project_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let project_dir = path.canonicalize().map_err(|e| {
            VerbumpError::ProjectValidation(format!(
                "Cannot open project directory '{}': {e}",
                path.display()
            ))
        })?;

        if !project_dir.is_dir() {
            return Err(VerbumpError::ProjectValidation(format!(
                "Project path '{}' is not a directory",
                project_dir.display()
            )));
        }

        Ok(project_dir)
    }

    /// Resolves the manifest and checks it is a regular file under `project_dir`,
    /// so `--manifest ../other/Cargo.toml` or a symlink out of the project is refused.
    pub fn validate_file_path(
        manifest: impl AsRef<Path>,
        project_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let manifest = manifest.as_ref();
        let project_dir = Self::validate_project_path(project_dir)?;

        let resolved = manifest.canonicalize().map_err(|e| {
            VerbumpError::ProjectValidation(format!(
                "Cannot resolve manifest '{}': {e}",
                manifest.display()
            ))
        })?;

        if !resolved.starts_with(&project_dir) {
            return Err(VerbumpError::ProjectValidation(format!(
                "Manifest '{}' lies outside project directory '{}'",
                resolved.display(),
                project_dir.display()
            )));
        }

        if !resolved.is_file() {
            return Err(VerbumpError::ProjectValidation(format!(
                "Manifest '{}' is not a file",
                resolved.display()
            )));
        }

        Ok(resolved)
    }
}
