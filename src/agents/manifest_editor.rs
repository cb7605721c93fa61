use crate::error::{Result, VerbumpError};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Matches the first line-leading `version = "..."` assignment.
const VERSION_PATTERN: &str = r#"(?m)^version = "(.+?)""#;

/// Reads and rewrites the version line of a manifest.
///
/// The manifest is handled as plain text: only the matched line changes,
/// every other byte is written back as it was read.
pub struct ManifestEditor {
    manifest_path: PathBuf,
    version_re: Regex,
}

impl ManifestEditor {
    pub fn new<P: AsRef<Path>>(manifest_path: P) -> Result<Self> {
        Ok(Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
            version_re: Regex::new(VERSION_PATTERN)?,
        })
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Version captured from the first matching line, `None` when the manifest has none.
    pub fn current_version(&self) -> Result<Option<String>> {
        let content = self.read_content()?;
        Ok(self.find_version(&content).map(str::to_string))
    }

    /// Like `current_version`, but a missing version line is an error.
    pub fn require_current_version(&self) -> Result<String> {
        self.current_version()?
            .ok_or_else(|| VerbumpError::VersionNotFound(self.manifest_path.clone()))
    }

    /// Replace the first version line with `next_version` and write the manifest back.
    pub fn set_version(&self, next_version: &str) -> Result<()> {
        let content = self.read_content()?;
        let replaced = self
            .replace_version(&content, next_version)
            .ok_or_else(|| VerbumpError::VersionNotFound(self.manifest_path.clone()))?;

        if replaced == content {
            crate::verbose!("Manifest already declares {next_version}, rewriting unchanged");
        }

        self.write_content(&replaced)
    }

    fn find_version<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.version_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn replace_version(&self, content: &str, next_version: &str) -> Option<String> {
        let found = self.version_re.find(content)?;
        crate::verbose!(
            "Matched '{}' at byte {}",
            found.as_str(),
            found.start()
        );

        let mut replaced = String::with_capacity(content.len() + next_version.len());
        replaced.push_str(&content[..found.start()]);
        replaced.push_str(&format!("version = \"{next_version}\""));
        replaced.push_str(&content[found.end()..]);
        Some(replaced)
    }

    fn read_content(&self) -> Result<String> {
        fs::read_to_string(&self.manifest_path).map_err(|source| VerbumpError::ManifestIo {
            path: self.manifest_path.clone(),
            source,
        })
    }

    /// Writes through a sibling temp file that is renamed over the manifest.
    fn write_content(&self, content: &str) -> Result<()> {
        let io_err = |source| VerbumpError::ManifestIo {
            path: self.manifest_path.clone(),
            source,
        };

        let dir = match self.manifest_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let permissions = fs::metadata(&self.manifest_path)
            .map_err(io_err)?
            .permissions();

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        crate::verbose!("Staging manifest in {}", temp.path().display());

        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;
        temp.as_file().set_permissions(permissions).map_err(io_err)?;

        temp.persist(&self.manifest_path)
            .map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"[package]
name = "demo"
version = "1.2.3"
edition = "2021"

[dependencies]
serde = { version = "1.0" }

[dependencies.regex]
version = "1.10"
"#;

    fn write_manifest(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_first_version_line() {
        let (_dir, path) = write_manifest(MANIFEST);
        let editor = ManifestEditor::new(&path).unwrap();
        assert_eq!(editor.current_version().unwrap().as_deref(), Some("1.2.3"));
    }

    #[test]
    fn ignores_indented_and_inline_versions() {
        let (_dir, path) = write_manifest("serde = { version = \"1.0\" }\n  version = \"9.9.9\"\n");
        let editor = ManifestEditor::new(&path).unwrap();
        assert_eq!(editor.current_version().unwrap(), None);
        assert!(matches!(
            editor.require_current_version().unwrap_err(),
            VerbumpError::VersionNotFound(_)
        ));
    }

    #[test]
    fn rewrites_only_first_match() {
        let (_dir, path) = write_manifest(MANIFEST);
        let editor = ManifestEditor::new(&path).unwrap();
        editor.set_version("1.2.4").unwrap();

        let updated = fs::read_to_string(&path).unwrap();
        assert_eq!(
            updated,
            MANIFEST.replacen("version = \"1.2.3\"", "version = \"1.2.4\"", 1)
        );
        assert!(updated.contains("version = \"1.10\""));
    }

    #[test]
    fn writing_same_version_is_identity() {
        let (_dir, path) = write_manifest(MANIFEST);
        let editor = ManifestEditor::new(&path).unwrap();
        let current = editor.require_current_version().unwrap();
        editor.set_version(&current).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
    }

    #[test]
    fn preserves_crlf_line_endings() {
        let content = "[package]\r\nversion = \"0.1.0\"\r\nname = \"x\"\r\n";
        let (_dir, path) = write_manifest(content);
        let editor = ManifestEditor::new(&path).unwrap();
        editor.set_version("0.2.0").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[package]\r\nversion = \"0.2.0\"\r\nname = \"x\"\r\n"
        );
    }

    #[test]
    fn missing_version_line_is_an_error_and_leaves_file() {
        let content = "[package]\nname = \"demo\"\n";
        let (_dir, path) = write_manifest(content);
        let editor = ManifestEditor::new(&path).unwrap();

        let err = editor.set_version("1.0.0").unwrap_err();
        assert!(matches!(err, VerbumpError::VersionNotFound(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn missing_file_reports_manifest_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        let editor = ManifestEditor::new(&path).unwrap();

        let err = editor.current_version().unwrap_err();
        assert!(matches!(err, VerbumpError::ManifestIo { .. }));
        assert!(err.to_string().contains("Cargo.toml"));
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let (dir, path) = write_manifest(MANIFEST);
        let editor = ManifestEditor::new(&path).unwrap();
        editor.set_version("2.0.0").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
