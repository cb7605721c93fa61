use crate::agents::{ManifestEditor, ProjectScannerAgent};
use crate::error::Result;
use crate::version::{VersionComparator, VersionKey};
use colored::Colorize;
use std::path::Path;

/// Outcome of a validated version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpReport {
    pub previous: String,
    pub next: String,
    pub written: bool,
}

/// Execute the bump workflow: validate the candidate and rewrite the manifest
pub fn execute_bump<P: AsRef<Path>>(
    project_path: P,
    manifest: &str,
    next_version: &str,
    dry_run: bool,
) -> Result<()> {
    let scanner = ProjectScannerAgent::new(project_path, manifest);
    let project_info = scanner.validate()?;
    crate::verbose!("Project directory {}", project_info.project_path.display());

    let report = bump_version(&project_info.manifest_path, next_version, dry_run)?;

    if report.written {
        println!(
            "{}",
            format!(
                "Set version successfully: {} -> {}",
                report.previous, report.next
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!("Would set version: {} -> {}", report.previous, report.next).yellow()
        );
    }

    Ok(())
}

/// Print the version currently declared in the manifest
pub fn execute_show<P: AsRef<Path>>(project_path: P, manifest: &str) -> Result<()> {
    let scanner = ProjectScannerAgent::new(project_path, manifest);
    let project_info = scanner.validate()?;

    let editor = ManifestEditor::new(&project_info.manifest_path)?;
    println!("{}", editor.require_current_version()?);
    Ok(())
}

/// Validate `next_version` against the manifest and write it unless `dry_run` is set.
///
/// The manifest is only touched after every check has passed.
pub fn bump_version(manifest_path: &Path, next_version: &str, dry_run: bool) -> Result<BumpReport> {
    let next = VersionKey::parse_candidate(next_version)?;

    let editor = ManifestEditor::new(manifest_path)?;
    let current_version = editor.require_current_version()?;
    let current = VersionKey::parse(&current_version);
    crate::verbose!(
        "Comparing {:?} against current {:?}",
        next.components(),
        current.components()
    );

    VersionComparator::ensure_newer(&next, &current)?;

    if dry_run {
        crate::verbose!("Dry run, {} left untouched", editor.manifest_path().display());
    } else {
        editor.set_version(&next.original)?;
    }

    Ok(BumpReport {
        previous: current_version,
        next: next.original,
        written: !dry_run,
    })
}
