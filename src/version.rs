use crate::error::{Result, VerbumpError};
use std::cmp::Ordering;

/// Width every component is left-padded to before comparison.
pub const COMPONENT_WIDTH: usize = 8;

/// Comparison key for a dot-separated version string.
///
/// Components are compared as zero-padded strings rather than integers, so
/// ordering matches numeric ordering only while every component fits in
/// `COMPONENT_WIDTH` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKey {
    pub original: String,
    components: Vec<String>,
}

impl VersionKey {
    pub fn parse(version: &str) -> Self {
        let components = version
            .split('.')
            .map(|part| zero_fill(part, COMPONENT_WIDTH))
            .collect();

        VersionKey {
            original: version.to_string(),
            components,
        }
    }

    /// Parse a user supplied candidate, rejecting strings that would corrupt the manifest line.
    pub fn parse_candidate(version: &str) -> Result<Self> {
        if version.is_empty() {
            return Err(VerbumpError::InvalidVersion(
                "version must not be empty".to_string(),
            ));
        }

        if version.split('.').any(str::is_empty) {
            return Err(VerbumpError::InvalidVersion(format!(
                "{version}: empty version component"
            )));
        }

        if let Some(ch) = version.chars().find(|c| matches!(c, '"' | '\n' | '\r')) {
            return Err(VerbumpError::InvalidVersion(format!(
                "{version}: contains forbidden character {ch:?}"
            )));
        }

        Ok(Self::parse(version))
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}

/// Left-pads `part` with zeros to `width` chars, keeping a leading sign in front.
fn zero_fill(part: &str, width: usize) -> String {
    let (sign, digits) = if part.starts_with(['+', '-']) {
        part.split_at(1)
    } else {
        ("", part)
    };
    let pad = width.saturating_sub(part.chars().count());
    format!("{sign}{}{digits}", "0".repeat(pad))
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

pub struct VersionComparator;

impl VersionComparator {
    /// Fails with `VersionNotGreater` unless `next` sorts after `current`.
    pub fn ensure_newer(next: &VersionKey, current: &VersionKey) -> Result<()> {
        if next <= current {
            return Err(VerbumpError::VersionNotGreater {
                current: current.original.clone(),
            });
        }
        Ok(())
    }
}
