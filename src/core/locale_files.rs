//! Locale file selection for a scan target.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::targets::ScanTarget;
use crate::config::validate_locale_glob;
use crate::utils::normalize_path;

/// Locale folder names the caller restricted the scan to.
///
/// Empty means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFilter {
    folders: Vec<String>,
}

impl LocaleFilter {
    /// Parse a comma-separated list such as `values-es, values-ru`.
    pub fn parse(raw: &str) -> Self {
        let mut folders: Vec<String> = Vec::new();
        for folder in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !folders.iter().any(|f| f == folder) {
                folders.push(folder.to_string());
            }
        }
        Self { folders }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn allows(&self, folder: &str) -> bool {
        self.is_empty() || self.folders.iter().any(|f| f == folder)
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }
}

/// Locale files selected for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFiles {
    /// Matched files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Filter entries that matched none of the files.
    pub unmatched: Vec<String>,
}

/// Name of the folder directly containing a locale file (e.g. `values-es`).
pub fn locale_folder(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expand the target's locale glob and apply the folder filter.
///
/// Fails when nothing matches, either before or after filtering.
pub fn resolve_locale_files(target: &ScanTarget, filter: &LocaleFilter) -> Result<LocaleFiles> {
    validate_locale_glob(&target.locale_glob)?;

    // Entries under unreadable directories are skipped
    let mut files: Vec<PathBuf> = glob::glob(&target.locale_glob)
        .with_context(|| format!("Invalid locale glob pattern: \"{}\"", target.locale_glob))?
        .filter_map(Result::ok)
        .map(normalize_path)
        .collect();
    files.sort();
    files.retain(|path| filter.allows(&locale_folder(path)));

    if files.is_empty() {
        bail!(
            "No locale files matched for project '{}' with glob '{}'.",
            target.project,
            target.locale_glob
        );
    }

    let folders: Vec<String> = files.iter().map(|path| locale_folder(path)).collect();
    let unmatched = filter
        .folders()
        .iter()
        .filter(|folder| !folders.contains(folder))
        .cloned()
        .collect();

    Ok(LocaleFiles { files, unmatched })
}
