//! Target resolution: turns project selection or custom paths into scan targets.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::config::{CUSTOM_PROJECT, PROJECTS, ProjectConfig, find_project};
use crate::utils::normalize_path;

/// One base file and the glob matching its locale copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub project: String,
    pub base: PathBuf,
    pub locale_glob: String,
}

impl From<&ProjectConfig> for ScanTarget {
    fn from(project: &ProjectConfig) -> Self {
        Self {
            project: project.name.to_string(),
            base: PathBuf::from(project.base),
            locale_glob: project.locale_glob.to_string(),
        }
    }
}

/// What the caller asked to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSelection<'a> {
    All,
    Named(&'a str),
}

/// Resolve the targets to scan.
///
/// A custom base path or locale glob overrides the project selection, and the
/// two must be given together. Empty strings count as not given.
pub fn resolve_targets(
    selection: ProjectSelection<'_>,
    base: Option<&str>,
    locale_glob: Option<&str>,
) -> Result<Vec<ScanTarget>> {
    let base = base.filter(|s| !s.is_empty());
    let locale_glob = locale_glob.filter(|s| !s.is_empty());

    match (base, locale_glob) {
        (Some(base), Some(locale_glob)) => {
            return Ok(vec![ScanTarget {
                project: CUSTOM_PROJECT.to_string(),
                base: normalize_path(base),
                locale_glob: locale_glob.to_string(),
            }]);
        }
        (None, None) => {}
        _ => bail!("--base and --locale-glob must be provided together"),
    }

    match selection {
        ProjectSelection::All => Ok(PROJECTS.iter().map(ScanTarget::from).collect()),
        ProjectSelection::Named(name) => match find_project(name) {
            Some(project) => Ok(vec![ScanTarget::from(project)]),
            None => bail!("Unknown project '{}'", name),
        },
    }
}
