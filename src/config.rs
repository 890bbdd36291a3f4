//! Registry of known projects and their resource locations.
//!
//! Each project maps to one base `strings.xml` and a glob that matches its
//! per-locale `values-*/strings.xml` copies. Paths are relative to the
//! working directory the tool is run from.

use anyhow::{Context, Result};
use glob::Pattern;

/// Label used for targets built from `--base` / `--locale-glob`.
pub const CUSTOM_PROJECT: &str = "custom";

/// A registered project family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: &'static str,
    pub base: &'static str,
    pub locale_glob: &'static str,
}

/// All registered projects, in the order `--project all` expands to.
pub const PROJECTS: &[ProjectConfig] = &[
    ProjectConfig {
        name: "app",
        base: "app/src/main/res/values/strings.xml",
        locale_glob: "app/src/main/res/values-*/strings.xml",
    },
    ProjectConfig {
        name: "shared",
        base: "shared/src/commonMain/composeResources/values/strings.xml",
        locale_glob: "shared/src/commonMain/composeResources/values-*/strings.xml",
    },
];

pub fn find_project(name: &str) -> Option<&'static ProjectConfig> {
    PROJECTS.iter().find(|project| project.name == name)
}

/// Validate a locale glob before it is expanded.
pub fn validate_locale_glob(pattern: &str) -> Result<()> {
    Pattern::new(pattern)
        .with_context(|| format!("Invalid locale glob pattern: \"{}\"", pattern))?;
    Ok(())
}
