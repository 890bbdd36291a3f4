//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path lexically: drops `.` components and repeated or
/// trailing separators. `..` is kept as is.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use strings_audit::utils::normalize_path;
///
/// assert_eq!(normalize_path("./res//values/strings.xml"), Path::new("res/values/strings.xml"));
/// assert_eq!(normalize_path("res/../values/"), Path::new("res/../values"));
/// assert_eq!(normalize_path("./"), Path::new("."));
/// ```
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let normalized: PathBuf = path
        .as_ref()
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
