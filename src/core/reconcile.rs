//! Key reconciliation between a base resource file and one locale file.

use super::data::{LocaleReport, ResourceFile};

/// Identifies the locale file a report describes.
#[derive(Debug, Clone, Copy)]
pub struct ReportSubject<'a> {
    pub project: &'a str,
    pub locale: &'a str,
    pub path: &'a str,
}

/// Base keys the locale does not declare, in base order.
pub fn missing_keys(base: &ResourceFile, locale: &ResourceFile) -> Vec<String> {
    base.keys()
        .filter(|key| !locale.contains_key(key))
        .map(String::from)
        .collect()
}

/// Locale keys the base does not declare, in locale order.
pub fn extra_keys(base: &ResourceFile, locale: &ResourceFile) -> Vec<String> {
    locale
        .keys()
        .filter(|key| !base.contains_key(key))
        .map(String::from)
        .collect()
}

/// Keys declared by both files with different entry kinds, in locale order.
pub fn type_mismatch_keys(base: &ResourceFile, locale: &ResourceFile) -> Vec<String> {
    locale
        .keys()
        .filter(|key| match (base.get(key), locale.get(key)) {
            (Some(expected), Some(actual)) => expected != actual,
            _ => false,
        })
        .map(String::from)
        .collect()
}

pub fn reconcile(
    subject: ReportSubject<'_>,
    base: &ResourceFile,
    locale: &ResourceFile,
) -> LocaleReport {
    let missing_keys = missing_keys(base, locale);
    let extra_keys = extra_keys(base, locale);
    let type_mismatch_keys = type_mismatch_keys(base, locale);
    let duplicate_keys = locale.duplicates.clone();

    LocaleReport {
        project: subject.project.to_string(),
        locale: subject.locale.to_string(),
        path: subject.path.to_string(),
        base_path: base.file_path.clone(),
        missing_count: missing_keys.len(),
        extra_count: extra_keys.len(),
        type_mismatch_count: type_mismatch_keys.len(),
        duplicate_count: duplicate_keys.len(),
        missing_keys,
        extra_keys,
        type_mismatch_keys,
        duplicate_keys,
    }
}
