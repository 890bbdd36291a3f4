//! Runs the whole pipeline: targets → locale files → loading → reconciliation.

use anyhow::{Result, bail};

use super::{
    data::AuditReport,
    locale_files::{LocaleFilter, locale_folder, resolve_locale_files},
    parsers::xml::load_resource_file,
    reconcile::{ReportSubject, reconcile},
    targets::ScanTarget,
};

/// Side-channel notice raised while auditing.
///
/// Notices never change the report or the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditNotice {
    /// The base file repeats some keys; only the first declarations count.
    BaseDuplicates { base_path: String, keys: Vec<String> },
    /// Requested locale folders with no file for this target.
    UnmatchedLocales { project: String, folders: Vec<String> },
    /// A target is about to be reconciled.
    Scanning { project: String, locale_files: usize },
}

impl AuditNotice {
    /// True for notices only shown in verbose mode.
    pub fn is_verbose(&self) -> bool {
        matches!(self, AuditNotice::Scanning { .. })
    }
}

/// Audit every target in order, stopping at the first failure.
///
/// `on_notice` is called as notices occur so they reach the user even when a
/// later target aborts the run.
pub fn run_audit(
    targets: &[ScanTarget],
    filter: &LocaleFilter,
    mut on_notice: impl FnMut(AuditNotice),
) -> Result<AuditReport> {
    let mut report = AuditReport::default();

    for target in targets {
        if !target.base.is_file() {
            bail!("Base strings file not found: {}", target.base.display());
        }

        let locale_files = resolve_locale_files(target, filter)?;
        if !locale_files.unmatched.is_empty() {
            on_notice(AuditNotice::UnmatchedLocales {
                project: target.project.clone(),
                folders: locale_files.unmatched.clone(),
            });
        }

        let base = load_resource_file(&target.base)?;
        if !base.duplicates.is_empty() {
            on_notice(AuditNotice::BaseDuplicates {
                base_path: base.file_path.clone(),
                keys: base.duplicates.clone(),
            });
        }

        on_notice(AuditNotice::Scanning {
            project: target.project.clone(),
            locale_files: locale_files.files.len(),
        });

        for path in &locale_files.files {
            let locale = load_resource_file(path)?;
            let folder = locale_folder(path);
            let subject = ReportSubject {
                project: &target.project,
                locale: &folder,
                path: &locale.file_path,
            };
            report.push(reconcile(subject, &base, &locale));
        }
    }

    Ok(report)
}
