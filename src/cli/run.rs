use anyhow::Result;

use super::args::Arguments;
use crate::core::{AuditNotice, AuditReport, LocaleFilter, resolve_targets, run_audit};

/// Resolve targets from the arguments and audit them.
///
/// Target resolution happens before any file is touched, so a bad
/// `--base` / `--locale-glob` combination fails without I/O.
pub fn run(args: &Arguments, on_notice: impl FnMut(AuditNotice)) -> Result<AuditReport> {
    let targets = resolve_targets(
        args.project.selection(),
        args.base.as_deref(),
        args.locale_glob.as_deref(),
    )?;
    let filter = LocaleFilter::parse(args.locales());

    run_audit(&targets, &filter, on_notice)
}
