//! Report formatting and printing utilities.
//!
//! The audit report goes to stdout, either as plain text or as JSON.
//! Notices and errors go to stderr. Kept separate from the core so the
//! audit can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use crate::core::{AuditNotice, AuditReport, LocaleReport};

/// How many missing keys to list under each locale in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPreview {
    Hidden,
    All,
    First(usize),
}

impl MissingPreview {
    /// `0` hides the list, a negative limit shows everything.
    pub fn from_limit(limit: i64) -> Self {
        match usize::try_from(limit) {
            Ok(0) => MissingPreview::Hidden,
            Ok(n) => MissingPreview::First(n),
            Err(_) => MissingPreview::All,
        }
    }

    pub fn select<'a>(&self, missing: &'a [String]) -> &'a [String] {
        match *self {
            MissingPreview::Hidden => &[],
            MissingPreview::All => missing,
            MissingPreview::First(n) => &missing[..n.min(missing.len())],
        }
    }
}

/// Print the report to stdout in the requested format.
pub fn print(report: &AuditReport, format: OutputFormat, preview: MissingPreview) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_text(report, preview, &mut stdout),
        OutputFormat::Json => write_json(report, &mut stdout)?,
    }
    Ok(())
}

/// Write the text report to a custom writer.
pub fn write_text<W: Write>(report: &AuditReport, preview: MissingPreview, writer: &mut W) {
    for locale in &report.locales {
        write_locale_summary(locale, preview, writer);
    }
    let _ = writeln!(
        writer,
        "Total missing across locales: {}",
        report.total_missing
    );
}

/// Write the JSON report to a custom writer.
///
/// Output is pretty-printed with non-ASCII text kept as is.
pub fn write_json<W: Write>(report: &AuditReport, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report.")?;
    writeln!(writer, "{}", json).context("Failed to write report.")?;
    Ok(())
}

fn write_locale_summary<W: Write>(locale: &LocaleReport, preview: MissingPreview, writer: &mut W) {
    let _ = writeln!(
        writer,
        "[{}:{}] missing={} extra={} type_mismatch={} duplicates={}",
        locale.project,
        locale.locale,
        locale.missing_count,
        locale.extra_count,
        locale.type_mismatch_count,
        locale.duplicate_count
    );

    let keys = preview.select(&locale.missing_keys);
    if !keys.is_empty() {
        let _ = writeln!(writer, "  missing_keys:");
        for key in keys {
            let _ = writeln!(writer, "    - {}", key);
        }
    }

    let _ = writeln!(writer); // Empty line between locales
}

/// Print a notice to stderr. Verbose-only notices are dropped unless `verbose`.
pub fn print_notice(notice: &AuditNotice, verbose: bool) {
    print_notice_to(notice, verbose, &mut io::stderr().lock());
}

/// Print a notice to a custom writer.
pub fn print_notice_to<W: Write>(notice: &AuditNotice, verbose: bool, writer: &mut W) {
    if notice.is_verbose() && !verbose {
        return;
    }

    match notice {
        AuditNotice::BaseDuplicates { base_path, keys } => {
            let _ = writeln!(
                writer,
                "{} duplicate keys in base file ({}) ({}): {}",
                "warning:".bold().yellow(),
                base_path,
                keys.len(),
                keys.join(", ")
            );
        }
        AuditNotice::UnmatchedLocales { project, folders } => {
            let _ = writeln!(
                writer,
                "{} no locale files matched {} for project '{}'",
                "warning:".bold().yellow(),
                folders.join(", "),
                project
            );
        }
        AuditNotice::Scanning {
            project,
            locale_files,
        } => {
            let _ = writeln!(
                writer,
                "{} checking {} locale {} for project '{}'",
                "note:".bold().cyan(),
                locale_files,
                if *locale_files == 1 { "file" } else { "files" },
                project
            );
        }
    }
}

/// Print a fatal error to stderr, including its context chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".bold().red(), err);
}
