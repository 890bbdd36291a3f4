//! CLI argument definitions using clap.
//!
//! The tool has a single mode: audit the selected projects (or a custom base
//! file and locale glob) and print one report per locale file.

use clap::{Parser, ValueEnum};

use super::report::MissingPreview;
use crate::core::ProjectSelection;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project(s) to scan
    #[arg(long, value_enum, default_value_t = ProjectArg::All)]
    pub project: ProjectArg,

    /// Custom base strings.xml; overrides --project (requires --locale-glob)
    #[arg(long, value_name = "PATH")]
    pub base: Option<String>,

    /// Custom locale glob; overrides --project (requires --base)
    #[arg(long, value_name = "PATTERN")]
    pub locale_glob: Option<String>,

    /// Comma-separated locale folders to process (e.g. values-es,values-ru)
    #[arg(long, value_name = "FOLDERS")]
    pub locales: Option<String>,

    /// Show first N missing keys per locale (0 = hidden, -1 = show all)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub show_missing: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with code 2 if any locale has missing keys
    #[arg(long)]
    pub fail_on_missing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn missing_preview(&self) -> MissingPreview {
        MissingPreview::from_limit(self.show_missing)
    }

    pub fn locales(&self) -> &str {
        self.locales.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProjectArg {
    All,
    App,
    Shared,
}

impl ProjectArg {
    pub fn selection(self) -> ProjectSelection<'static> {
        match self {
            ProjectArg::All => ProjectSelection::All,
            ProjectArg::App => ProjectSelection::Named("app"),
            ProjectArg::Shared => ProjectSelection::Named("shared"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
