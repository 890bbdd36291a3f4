//! strings-audit - locale completeness checker for Android string resources
//!
//! Compares every locale `values-*/strings.xml` against its base
//! `values/strings.xml` and reports missing keys, extra keys, entry kind
//! mismatches and duplicate keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, report output, exit status)
//! - `config`: Registry of known projects
//! - `core`: Audit engine (targets, loading, reconciliation)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
