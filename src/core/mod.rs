//! Core audit engine.
//!
//! The pipeline runs in three stages, each a pure function of its inputs:
//!
//! 1. **Targets**: resolve project selection into base file + locale glob pairs
//! 2. **Loading**: parse each `strings.xml` into declared keys and kinds
//! 3. **Reconciliation**: diff every locale file against its base file
//!
//! ## Module Structure
//!
//! - `audit`: Drives the pipeline over all targets
//! - `data`: Shared data types (ResourceFile, LocaleReport, AuditReport)
//! - `locale_files`: Locale glob expansion and folder filtering
//! - `parsers`: Resource document parsers
//! - `reconcile`: Missing / extra / type mismatch computation
//! - `targets`: Scan target resolution

pub mod audit;
pub mod data;
pub mod locale_files;
pub mod parsers;
pub mod reconcile;
pub mod targets;

pub use audit::{AuditNotice, run_audit};
pub use data::{AuditReport, EntryKind, LocaleReport, ResourceFile};
pub use locale_files::LocaleFilter;
pub use targets::{ProjectSelection, ScanTarget, resolve_targets};
