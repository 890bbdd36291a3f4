//! Core data types shared by the loading, reconciliation and reporting stages.
//!
//! ## Module Structure
//!
//! - `resource`: Parsed resource files (ResourceFile, EntryKind)
//! - `report`: Reconciliation results (LocaleReport, AuditReport)

pub mod report;
pub mod resource;

pub use report::{AuditReport, LocaleReport};
pub use resource::{EntryKind, ResourceFile};
