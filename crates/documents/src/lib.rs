//! Installation paperwork and ledger exports as PDF.
//!
//! A document is produced in three steps:
//!
//! 1. a generator in [`generators`] lays the record out against a
//!    [`solardocs_layout::LayoutContext`];
//! 2. the [`DocumentComposer`] resolves the image slots of that layout;
//! 3. the lopdf renderer serialises the pages.
//!
//! Generators are pure functions of their record and
//! [`GenerationOptions`], which makes them easy to test without producing
//! bytes.

pub mod compose;
pub mod dates;
mod error;
pub mod generators;
mod kind;
pub mod output;
pub mod records;

pub use compose::DocumentComposer;
pub use error::DocumentError;
pub use generators::Composition;
pub use kind::DocumentKind;
pub use output::{GeneratedDocument, GenerationOptions, OutputMode, PDF_MIME};
pub use records::{InstallationRecord, WorkCompletionRecord, MAX_MODULES};
