//! PDF renderer for laid-out solardocs documents, using lopdf.
//!
//! The layout layer works in millimetres from the top-left corner; this
//! crate is the only place that converts to PDF points and flips the y axis.

mod error;
mod helpers;
mod renderer;

pub use error::RenderError;
pub use helpers::{flip_y, mm_to_pt, to_win_ansi};
pub use renderer::{DocumentInfo, PdfRenderer};
