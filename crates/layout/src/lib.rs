//! Page layout primitives shared by every solardocs document.
//!
//! Documents are composed imperatively against a [`LayoutContext`]: the
//! context owns the cursor and the list of pages, and the primitives in
//! [`flow`] and [`table`] move it forward, breaking pages as they go. The
//! result is a [`LaidOutDocument`] that a renderer turns into bytes.

pub mod algorithms;
pub mod config;
pub mod context;
pub mod elements;
pub mod flow;
pub mod fonts;
pub mod output;
pub mod table;
pub mod text;

pub use self::config::PageConfig;
pub use self::context::LayoutContext;
pub use self::elements::{
    ImageElement, ImageSlot, LayoutElement, LineElement, PositionedElement, RectElement,
    TextElement,
};
pub use self::flow::{Align, Block};
pub use self::fonts::{text_width, FontSpec, FontWeight, MM_PER_PT};
pub use self::output::LaidOutDocument;
pub use self::table::{Column, Table, TableStyle, TableTheme};
pub use self::text::{parse_spans, wrap_text, Span};

// Re-export geometry types so callers do not need the types crate directly
pub use solardocs_types::{Color, Rect, Size};
