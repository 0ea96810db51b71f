//! Page layouts of the individual documents.
//!
//! Each generator is a synchronous function from a record to a
//! [`Composition`]: the laid-out pages plus the PDF information entries.
//! Images are only referenced by slot here; the composer resolves them.

pub mod commissioning;
pub mod dcr_declaration;
pub mod ledger_reports;
pub mod model_agreement;
pub mod net_metering;
pub mod work_completion_letter;
pub mod work_completion_report;

use crate::records::InstallationRecord;
use solardocs_layout::{Block, Column, LaidOutDocument, LayoutContext, Rect, Table, TableStyle};
use solardocs_render_lopdf::DocumentInfo;

/// A laid-out document waiting for its images.
#[derive(Debug, Clone)]
pub struct Composition {
    pub layout: LaidOutDocument,
    pub info: DocumentInfo,
}

/// Left edge of the government forms.
pub(crate) const FORM_LEFT: f32 = 14.0;
/// Text width of the government forms.
pub(crate) const FORM_WIDTH: f32 = 180.0;

/// 10pt body text on the form grid, no extra space between blocks.
pub(crate) fn form_block(ctx: &LayoutContext) -> Block {
    Block::body(ctx.config()).at(FORM_LEFT, FORM_WIDTH).space_after(0.0)
}

/// The three-column `number / item / value` grid used by the reports.
pub(crate) fn observation_table(head: [&str; 3], rows: Vec<[String; 3]>) -> Table {
    Table::new(FORM_LEFT, vec![Column::new(15.0), Column::new(80.0), Column::new(80.0)])
        .head(head)
        .rows(rows)
        .style(TableStyle::default())
}

/// Moves the cursor down to `y` if it is above it.
pub(crate) fn move_down_to(ctx: &mut LayoutContext, y: f32) {
    if ctx.cursor_y() < y {
        ctx.set_cursor_y(y);
    }
}

/// Reserves a fixed box for an optional image blob.
pub(crate) fn image_box(ctx: &mut LayoutContext, source: &str, x: f32, y: f32, width: f32, height: f32) {
    ctx.image_slot(source, Rect::new(x, y, width, height));
}

pub(crate) fn record_info(title: &str, subject: &str, record: &InstallationRecord) -> DocumentInfo {
    DocumentInfo {
        title: Some(title.to_string()),
        subject: Some(subject.to_string()),
        author: non_empty(&record.company_name),
        creator: non_empty(&record.installer_name),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// Builds an observation row from a number, a label and a value.
pub(crate) fn row(number: &str, label: &str, value: impl Into<String>) -> [String; 3] {
    [number.to_string(), label.to_string(), value.into()]
}
