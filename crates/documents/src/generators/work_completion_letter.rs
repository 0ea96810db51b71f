//! Work completion and hypothecation letter addressed to the financing bank.

use super::{move_down_to, Composition};
use crate::error::DocumentError;
use crate::records::WorkCompletionRecord;
use solardocs_layout::flow::paragraph;
use solardocs_layout::{Block, Color, Column, FontSpec, LayoutContext, PageConfig, Table, TableStyle};
use solardocs_render_lopdf::DocumentInfo;

const PRIMARY: Color = Color::rgb(108, 11, 169);
const SECONDARY: Color = Color::rgb(147, 112, 219);
const LIGHT: Color = Color::rgb(245, 240, 255);
const STRIPE: Color = Color::rgb(245, 245, 255);
const BODY_TEXT: Color = Color::gray(60);

const LEFT: f32 = 20.0;
/// From the greeting baseline to the last closing line.
const CLOSING_HEIGHT: f32 = 20.0;

/// Validates the record, then lays out the letter.
pub fn layout(record: &WorkCompletionRecord) -> Result<Composition, DocumentError> {
    record.validate()?;
    let r = record;

    let mut ctx = LayoutContext::new(PageConfig::a4());
    let width = ctx.config().content_width();
    centered(&mut ctx, 30.0, &r.installer_name, FontSpec::bold(18.0), PRIMARY);
    centered(
        &mut ctx,
        38.0,
        &format!("Location: {}", r.installer_address),
        FontSpec::normal(10.0),
        Color::gray(100),
    );
    centered(
        &mut ctx,
        44.0,
        &format!("Mobile No: {}", r.installer_contact),
        FontSpec::normal(10.0),
        Color::gray(100),
    );
    ctx.line((LEFT, 50.0), (LEFT + width, 50.0), SECONDARY, 0.5);

    let body = Block::body(ctx.config())
        .font(FontSpec::normal(12.0))
        .color(BODY_TEXT)
        .line_height(6.0)
        .space_after(0.0);
    let address = [
        "To,".to_string(),
        format!("{},", r.bank_name),
        format!("{},", r.bank_branch),
        format!("{}.", r.bank_location),
    ];
    for (i, line) in address.iter().enumerate() {
        ctx.colored_text_at(LEFT, 60.0 + i as f32 * 8.0, line, body.font, BODY_TEXT);
    }

    ctx.set_cursor_y(98.0);
    paragraph(
        &mut ctx,
        "Sub: Submission of Work Completion Report and Hypothecation of Solar Rooftop System",
        &body.bold().color(PRIMARY),
    );
    move_down_to(&mut ctx, 110.0);
    paragraph(&mut ctx, "Respected Sir/Madam,", &body);

    move_down_to(&mut ctx, 122.0);
    paragraph(
        &mut ctx,
        &format!(
            "With reference to the above subject, I hereby confirm that we have successfully completed the \
             installation work of a {} KW rooftop solar system at the residence of {} {}, as per the guidelines of \
             DISCOM under the net metering arrangement.",
            r.system_capacity, r.consumer_name, r.consumer_address
        ),
        &body,
    );
    ctx.advance(6.0);
    move_down_to(&mut ctx, 146.0);
    paragraph(
        &mut ctx,
        &format!(
            "In accordance with the loan arrangement, I hereby hypothecate the installed {} KW solar rooftop system \
             to {}, {} as security for the loan sanctioned to {} for this installation.",
            r.system_capacity, r.bank_name, r.bank_branch, r.consumer_name
        ),
        &body,
    );
    ctx.advance(4.0);
    move_down_to(&mut ctx, 165.0);
    paragraph(&mut ctx, "We kindly request you to release the pending payment at the earliest.", &body);

    move_down_to(&mut ctx, 170.0);
    let table_end = details_table(r, width).draw(&mut ctx);

    ctx.set_cursor_y(table_end + 10.0);
    if ctx.ensure_space(CLOSING_HEIGHT) {
        log::debug!("letter closing does not fit below the details table, moving it");
    }
    let closing_y = ctx.cursor_y();
    for (dy, line) in [
        (0.0, "Yours Sincerely,"),
        (15.0, "(Signature and Stamp)"),
        (CLOSING_HEIGHT, "Authorized Representative"),
    ] {
        ctx.colored_text_at(LEFT, closing_y + dy, line, body.font, BODY_TEXT);
    }
    ctx.set_cursor_y(closing_y + CLOSING_HEIGHT + 5.0);

    Ok(Composition {
        layout: ctx.finish(),
        info: DocumentInfo {
            title: Some("Work Completion Report and Hypothecation".to_string()),
            subject: Some(format!("Hypothecation to {}", r.bank_name)),
            author: Some(r.installer_name.clone()),
            creator: Some(r.installer_name.clone()),
        },
    })
}

fn centered(ctx: &mut LayoutContext, y: f32, text: &str, font: FontSpec, color: Color) {
    let x = ctx.config().center_x() - font.text_width(text) / 2.0;
    ctx.colored_text_at(x, y, text, font, color);
}

fn details_table(r: &WorkCompletionRecord, width: f32) -> Table {
    let style = TableStyle {
        font_size: 11.0,
        padding: 4.0,
        line_color: SECONDARY,
        head_fill: Some(LIGHT),
        head_text: BODY_TEXT,
        stripe_fill: Some(STRIPE),
        min_row_height: 12.0,
        ..TableStyle::default()
    };
    Table::new(LEFT, vec![Column::new(50.0), Column::new(width - 50.0)])
        .head(["Detail", "Information"])
        .row(["Consumer Name:".to_string(), r.consumer_name.clone()])
        .row(["Consumer Number:".to_string(), r.consumer_mobile.clone()])
        .row(["System Capacity:".to_string(), format!("{} KW", r.system_capacity)])
        .row(["Installation Address:".to_string(), r.consumer_address.clone()])
        .style(style)
}
