//! Annexure-A undertaking for the Domestic Content Requirement.
//!
//! The signature block moves to a page of its own once the installation has
//! more than four modules; with four or fewer it stays below the serial
//! table unless it would cross the page-break threshold.

use super::{form_block, image_box, record_info, Composition, FORM_LEFT};
use crate::dates::format_date;
use crate::output::GenerationOptions;
use crate::records::InstallationRecord;
use solardocs_layout::flow::{labelled, paragraph};
use solardocs_layout::{Column, FontSpec, LayoutContext, PageConfig, Table, TableStyle, TableTheme};

/// Module count above which the signature block starts a new page.
pub const SIGNATURE_PAGE_THRESHOLD: usize = 4;

/// Extent of the signature block around its anchor line.
const SIGNATURE_ABOVE: f32 = 15.0;
const SIGNATURE_BELOW: f32 = 45.0;

const DETAIL_LINE: f32 = 5.0;

pub fn layout(record: &InstallationRecord, _options: &GenerationOptions) -> Composition {
    let mut ctx = LayoutContext::new(PageConfig::a4());
    let r = record;

    ctx.centered_text_at(15.0, "Annexure -A", FontSpec::bold(14.0));
    ctx.centered_text_at(
        22.0,
        "Undertaking/Self- Declaration for Domestic Content Requirement fulfillment",
        FontSpec::bold(12.0),
    );
    ctx.centered_text_at(28.0, "(On a plain Paper)", FontSpec::bold(12.0));

    let block = form_block(&ctx);
    let clause = block.at(FORM_LEFT, 182.0);
    ctx.set_cursor_y(40.0);
    paragraph(
        &mut ctx,
        &format!(
            "This is to certify that M/S {} has installed {} KW Grid Connected Rooftop Solar Plant for {} at {} \
             under application number {} under MAHARASHTRA ELECTRICITY DISTRIBUTION CO. LTD.",
            r.installer_name, r.sanctioned_capacity, r.consumer_name, r.address, r.sanction_number
        ),
        &block,
    );

    ctx.advance(5.0);
    labelled(
        &mut ctx,
        "2",
        "It is hereby undertaken that the PV modules installed for the above-mentioned project are domestically \
         manufactured using domestic manufactured solar cells. The details of installed PV Modules are follows:",
        &clause,
        6.0,
    );

    module_table(r).draw(&mut ctx);
    ctx.advance(5.0);
    let table_end = serial_table(r).draw(&mut ctx);

    let font = FontSpec::normal(10.0);
    let gst = format!("{} Date.{}", r.cell_gst_invoice, format_date(&r.cell_gst_date));
    let details = [
        ("4. PV Module Make:", r.module_manufacturer.as_str()),
        ("5. Cell manufacturer's name –", r.cell_manufacturer.as_str()),
        ("6. Cell GST invoice No –", gst.as_str()),
    ];
    ctx.set_cursor_y(table_end + 15.0);
    ctx.ensure_space(DETAIL_LINE * (details.len() - 1) as f32);
    let mut y = ctx.cursor_y();
    for (label, value) in details {
        ctx.text_at(FORM_LEFT, y, label, font);
        ctx.text_at(80.0, y, value, font);
        y += DETAIL_LINE;
    }

    ctx.set_cursor_y(y + 10.0);
    labelled(
        &mut ctx,
        "3",
        "The above undertaking is based on the certificate issued by PV Module manufacturer/supplier while \
         supplying the above mentioned order.",
        &clause,
        6.0,
    );
    ctx.advance(5.0);
    labelled(
        &mut ctx,
        "4",
        &format!(
            "I, {} on behalf of {} further declare that the information given above is true and correct and \
             nothing has been concealed therein. If anything is found incorrect at any stage,then REC/ MNRE may \
             take any appropriate action against my company for wrong declaration. Supporting documents and proof \
             of the above information will be provided as and when requested by MNRE.",
            r.installer_name, r.company_name
        ),
        &clause,
        6.0,
    );

    ctx.advance(10.0);
    signature_block(&mut ctx, r);

    Composition {
        layout: ctx.finish(),
        info: record_info(
            "Annexure-A",
            "Undertaking/Self-Declaration for Domestic Content Requirement",
            record,
        ),
    }
}

fn module_table(r: &InstallationRecord) -> Table {
    let style = TableStyle {
        theme: TableTheme::Plain,
        padding: 2.0,
        head_fill: None,
        ..TableStyle::default()
    };
    Table::new(FORM_LEFT, vec![Column::new(80.0), Column::new(80.0)])
        .row(["1. PV Module Capacity".to_string(), format!(":- {}", r.module_capacity)])
        .row(["2. Number of PV Modules".to_string(), format!(":- {}", r.number_of_modules)])
        .row(["3. Sr No of PV Module", ""])
        .style(style)
}

/// Non-blank serials two to a row, numbered by their position in that list.
pub fn serial_rows(r: &InstallationRecord) -> Vec<[String; 4]> {
    let serials: Vec<&str> = r.serials().collect();
    serials
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let n = i * 2 + 1;
            match pair {
                [a, b] => [n.to_string(), a.to_string(), (n + 1).to_string(), b.to_string()],
                [a] => [n.to_string(), a.to_string(), String::new(), String::new()],
                _ => Default::default(),
            }
        })
        .collect()
}

fn serial_table(r: &InstallationRecord) -> Table {
    Table::new(
        FORM_LEFT,
        vec![Column::new(15.0), Column::new(76.0), Column::new(15.0), Column::new(76.0)],
    )
    .head(["Sr", "Serial Number", "Sr", "Serial Number"])
    .rows(serial_rows(r))
}

fn signature_block(ctx: &mut LayoutContext, r: &InstallationRecord) {
    let moved = if r.module_count() > SIGNATURE_PAGE_THRESHOLD {
        ctx.new_page();
        true
    } else if ctx.ensure_space(SIGNATURE_BELOW) {
        log::debug!("DCR signature block does not fit below the serial table, moving it");
        true
    } else {
        false
    };
    if moved {
        ctx.advance(SIGNATURE_ABOVE);
    }
    let y = ctx.cursor_y();

    let box_x = ctx.config().width - 100.0;
    image_box(ctx, &r.company_stamp, box_x + 5.0, y - SIGNATURE_ABOVE, 70.0, 30.0);

    let font = FontSpec::normal(10.0);
    let lines = [
        format!("For {}", r.company_name),
        format!("Name: {}", r.installer_name),
        format!("Designation: {}", r.installer_designation),
        format!("Phone: {}", r.installer_phone),
        format!("Email: {}", r.installer_email),
    ];
    for (i, line) in lines.iter().enumerate() {
        ctx.text_at(box_x, y + 25.0 + i as f32 * 5.0, line, font);
    }
    ctx.set_cursor_y(y + SIGNATURE_BELOW + 5.0);
}
