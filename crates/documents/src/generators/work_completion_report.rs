//! Detailed work completion report with stability and guarantee certificates.

use super::{form_block, image_box, move_down_to, observation_table, record_info, row, Composition, FORM_LEFT};
use crate::output::GenerationOptions;
use crate::records::InstallationRecord;
use solardocs_layout::flow::paragraph;
use solardocs_layout::{Color, FontSpec, LayoutContext, PageConfig, Rect};

const AADHAR_WIDTH: f32 = 180.0;
const AADHAR_HEIGHT: f32 = 90.0;

pub fn layout(record: &InstallationRecord, _options: &GenerationOptions) -> Composition {
    let mut ctx = LayoutContext::new(PageConfig::a4());
    let r = record;

    ctx.centered_text_at(15.0, "Work Completion Report for Solar Power Plant", FontSpec::bold(16.0));
    ctx.set_cursor_y(25.0);
    let table_end = observation_table(["Sr.No", "Component", "Observation"], observations(r)).draw(&mut ctx);

    ctx.set_cursor_y(table_end + 10.0);
    let block = form_block(&ctx);
    paragraph(
        &mut ctx,
        "This is to Certified above Installed Solar PV System is working properly with electrical safety & \
         Islanding switch in case of any presence of backup inverter an arrangement should be made in such way the \
         backup inverter supply should never be synchronized with solar inverter to avoid any electrical accident \
         due to back feeding. We will be held responsible for non-working of islanding mechanism and back feed to \
         the de-energized grid.",
        &block,
    );

    ctx.start_page();
    stability_certificate(&mut ctx, r);
    guarantee_certificate(&mut ctx, r);

    Composition {
        layout: ctx.finish(),
        info: record_info("Work Completion Report", "Solar Power Plant", record),
    }
}

fn observations(r: &InstallationRecord) -> Vec<[String; 3]> {
    vec![
        row("1", "Name", &r.consumer_name),
        row("2", "Consumer number", &r.consumer_number),
        row("3", "Site/Location With Complete Address", &r.address),
        row("4", "Category: Govt/Private Sector", &r.category),
        row("5", "Total Capacity (KWP)", &r.sanctioned_capacity),
        row("6", "Sanctioned Capacity of solar PV system (KW)", &r.sanctioned_capacity),
        row("", "Installed Capacity of solar PV system (KW)", &r.installed_capacity_rooftop),
        row("7", "Make of Module", &r.module_manufacturer),
        row("", "Wattage per module", &r.module_wattage),
        row("", "No. of Module", &r.number_of_modules),
        row("", "ALMM Model Number", ""),
        row("8", "Make & Model Number of Inverter", &r.inverter_make),
        row("", "Rating", &r.inverter_rating),
        row("", "Type of charge controller/ MPPT", &r.charge_controller_type),
        row("", "Capacity of Inverter", &r.inverter_capacity),
        row("", "HPD", "N.A."),
        row("", "Year of manufacturing", &r.manufacturing_year),
        row("9", "No. of Separate Earthings with Earth Resistance", &r.earthing_count),
        row(
            "",
            "It is certified that the Earth Resistance measure in presence of Licensed Electrical \
             Contractor/Supervisor and found in order i.e. < 5 Ohms as per MNRE OM Dtd. 07.06.24 for CFA Component.",
            "Yes",
        ),
        row("10", "Lightening Arrester", &r.lightning_arrester),
        row("", "Warrantee Details (Product + Performance)", &r.warranty_details),
        row("", "Sanction number", &r.sanction_number),
    ]
}

fn stability_certificate(ctx: &mut LayoutContext, r: &InstallationRecord) {
    let block = form_block(ctx);
    paragraph(
        ctx,
        &format!(
            "We, {} & {}, bearing Consumer Number {}, have obtained requisite permissions from the concerned \
             authority. If in the future, by virtue of any means due to collapsing or damage to the installed solar \
             power plant, MSEDCL will not be held responsible for any loss to property or human life, if any.",
            r.company_name, r.consumer_name, r.consumer_number
        ),
        &block,
    );

    // Boxes hang 15mm above the signature line, the company name sits 15mm below it.
    move_down_to(ctx, 45.0);
    ctx.ensure_space(30.0);
    let signature_y = ctx.cursor_y() + 15.0;
    let font = FontSpec::normal(10.0);
    ctx.rect(Rect::new(30.0, signature_y - 15.0, 50.0, 20.0), Color::BLACK, 0.2);
    ctx.rect(Rect::new(130.0, signature_y - 15.0, 50.0, 20.0), Color::BLACK, 0.2);
    ctx.text_at(45.0, signature_y + 10.0, "Signature", font);
    ctx.text_at(30.0, signature_y + 15.0, &r.company_name, font);
    ctx.text_at(145.0, signature_y + 10.0, "Signature", font);
    image_box(ctx, &r.company_stamp, 35.0, signature_y - 13.0, 40.0, 16.0);
    image_box(ctx, &r.customer_signature, 135.0, signature_y - 13.0, 40.0, 16.0);
    ctx.set_cursor_y(signature_y + 40.0);
}

fn guarantee_certificate(ctx: &mut LayoutContext, r: &InstallationRecord) {
    move_down_to(ctx, 100.0);
    ctx.ensure_space(15.0);
    let heading_y = ctx.cursor_y();
    ctx.centered_text_at(
        heading_y,
        "Guarantee Certificate Undertaking to be submitted by VENDOR",
        FontSpec::bold(14.0),
    );

    ctx.set_cursor_y(heading_y + 15.0);
    let block = form_block(ctx);
    paragraph(
        ctx,
        "The undersigned will provide the services to the consumers for repairs/maintenance of the RTS plant free \
         of cost for 5 years of the comprehensive Maintenance Contract (CMC) period from the date of commissioning \
         of the plant. Non-performing/under-performing system component will be replaced/repaired free of cost in \
         the CMC period.",
        &block,
    );

    move_down_to(ctx, heading_y + 35.0);
    ctx.ensure_space(40.0);
    let sign_y = ctx.cursor_y() + 15.0;
    let font = FontSpec::normal(10.0);
    let page_width = ctx.config().width;
    image_box(ctx, &r.vendor_signature, page_width - 80.0, sign_y - 15.0, 40.0, 16.0);
    ctx.text_at(page_width - 75.0, sign_y + 10.0, "Vendor Signature", font);
    ctx.text_at(FORM_LEFT, sign_y + 20.0, &format!("Consumer Number: {}", r.consumer_number), font);
    ctx.text_at(FORM_LEFT, sign_y + 25.0, &format!("Aadhar Number:     {}", r.aadhar_number), font);
    ctx.set_cursor_y(sign_y + 30.0);

    if r.aadhar_image.trim().is_empty() {
        return;
    }
    ctx.set_cursor_y(sign_y + 35.0);
    if ctx.ensure_space(5.0 + AADHAR_HEIGHT) {
        log::debug!("Aadhar scan does not fit below the guarantee, moving it to a new page");
    }
    let image_y = ctx.cursor_y() + 5.0;
    ctx.text_at(FORM_LEFT, image_y - 5.0, "Aadhar Card:", font);
    image_box(ctx, &r.aadhar_image, FORM_LEFT, image_y, AADHAR_WIDTH, AADHAR_HEIGHT);
    ctx.set_cursor_y(image_y + AADHAR_HEIGHT);
}
