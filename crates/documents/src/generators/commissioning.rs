//! Annexure-I commissioning report and the Proforma-A certificate.

use super::{form_block, image_box, move_down_to, observation_table, record_info, row, Composition, FORM_LEFT};
use crate::dates::format_date;
use crate::output::GenerationOptions;
use crate::records::InstallationRecord;
use solardocs_layout::flow::paragraph;
use solardocs_layout::{Color, FontSpec, LayoutContext, PageConfig, Rect};

pub fn layout(record: &InstallationRecord, _options: &GenerationOptions) -> Composition {
    let mut ctx = LayoutContext::new(PageConfig::a4());

    ctx.centered_text_at(15.0, "Renewable Energy Generating System", FontSpec::bold(16.0));
    ctx.centered_text_at(22.0, "Annexure-I", FontSpec::bold(14.0));
    ctx.centered_text_at(29.0, "(Commissioning Report for RE System)", FontSpec::bold(14.0));

    ctx.set_cursor_y(35.0);
    observation_table(["SNo.", "Particulars", "As Commissioned"], particulars(record)).draw(&mut ctx);

    ctx.start_page();
    certificate(&mut ctx, record);

    Composition {
        layout: ctx.finish(),
        info: record_info(
            "Annexure-I Commissioning Report",
            "Renewable Energy Generating System",
            record,
        ),
    }
}

fn particulars(r: &InstallationRecord) -> Vec<[String; 3]> {
    vec![
        row("1", "Name of the Consumer", &r.consumer_name),
        row("2", "Consumer Number", &r.consumer_number),
        row("3", "Mobile Number", &r.mobile_number),
        row("4", "E-mail", &r.email),
        row("5", "Address of Installation", &r.address),
        row("6", "RE Arrangement Type", &r.re_arrangement_type),
        row("7", "RE Source", &r.re_source),
        row("8", "Sanctioned Capacity(KW)", &r.sanctioned_capacity),
        row("9", "Capacity Type", &r.capacity_type),
        row("10", "Project Model", &r.project_model),
        row("11", "RE installed Capacity(Rooftop)(KW)", &r.installed_capacity_rooftop),
        row("12", "RE installed Capacity(Rooftop + Ground)(KW)", &r.installed_capacity_total),
        row("13", "RE installed Capacity(Ground)(KW)", &r.installed_capacity_ground),
        row("14", "Installation date", format_date(&r.installation_date)),
        row("15", "SolarPV Details Inverter Capacity(KW)", &r.inverter_capacity),
        row("", "Inverter Make", &r.inverter_make),
        row("", "No .of PV Modules", &r.number_of_modules),
        row("", "Module Capacity (KW)", &r.module_capacity),
    ]
}

fn certificate(ctx: &mut LayoutContext, r: &InstallationRecord) {
    ctx.centered_text_at(20.0, "Proforma-A", FontSpec::bold(16.0));
    ctx.centered_text_at(
        30.0,
        "COMMISSIONING REPORT (PROVISIONAL) FOR GRID CONNECTED SOLAR",
        FontSpec::bold(14.0),
    );
    ctx.centered_text_at(
        40.0,
        "PHOTOVOLTAIC POWER PLANT (with Net-metering facility)",
        FontSpec::bold(14.0),
    );

    let installed_on = format_date(&r.installation_date);
    let text = format!(
        "Certified that a Grid Connected SPV Power Plant of {} KWp capacity has been installed at the site {} \
         District {} of MAHARASHTRA which has been installed by M/S {} on {}.\n\
         The system is as per BIS/MNRE specifications. The system has been checked for its performance and found \
         in order for further commissioning.",
        r.sanctioned_capacity,
        r.address,
        r.district(),
        r.company_name,
        installed_on,
    );
    ctx.set_cursor_y(60.0);
    let block = form_block(ctx);
    paragraph(ctx, &text, &block);

    // Signature boxes start 15mm above the signature line, officer block ends 110mm below.
    move_down_to(ctx, 85.0);
    ctx.ensure_space(125.0);
    let signature_y = ctx.cursor_y() + 15.0;
    let font = FontSpec::normal(10.0);

    ctx.rect(Rect::new(20.0, signature_y - 15.0, 60.0, 30.0), Color::BLACK, 0.2);
    ctx.rect(Rect::new(120.0, signature_y - 15.0, 60.0, 30.0), Color::BLACK, 0.2);
    ctx.text_at(30.0, signature_y + 20.0, "Signature of the beneficiary", font);
    ctx.text_at(110.0, signature_y + 20.0, "Signature of the agency with name, seal and date", font);
    image_box(ctx, &r.customer_signature, 25.0, signature_y - 13.0, 50.0, 30.0);
    image_box(ctx, &r.company_stamp, 125.0, signature_y - 13.0, 50.0, 30.0);

    let inspection_y = signature_y + 50.0;
    ctx.text_at(
        FORM_LEFT,
        inspection_y,
        "The above RTS installation has been inspected by me for Pre-Commissioning Testing of Roof Top Solar",
        font,
    );
    ctx.text_at(
        FORM_LEFT,
        inspection_y + 5.0,
        &format!(
            "Connection on DT {} as per guidelines issued by the office of The Chief Engineer vide letter no 21653 on",
            format_date(&r.msedcl_inspection_date)
        ),
        font,
    );
    ctx.text_at(FORM_LEFT, inspection_y + 10.0, "dt.18.08.2022 and found in order for commissioning.", font);

    let officer_y = inspection_y + 25.0;
    ctx.text_at(FORM_LEFT, officer_y + 20.0, "Signature of the MSEDCL Officer", font);
    ctx.text_at(FORM_LEFT, officer_y + 25.0, &format!("Name: {}", r.msedcl_officer_name), font);
    ctx.text_at(
        FORM_LEFT,
        officer_y + 30.0,
        &format!("Designation: {}", r.msedcl_officer_designation),
        font,
    );
    ctx.text_at(FORM_LEFT, officer_y + 35.0, "Date and seal", font);
    ctx.set_cursor_y(officer_y + 40.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;

    fn options() -> GenerationOptions {
        GenerationOptions::new(Default::default(), fixtures::today())
    }

    #[test]
    fn particulars_table_then_certificate_page() {
        let doc = layout(&fixtures::installation(6), &options()).layout;
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.find_text("Name of the Consumer"), Some(0));
        assert_eq!(doc.find_text("Module Capacity (KW)"), Some(0));
        assert_eq!(doc.find_text("Proforma-A"), Some(1));
        assert_eq!(doc.find_text("Date and seal"), Some(1));
    }

    #[test]
    fn certificate_names_the_district_and_date() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        let text = doc.page_text(1).join(" ");
        assert!(text.contains("District Dhule"));
        assert!(text.contains("10/2/2024"));
        assert!(text.contains("Connection on DT 20/2/2024"));
    }

    #[test]
    fn signature_images_are_slotted_only_when_present() {
        let mut record = fixtures::installation(2);
        assert!(layout(&record, &options()).layout.images.is_empty());

        record.customer_signature = "data:image/png;base64,AAAA".into();
        let doc = layout(&record, &options()).layout;
        assert_eq!(doc.images.len(), 1);
        assert_eq!(doc.images[0].page, 1);
        let bounds = doc.images[0].bounds;
        assert_eq!((bounds.x, bounds.width, bounds.height), (25.0, 50.0, 30.0));
        assert!(bounds.y >= 87.0);
    }

    #[test]
    fn info_carries_company_and_installer() {
        let info = layout(&fixtures::installation(2), &options()).info;
        assert_eq!(info.title.as_deref(), Some("Annexure-I Commissioning Report"));
        assert_eq!(info.author.as_deref(), Some("Janhavi Enterprises"));
        assert_eq!(info.creator.as_deref(), Some("Ravi Kumar"));
    }
}
