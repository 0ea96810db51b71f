//! Net metering connection agreement between the consumer and the utility.
//!
//! The first page is printed on stamp paper, so its text starts low.

use super::{image_box, record_info, Composition};
use crate::dates::agreement_date;
use crate::output::GenerationOptions;
use crate::records::InstallationRecord;
use solardocs_layout::flow::{clause, paragraph, section_title, space};
use solardocs_layout::{wrap_text, Block, FontSpec, LayoutContext, PageConfig};

const TITLE_Y: f32 = 240.0;
const LEFT: f32 = 20.0;
const RIGHT_COLUMN: f32 = 140.0;

pub fn layout(record: &InstallationRecord, options: &GenerationOptions) -> Composition {
    let mut ctx = LayoutContext::new(PageConfig::a4());
    let r = record;
    let body = Block::body(ctx.config())
        .at(LEFT, 170.0)
        .font(FontSpec::normal(11.0))
        .space_after(0.0);
    let heading = body.font(FontSpec::bold(12.0)).space_after(5.0);
    let numbered = body.indented(5.0);

    ctx.centered_text_at(TITLE_Y, "Net Metering Connection Agreement", FontSpec::bold(16.0));
    let intro = format!(
        "This Agreement is made and entered into on the {} at Dhule, between the Eligible Consumer, {}, residing {} \
         and holding Consumer No: {} (hereinafter referred to as the \"First Party\").",
        agreement_date(&r.agreement_date, options.today),
        r.consumer_name,
        r.consumer_address,
        r.consumer_number
    );
    let y = stamp_lines(&mut ctx, &intro, TITLE_Y + 10.0);
    ctx.centered_text_at(y + 3.0, "AND", FontSpec::bold(11.0));
    stamp_lines(
        &mut ctx,
        "The Distribution Licensee- Maharashtra State Electricity Distribution Co. Ltd;and having its Registered \
         Office at USD_II S/DN as second Party of this Agreement;",
        y + 10.0,
    );

    ctx.start_page();
    paragraph(
        &mut ctx,
        "Whereas, the Eligible Consumer has applied to the Licensee for approval of a Net Metering Arrangement \
         under the provisions of the Maharashtra Electricity Regulatory Commission (Grid Interactive Renewable \
         Energy Systems) Regulations, 2019 (Grid Interactive Renewable Energy Systems') and sought its \
         connectivity to the Licensee's Distribution Network;",
        &body,
    );
    paragraph(
        &mut ctx,
        &format!(
            "And whereas, the Licensee has agreed to provide Network connectivity to the Eligible Consumer for \
             injection of electricity generated from its Roof-top Solar PV System of {} kilowatt;",
            r.system_capacity
        ),
        &body.space_after(5.0),
    );
    paragraph(&mut ctx, "Both Parties hereby agree as follows:-", &body.bold().space_after(5.0));

    section_title(&mut ctx, "1. Eligibility", &body);
    paragraph(
        &mut ctx,
        "The Roof-top Solar PV System meets the applicable norms for being integrated into the Distribution \
         Network, and that the Eligible Consumer shall maintain the System accordingly for the duration of this \
         Agreement.",
        &body.space_after(5.0),
    );

    section_title(&mut ctx, "2. Technical and Inter-connection Requirements:", &heading);
    let technical = [
        "The metering arrangement and the inter-connection of the Roof-top Solar PV System with the Network of \
         the Licensee shall be as per the provisions of the Grid Interactive Renewable Energy Systems Regulations \
         and the technical standards and norms specified by the Central Electricity Authority for connectivity of \
         distributed generation resources and for the installation and operation of meters.",
        "The Eligible Consumer agrees, that he shall install, prior to connection of the Roof-top Solar PV System \
         to the Network of the Licensee, an isolation device (both automatic and in built within inverter and \
         external manual relays); and the",
        "The Licensee shall specify the interface/inter-connection point and metering point.",
        "The Eligible Consumer shall furnish all relevant data, such as voltage, frequency, circuit breaker, \
         isolator position in his System, as and when required by the Licensee.",
    ];
    for (i, text) in technical.iter().enumerate() {
        clause(&mut ctx, &format!("{}.", i + 1), text, &numbered.space_after(3.0));
        if i == 1 {
            clause(
                &mut ctx,
                "a.",
                "Licensee shall have access to it if required for the repair and maintenance of the Distribution \
                 Network.",
                &numbered.indented(10.0).space_after(3.0),
            );
        }
    }
    space(&mut ctx, 2.0);

    section_title(&mut ctx, "3. Safety:", &heading);
    for text in [
        "The equipment connected to the Licensee's Distribution System shall be compliant with relevant \
         International (IEEE/IEC) or Indian Standards (BIS), as the case may be, and the installation of \
         electrical equipment shall comply with the requirements specified by the Central Electricity Authority \
         regarding safety and electricity supply.",
        "The design, installation, maintenance and operation of the Roof-top Solar PV System shall be undertaken \
         in a manner conducive to the safety of the Roof-top Solar PV System as well as the Licensee's Network.",
        "If, at any time, the Licensee determines that the Eligible Consumer's Roof-top Solar PV System is causing \
         or may cause damage to and/or results in the Licensee's other consumers or its assets, the Eligible \
         Consumer shall disconnect the Roof-top Solar PV System from the distribution Network upon direction from \
         the Licensee, and Shall undertake corrective measures at his own expense prior to re-connection.",
    ] {
        paragraph(&mut ctx, text, &body.space_after(2.0));
    }
    space(&mut ctx, 3.0);

    section_title(&mut ctx, "4. Other Clearances and Approvals:", &heading);
    paragraph(
        &mut ctx,
        "The Eligible Consumer shall obtain any statutory approvals and clearances that maybe required, such as \
         from the Electrical Inspector or the municipal or other authorities, before connecting the Roof-top Solar \
         PV System to the distribution Network.",
        &body.space_after(5.0),
    );

    ctx.start_page();
    section_title(&mut ctx, "5. Period of Agreement, and Termination:", &heading.space_after(0.0));
    paragraph(
        &mut ctx,
        "This Agreement shall be for a period for 20 years, but may be terminated prematurely",
        &body.space_after(2.0),
    );
    for (label, text) in [
        ("(a)", "By mutual consent; or"),
        ("(b)", "By the Eligible Consumer, by giving 30 days' notice to the Licensee;"),
        (
            "(c)",
            "By the Licensee, by giving 30 days' notice, if the Eligible Consumer breaches any terms of this \
             Agreement or the provisions of the Grid Interactive Renewable Energy Systems Regulations and does not \
             remedy such breach within 30 days, or such other reasonable period as may be provided, of receiving \
             notice of such breach, or for any other valid reason communicated by the Licensee in writing.",
        ),
    ] {
        clause(&mut ctx, label, text, &body);
    }
    space(&mut ctx, 5.0);

    section_title(&mut ctx, "6. Access and Disconnection:", &heading.space_after(0.0));
    clause(
        &mut ctx,
        "6.1",
        "The Eligible Consumer shall provide access to the Licensee to the metering equipment and disconnecting \
         devices of Roof-top Solar PV System, both automatic and manual, by the Eligible Consumer.",
        &body,
    );
    clause(
        &mut ctx,
        "6.2",
        "If, in an emergent or outage situation, the Licensee cannot access the disconnecting devices of the \
         Roof-top Solar PV System, both automatic and manual, it may disconnect power supply to the premises.",
        &body,
    );

    ctx.start_page();
    section_title(&mut ctx, "7. Liabilities:", &heading.space_after(0.0));
    paragraph(
        &mut ctx,
        "The Parties shall indemnify each other for damages or adverse effects of either Party's negligence or \
         misconduct during the installation of the Roof-top Solar PV System, connectivity with the distribution \
         Network and operation of the System.",
        &body,
    );
    paragraph(
        &mut ctx,
        "The Parties shall not be liable to each other for any loss of profits or revenues, business interruption \
         losses, loss of contract or goodwill, or for indirect, consequential, incidental or special damages \
         including, but not limited to, punitive or exemplary damages, whether any of these liabilities, losses or \
         damages arise in contract, or otherwise.",
        &body.space_after(5.0),
    );

    section_title(&mut ctx, "8. Commercial Settlement:", &heading.space_after(0.0));
    for (label, text) in [
        (
            "8.1",
            "The commercial settlements under this Agreement shall be in accordance with the Grid Interactive \
             Renewable Energy Systems Regulations.",
        ),
        (
            "8.2",
            "The Licensee shall not be liable to compensate the Eligible Consumer if his Rooftop Solar PV System is \
             unable to inject surplus power generated into the Licensee's Network on account of failure of power \
             supply in the grid/Network.",
        ),
        (
            "8.3",
            "The existing metering System, if not in accordance with the Grid Interactive Renewable Energy Systems \
             Regulations, shall be replaced by a bi-directional meter (whole current/CT operated) or a pair of \
             meters (as per the definition of 'Net Meter' in the Regulations), and a separate generation meter may \
             be provided to measure Solar power generation. The bi-directional meter (whole current/CT operated) or \
             pair of meters shall be installed at the inter-connection point to the Licensee's Network for \
             recording export and import of energy.",
        ),
        (
            "8.4",
            "The uni-directional and bi-directional or pair of meters shall be fixed in separate meter boxes in the \
             same proximity.",
        ),
        (
            "8.5",
            "The Licensee shall issue monthly electricity bill for the net metered energy on the scheduled date of \
             meter reading. If the exported energy exceeds the imported energy, the Licensee shall show the net \
             energy exported as credited Units of electricity as specified in the Grid Interactive Renewable \
             Energy Systems Regulations, 2019. If the exported energy is less than the imported energy, the \
             Eligible Consumer shall pay the Distribution Licensee for the net energy imported at the prevailing \
             tariff approved by the Commission for the consumer category to which he belongs.",
        ),
    ] {
        clause(&mut ctx, label, text, &body.space_after(2.0));
    }
    space(&mut ctx, 3.0);

    section_title(&mut ctx, "9. Connection Costs:", &heading.space_after(0.0));
    clause(
        &mut ctx,
        "9.1",
        "The Eligible Consumer shall bear all costs related to the setting up of the Roof-top Solar PV System, \
         excluding the Net Metering Arrangement costs.",
        &body.space_after(2.0),
    );

    section_title(&mut ctx, "10. Dispute Resolution:", &heading.space_after(0.0));
    clause(
        &mut ctx,
        "10.1",
        "Any dispute arising under this Agreement shall be resolved promptly, in good faith and in an equitable \
         manner by both the Parties.",
        &body.space_after(2.0),
    );
    clause(
        &mut ctx,
        "10.2",
        "The Eligible Consumer shall have recourse to the concerned Consumer Grievance Redressal Forum constituted \
         under the relevant Regulations in respect of any grievance regarding billing which has not been redressed \
         by the Licensee.",
        &body.space_after(2.0),
    );

    paragraph(
        &mut ctx,
        &format!(
            "In witness whereof {} - (S) (VENDOR NAME) for and on behalf of Eligible Consumer and {} for and on \
             behalf of MSEDCL agree to this agreement.",
            r.vendor_name, r.consumer_name
        ),
        &body.space_after(5.0),
    );

    signatures(&mut ctx, r);

    Composition {
        layout: ctx.finish(),
        info: record_info("Net Metering Connection Agreement", "Net Metering Arrangement", record),
    }
}

/// Stamp-paper text runs into the bottom margin, so it is placed line by
/// line without page breaks. Returns the baseline after the last line.
fn stamp_lines(ctx: &mut LayoutContext, text: &str, mut y: f32) -> f32 {
    let font = FontSpec::normal(11.0);
    for line in wrap_text(text, 170.0, font) {
        ctx.text_at(LEFT, y, &line, font);
        y += ctx.config().line_height;
    }
    y
}

/// Party labels, witness labels and the two images, kept on one page.
fn signatures(ctx: &mut LayoutContext, r: &InstallationRecord) {
    ctx.ensure_space(60.0);
    let y = ctx.cursor_y() + 5.0;
    let bold = FontSpec::bold(11.0);
    let normal = FontSpec::normal(11.0);

    image_box(ctx, &r.customer_signature, LEFT, y - 5.0, 50.0, 25.0);
    ctx.text_at(LEFT, y + 20.0, "For Eligible Consumer", bold);
    ctx.text_at(RIGHT_COLUMN, y + 20.0, "for and on behalf of MSEDCL", bold);
    ctx.text_at(LEFT, y + 25.0, "Witness 1(VENDOR):", normal);
    ctx.text_at(RIGHT_COLUMN, y + 25.0, "Witness 1:", normal);
    image_box(ctx, &r.company_stamp, LEFT, y + 30.0, 50.0, 25.0);
    ctx.set_cursor_y(y + 55.0);
}
