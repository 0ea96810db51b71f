//! Model agreement between the applicant and the empanelled vendor.

use super::{image_box, record_info, Composition};
use crate::dates::ordinal;
use crate::output::GenerationOptions;
use crate::records::InstallationRecord;
use chrono::Datelike;
use solardocs_layout::flow::{
    bullet, centered_paragraph, clause, letter_label, numbered_section, paragraph, rich_paragraph,
    roman_numeral, space, title,
};
use solardocs_layout::{Block, FontSpec, LayoutContext, PageConfig};

/// The first page is stamp paper; the agreement starts below the stamp.
const FIRST_LINE_Y: f32 = 230.0;
const LEFT: f32 = 20.0;

struct Styles {
    body: Block,
    /// Paragraph inside a numbered section.
    section: Block,
    /// `(i)` and `(a)` clauses: label at 30mm, text at 40mm.
    clause: Block,
}

impl Styles {
    fn new(config: &PageConfig) -> Self {
        let body = Block::body(config);
        Self {
            body,
            section: body.indented(5.0),
            clause: body.indented(10.0).space_after(0.0),
        }
    }

    fn tight(&self) -> Block {
        self.section.space_after(0.0)
    }
}

pub fn layout(record: &InstallationRecord, options: &GenerationOptions) -> Composition {
    let mut ctx = LayoutContext::new(PageConfig::a4());
    let s = Styles::new(ctx.config());
    let r = record;

    ctx.set_cursor_y(FIRST_LINE_Y);
    title(&mut ctx, "Model Agreement", FontSpec::bold(12.0), 7.0);
    title(&mut ctx, "Between", FontSpec::bold(12.0), 7.0);
    centered_paragraph(
        &mut ctx,
        "Applicant and the registered/empanelled Vendor for installation of rooftop solar system in residential \
         house of the Applicant under simplified procedure of Rooftop Solar Programme Ph- II",
        &s.body.bold(),
    );

    let today = options.today;
    paragraph(
        &mut ctx,
        &format!(
            "This agreement is executed on {} (Day) {} (Month) {} (Year) for design, installation, commissioning \
             and five years comprehensive maintenance of rooftop solar system to be installed under simplified \
             procedure of Rooftop Solar Programme Ph-II.",
            ordinal(today.day()),
            today.format("%B"),
            today.year()
        ),
        &s.body,
    );
    title(&mut ctx, "Between", FontSpec::bold(12.0), 7.0);
    paragraph(
        &mut ctx,
        &format!(
            "{} (Name of Applicant) having residential electricity connection with consumer number {}  MSEDCL  {} \
             hereinafter referred as Applicant).",
            r.consumer_name, r.consumer_number, r.address
        ),
        &s.body,
    );

    ctx.start_page();
    paragraph(
        &mut ctx,
        &format!(
            "{} (Name of Vendor) is registered/ empanelled with the Maharashtra state Electricity Distribution \
             Company Limited (hereinafter referred as DISCOM) and is having registered/functional office at {}. \
             (hereinafter referred as Vendor). Both Applicant and the Vendor are jointly referred as Parties.",
            r.company_name, r.installer_designation
        ),
        &s.body,
    );

    paragraph(&mut ctx, "Whereas", &s.body.bold().space_after(0.0));
    let bullets = s.body.indented(5.0).space_after(0.0);
    for text in [
        "The Applicant intends to install rooftop solar system under simplified procedure of Rooftop Solar \
         Programme Ph-II of the MNRE.",
        "The Vendor is registered/empanelled vendor with DISCOM for installation of rooftop solar under MNRE \
         Schemes. The Vendor satisfies all the existing regulation pertaining to electrical safety and license in \
         the respective state and it is not debarred or blacklisted from undertaking any such installations by any \
         state/central Government agency.",
        "Both the parties are mutually agreed and understand their roles and responsibilities and have no \
         liability to any other agency/firm/stakeholder especially to DISCOM and MNRE.",
    ] {
        bullet(&mut ctx, text, &bullets);
    }

    general_terms(&mut ctx, &s);
    rts_system(&mut ctx, &s, r);
    price_and_payment(&mut ctx, &s, r);
    representations(&mut ctx, &s);
    maintenance_and_access(&mut ctx, &s);
    warranties(&mut ctx, &s);
    closing_sections(&mut ctx, &s);
    signatures(&mut ctx, r);

    Composition {
        layout: ctx.finish(),
        info: record_info("Model Agreement", "Rooftop Solar Programme Ph-II", record),
    }
}

fn roman_clauses(ctx: &mut LayoutContext, s: &Styles, items: &[&str]) {
    for (i, text) in items.iter().enumerate() {
        clause(ctx, &format!("({})", roman_numeral(i + 1)), text, &s.clause);
    }
}

fn lettered_clauses(ctx: &mut LayoutContext, s: &Styles, items: &[&str]) {
    for (i, text) in items.iter().enumerate() {
        clause(ctx, &format!("({})", letter_label(i + 1)), text, &s.clause);
    }
}

fn general_terms(ctx: &mut LayoutContext, s: &Styles) {
    numbered_section(ctx, 1, "GENERAL TERMS:", &s.body);
    for text in [
        "The Applicant hereby represents and warrants that the Applicant has the sole legal capacity to enter into \
         this Agreement and authorise the construction, installation and commissioning of the Rooftop Solar System \
         (\"RTS System\") which is inclusive of Balance of System (\"BoS\") on the Applicant's premises (\"Applicant \
         Site\"). The Vendor reserves its right to verify ownership of the Applicant Site and Applicant covenants to \
         co-operate and provide all information and documentation required by the Vendor for the same.",
        "Vendor may propose changes to the scope, nature and or schedule of the services being performed under this \
         Agreement. All proposed changes must be mutually agreed between the Parties. If Parties fail to agree on \
         the variation proposed, either Party may terminate this Agreement by serving notice as per Clause 13.",
        "The Applicant understands and agrees that future changes in load, electricity usage patterns and/or \
         electricity tariffs may affect the economics of the RTS System and these factors have not been and cannot \
         be considered in any analysis or quotation provided by Vendor or its Authorized Persons (defined below).",
    ] {
        paragraph(ctx, text, &s.section);
    }
}

fn rts_system(ctx: &mut LayoutContext, s: &Styles, r: &InstallationRecord) {
    numbered_section(ctx, 2, "RTS System", &s.body);
    rich_paragraph(
        ctx,
        &format!(
            "Total capacity of RTS System will be minimum **{} kWp**.",
            r.installed_capacity_rooftop
        ),
        &s.tight(),
    );
    paragraph(
        ctx,
        "The Solar modules, inverters and BoS will confirm to minimum specifications and DCR requirement of MNRE.",
        &s.tight(),
    );
    paragraph(
        ctx,
        &format!(
            "Solar modules of {} make, {} module, {} Wp capacity each and 17.28  % efficiency will be procured and \
             installed by the Vendor",
            r.module_manufacturer, r.number_of_modules, r.module_wattage
        ),
        &s.tight(),
    );
    paragraph(
        ctx,
        &format!(
            "Solar inverter of {} make, {} kW rated output capacity will be procured and installed by the Vendor",
            r.inverter_make, r.inverter_capacity
        ),
        &s.tight(),
    );
    paragraph(
        ctx,
        "Module mounting structure has to withstand minimum wind load pressure as specified by MNRE. Other BoS \
         installations shall be as per best industry practice with all safety and protection gears installed by the \
         vendor.",
        &s.section,
    );
}

fn price_and_payment(ctx: &mut LayoutContext, s: &Styles, r: &InstallationRecord) {
    numbered_section(ctx, 3, "PRICE AND PAYMENT TERMS", &s.body);
    rich_paragraph(
        ctx,
        &format!(
            "The cost of RTS System will be Rs **{} /-** (to be decided mutually). The Applicant shall pay the total \
             cost to the Vendor as under:",
            r.total_cost
        ),
        &s.section,
    );
    roman_clauses(
        ctx,
        s,
        &[
            "50% as an advance on confirmation of the order;",
            "25% against Proforma Invoice (PI) before dispatch of solar panels, inverters and other BoS items to be \
             delivered;",
            "25% after installation and commissioning of the RTS System.",
        ],
    );
    paragraph(
        ctx,
        "The order value and payment terms are fixed and will not be subject to any adjustment except as approved \
         in writing by Vendor. The payment shall be made only through bankers' cheque / NEFT / RTGS / online payment \
         portal as intimated by Vendor. No cash payments shall be accepted by Vendor or its Authorised Person.",
        &s.section,
    );
}

fn representations(ctx: &mut LayoutContext, s: &Styles) {
    numbered_section(ctx, 4, "REPRESENTATIONS MADE BY THE APPLICANT:", &s.body);
    for text in [
        "The Applicant acknowledges and agrees that:",
        "any timeline or schedule shared by Vendor for the provision of services and delivery of the RTS System is \
         only an estimate and Vendor will not be liable for any delay that is not attributable to Vendor;",
        "all information disclosed by the Applicant to Vendor in connection with the supply of the RTS System (or \
         any part thereof), services and generation estimation (including, without limitation, the load profile and \
         power bill) are true and accurate, and acknowledges that Vendor has relied on the information produced by \
         the Applicant to customise the RTS System layout and BoS design for the purposes of this Agreement;",
        "all descriptive specifications, illustrations, drawings, data, dimensions, quotation, fact sheets, price \
         lists and any advertising material circulated/published/provided by Vendor are approximate only;",
        "any drawings, pre-feasibility report, specifications and plans composed by Vendor shall require the \
         Applicant's approval within 5 (five) days of its receipt by electronic mail to Vendor and if the Applicant \
         does not respond within this period, the drawings, specifications or plans shall be final and deemed to \
         have been approved by the Applicant;",
        "the Applicant shall not use the RTS System or any part thereof, other than in accordance with the product \
         manufacturer's specifications, and covenants that any risk arising from misuse or/and misappropriate use \
         shall be to the account of the Applicant alone.",
        "The Applicant represents, warrants and covenants that:",
    ] {
        paragraph(ctx, text, &s.tight());
    }
    roman_clauses(
        ctx,
        s,
        &[
            "all electrical and plumbing infrastructure at the Applicant Site are in conformity with applicable laws;",
            "the Applicant has the legal capacity to permit unfettered access to Vendor and its Authorized Persons for \
             the purposes of execution and performance of this Agreement;",
            "the Applicant has and will provide requisite power, water and other requisite resources and storage \
             facilities for construction, installation, operation and maintenance of the RTS System;",
            "the Applicant will provide support for site fabrication of structure, assembly and fitting of module \
             mounting structure at Applicant Site;",
            "the Applicant will ensure that the Applicant Site is shadow free and free of all encumbrances during the \
             lifetime of the RTS System;",
            "Applicant should ensure that the Applicant regularly cleans and ensures accessibility and safety to the \
             RTS System, as required by Vendor and dusting frequency in the premises.",
            "Vendor is entitled to permit geo-tagging of the Applicant Site as a Vendor installation site;",
            "Unless otherwise intimated by the Applicant in writing, Vendor is entitled to take photographs, videos \
             and testimonials of the Applicant and the Applicant Site, and to create content which will become the \
             property of Vendor and the same can be freely used by Vendor as part of its promotional and marketing \
             activities across all platforms as it deems fit;",
            "the Applicant validates the stability of the Applicant Site for the installation of the RTS System.",
        ],
    );
}

fn maintenance_and_access(ctx: &mut LayoutContext, s: &Styles) {
    numbered_section(ctx, 5, "MAINTENANCE:", &s.body);
    for text in [
        "Vendor shall provide five-year free workmanship maintenance. Vendor shall visit the Applicant's premises at \
         least once every quarter after commissioning of the RTS System for maintenance purposes.",
        "During such maintenance visit, Vendor shall check all nuts and bolts, fuses, earth resistance and other \
         consumables in respect of the RTS System to ensure that it is in good working condition.",
    ] {
        paragraph(ctx, text, &s.tight());
    }
    paragraph(
        ctx,
        "Cleaning requirement/expectation from the Applicant side – Applicant responsibility, minimum expectation \
         from Applicant that it will be cleaned regularly as per the dusting frequency.",
        &s.section,
    );

    numbered_section(ctx, 6, "ACCESS AND RIGHT OF ENTRY:", &s.body);
    paragraph(
        ctx,
        "The Applicant hereby grants permission to Vendor and its authorized personnel, representatives, \
         associates, officers, employees, financing agents, subcontractors (\"Authorized Persons\") to enter the \
         Applicant Site for the purposes of:",
        &s.section,
    );
    lettered_clauses(
        ctx,
        s,
        &[
            "conducting feasibility study;",
            "storing the RTS System/any part thereof;",
            "installing the RTS System;",
            "inspecting the RTS System;",
            "conducting repairs and maintenance to the RTS System;",
            "removing the RTS System (or any part thereof), if necessary for any reason whatsoever;",
            "Such other matters as necessary to execute and perform its rights and obligations under this Agreement.",
        ],
    );
    paragraph(
        ctx,
        "The Applicant shall ensure that third-party consents necessary for the Authorized Persons to access the \
         Applicant Site are obtained prior to commencement of services under this Agreement.",
        &s.section,
    );
}

fn warranties(ctx: &mut LayoutContext, s: &Styles) {
    numbered_section(ctx, 7, "WARRANTIES:", &s.body);
    for text in [
        "Product Warranty: The Applicant shall be entitled to manufacturers' warranty. Any warranty in relation to \
         RTS System supplied to the Applicant by Vendor under this Agreement is limited to the warranty given by the \
         manufacturer of the RTS System (or any part thereof) to Vendor.",
        "Installation Warranty: Vendor warrants that all installations shall be free from workmanship defects or BOS \
         defects for a period of five years from the date of installation of the RTS System. The warranty is \
         limited to Vendor rectifying the workmanship or BOS defects at Vendor's expense in respect of those defects \
         reported by the Applicant, in writing. The Applicant is obliged and liable to report such defects within \
         15 (fifteen) days of occurrence of such defect.",
        "Subject to manufacturer warranty, Vendor warrants that the solar modules supplied herein shall have \
         tolerance within a five percentage range (+/-5%). The peak-power point voltage and the peak-power point \
         current of any supplied solar module and/or any module string (series connected modules) shall not vary by \
         more than 5% (five percent) from the respective arithmetic means for all modules and/or for all module \
         strings, as the case may be, provided the RTS System is properly maintained and the Applicant Site is free \
         from shadow at the time of operation of the RTS System.",
        "Exceptions for warranty:",
    ] {
        paragraph(ctx, text, &s.section);
    }
    lettered_clauses(
        ctx,
        s,
        &[
            "Any attempt by any person other than Vendor or its Authorised Persons to adjust, modify, repair or \
             provide maintenance to the RTS System, shall disentitle the Applicant of the warranty provided by Vendor \
             hereunder.",
            "Vendor shall not be liable for any degeneration or damage to the RTS System due to any action or \
             inaction on the part of the Applicant.",
            "Vendor shall not be bound or liable to remedy any damage, fault, failure or malfunction of the RTS \
             System owing to external causes, including but not limited to accidents, misuse, neglect, if usage \
             and/or storage and/or installation are non-confirming to product instructions, modifications by the \
             Applicant leading to shading or accessibility issues, failure to perform required maintenance, normal \
             wear and tear, Force Majeure Event, or negligence or default attributable to the Applicant.",
            "Vendor shall not be liable to repair or remedy any accessories or parts added to the RTS System that \
             were not originally sourced by Vendor to the Applicant.",
        ],
    );

    numbered_section(ctx, 8, "PERFORMANCE GUARANTEE", &s.body);
    paragraph(
        ctx,
        "Vendor guarantees minimum system performance ratio of 75% as per performance ratio test carried out in \
         adherence to IEC 61724 or equivalent BIS for a period of five years.",
        &s.section,
    );
}

fn closing_sections(ctx: &mut LayoutContext, s: &Styles) {
    numbered_section(ctx, 9, "INSURANCE:", &s.body);
    for text in [
        "Vendor may, at its sole discretion, obtain insurance covering risks of loss/damage to the RTS System (any \
         part thereof) during transit from Vendor's warehouse until delivery to the Applicant Site and until \
         installation and commissioning.",
        "Thereafter, all risk shall pass on to the Applicant and the Applicant may accordingly procure relevant \
         insurances.",
    ] {
        paragraph(ctx, text, &s.section);
    }

    numbered_section(ctx, 10, "CANCELLATION:", &s.body);
    for text in [
        "The Applicant may cancel the order placed on Vendor within 7 (seven) days from the date of remittance of \
         advance money or the date of order acceptance, whichever is earlier (\"Order Confirmation\") by serving \
         notice as per Clause 13.",
        "If the Applicant cancels the order after the expiry of 7 (seven) days from the date of Order Form, the \
         Applicant shall be liable to pay Vendor, a cancellation fee of XX% of the total order value plus costs and \
         expenses incurred by Vendor, including, costs for labour, design, return of products, administrative \
         costs, subvention costs.",
        "Notwithstanding the aforesaid, the Applicant shall not be entitled to cancel the Order Form after Vendor has \
         dispatched the RTS System (or any part thereof, including BOS) to the Applicant Site. If Applicant chooses \
         to terminate the Order Form after dispatch, the entire amount paid by the Applicant till date, shall be \
         forfeited by Vendor.",
    ] {
        paragraph(ctx, text, &s.section);
    }

    numbered_section(ctx, 11, "LIMITATION OF LIABILITY AND INDEMNITY:", &s.body);
    paragraph(
        ctx,
        "To the extent that terms implied by law apply to the RTS System and the services rendered under this \
         Agreement, Vendor's liability for any breach of those terms is limited to:",
        &s.section,
    );
    lettered_clauses(
        ctx,
        s,
        &[
            "repairing or replacing the RTS System/any part thereof, as applicable; or",
            "Refund of the moneys paid by the Applicant to Vendor, if Vendor cannot fulfil the order.",
        ],
    );

    numbered_section(ctx, 12, "SUSPENSION AND TERMINATION:", &s.body);
    paragraph(
        ctx,
        "If the Applicant fails to pay any sum due under this Agreement on the due date, Vendor may, in addition to \
         its other rights under this Agreement, suspend its obligations under this Agreement until all outstanding \
         amounts (including interest due) are paid.",
        &s.section,
    );

    numbered_section(ctx, 13, "NOTICES:", &s.body);
    paragraph(
        ctx,
        "Any notice or other communication under this Agreement to Vendor and or to the Applicant, shall be in \
         writing, in English language and shall be delivered or sent: (a) by electronic mail and/or (b) by hand \
         delivery or registered post/courier, at the registered address of Applicant/Vendor.",
        &s.body,
    );

    numbered_section(ctx, 14, "FORCE MAJEURE EVENT:", &s.body);
    paragraph(
        ctx,
        "Neither Party shall be in default due to any delay or failure to perform its/his/her/their obligations \
         under this Agreement which arises from or is a consequence of occurrence of an event which is beyond the \
         reasonable control of such Party, and which makes performance of its/his/her/their obligations under this \
         Agreement impossible or so impractical as reasonably to be considered impossible in the circumstances, and \
         includes, but is not limited to, war, riot, civil disorder, earthquake, fire, explosion, storm, flood or \
         other adverse weather conditions, pandemic, epidemic, embargo, strikes, lockouts, labour difficulties, other \
         industrial action, acts of government, unavailability of equipment from vendor, changes requested by the \
         Applicant (\"Force Majeure Event\").",
        &s.section,
    );

    numbered_section(ctx, 15, "GOVERNING LAW AND DISPUTE RESOLUTION:", &s.body);
    for text in [
        "The interpretation and enforcement of this Agreement shall be governed by the laws of India",
        "In the event of any dispute, controversy or difference between the Parties arising out of, or relating to \
         this Agreement (\"Dispute\"), both Parties shall make an effort to resolve the Dispute in good faith, \
         failing which, any Party to the Dispute shall be entitled to refer the Dispute to arbitration to resolve \
         the Dispute in the manner set out in this Clause. The rights and obligations of the Parties under this \
         Agreement shall remain in full force and effect pending the award in such arbitration proceeding.",
        "The arbitration proceeding shall be governed by the provisions of the Arbitration and Conciliation Act, \
         1996 and shall be settled by a sole arbitrator mutually appointed by the Parties.",
    ] {
        paragraph(ctx, text, &s.section);
    }
}

fn signatures(ctx: &mut LayoutContext, r: &InstallationRecord) {
    space(ctx, 10.0);
    ctx.page_break_if_needed();
    ctx.ensure_space(40.0);
    let y = ctx.cursor_y();
    let bold = FontSpec::bold(10.0);
    let normal = FontSpec::normal(10.0);

    let applicant = if r.consumer_name.trim().is_empty() { "Applicant Name" } else { r.consumer_name.as_str() };
    ctx.text_at(LEFT + 20.0, y, "(Applicant)", bold);
    ctx.text_at(LEFT + 20.0, y + 5.0, applicant, normal);
    ctx.text_at(LEFT + 100.0, y, "(Vendor)", bold);
    ctx.text_at(LEFT + 100.0, y + 5.0, &r.company_name, normal);

    image_box(ctx, &r.customer_signature, LEFT + 10.0, y + 15.0, 50.0, 25.0);
    image_box(ctx, &r.company_stamp, LEFT + 100.0, y + 15.0, 50.0, 25.0);
    ctx.set_cursor_y(y + 40.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;
    use solardocs_layout::{FontWeight, LayoutElement};

    fn options() -> GenerationOptions {
        GenerationOptions::new(Default::default(), fixtures::today())
    }

    #[test]
    fn starts_below_the_stamp_and_dates_the_execution() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        assert_eq!(doc.pages[0][0].y, FIRST_LINE_Y);
        let all: Vec<&str> = (0..doc.page_count()).flat_map(|p| doc.page_text(p)).collect();
        let all = all.join(" ");
        assert!(all.contains("executed on 5th (Day) March (Month) 2024 (Year)"), "{all}");
    }

    #[test]
    fn vendor_paragraph_starts_a_fresh_page() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        let vendor_page = doc.find_text("Janhavi Enterprises (Name of Vendor)").unwrap();
        assert!(vendor_page >= 1);
        let first = doc.pages[vendor_page]
            .iter()
            .find_map(|el| match &el.element {
                LayoutElement::Text(t) => Some((t.content.as_str(), el.y)),
                _ => None,
            })
            .unwrap();
        assert!(first.0.starts_with("Janhavi Enterprises (Name of Vendor)"));
        assert_eq!(first.1, 20.0);
    }

    #[test]
    fn all_fifteen_sections_in_order() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        let texts: Vec<&str> = (0..doc.page_count()).flat_map(|p| doc.page_text(p)).collect();
        let positions: Vec<usize> = (1..=15)
            .map(|n| {
                let label = format!("{n}.");
                texts.iter().position(|t| *t == label).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(doc.find_text("GOVERNING LAW AND DISPUTE RESOLUTION:").is_some());
    }

    #[test]
    fn capacity_and_cost_are_bold() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        let bold: Vec<&str> = doc
            .pages
            .iter()
            .flatten()
            .filter_map(|el| match &el.element {
                LayoutElement::Text(t) if t.font.weight == FontWeight::Bold => Some(t.content.as_str()),
                _ => None,
            })
            .collect();
        assert!(bold.iter().any(|t| t.contains("3.3")), "{bold:?}");
        assert!(bold.iter().any(|t| t.contains("185000")), "{bold:?}");
    }

    #[test]
    fn payment_terms_use_roman_numerals() {
        let doc = layout(&fixtures::installation(2), &options()).layout;
        for label in ["(i)", "(ii)", "(iii)", "(ix)"] {
            assert!(doc.find_text(label).is_some(), "missing {label}");
        }
    }

    #[test]
    fn signature_block_names_both_parties() {
        let mut record = fixtures::installation(2);
        record.consumer_name.clear();
        record.company_stamp = "data:image/png;base64,AAAA".into();
        let doc = layout(&record, &options()).layout;
        let last = doc.page_count() - 1;
        let text = doc.page_text(last);
        assert!(text.contains(&"(Applicant)"));
        assert!(text.contains(&"Applicant Name"));
        assert!(text.contains(&"(Vendor)"));
        assert_eq!(doc.images.len(), 1);
        assert_eq!(doc.images[0].page, last);
    }
}
