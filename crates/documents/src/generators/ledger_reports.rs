//! PDF exports of the shared-expense ledger.
//!
//! Both reports take their figures from the ledger aggregation functions;
//! nothing is summed here.

use super::{Composition, FORM_LEFT};
use crate::dates::short_date;
use crate::error::DocumentError;
use crate::output::GenerationOptions;
use solardocs_layout::{Color, Column, FontSpec, LayoutContext, PageConfig, Table, TableStyle, TableTheme};
use solardocs_ledger::{
    compute_totals, format_amount, party_transactions, signed_amount, Decimal, LedgerSummary, Transaction,
};
use solardocs_render_lopdf::DocumentInfo;

const HEAD_FILL: Color = Color::rgb(99, 102, 241);
const STRIPE: Color = Color::gray(245);
pub const POSITIVE: Color = Color::rgb(0, 128, 0);
pub const NEGATIVE: Color = Color::rgb(180, 0, 0);

fn report_table(columns: &[f32]) -> Table {
    let style = TableStyle {
        theme: TableTheme::Plain,
        padding: 2.5,
        head_fill: Some(HEAD_FILL),
        head_text: Color::WHITE,
        stripe_fill: Some(STRIPE),
        ..TableStyle::default()
    };
    Table::new(FORM_LEFT, columns.iter().copied().map(Column::new).collect()).style(style)
}

fn net_color(net: Decimal) -> Color {
    if net.is_sign_negative() && !net.is_zero() { NEGATIVE } else { POSITIVE }
}

fn report_info(title: String) -> DocumentInfo {
    DocumentInfo {
        title: Some(title),
        subject: Some("Shared expense ledger".to_string()),
        author: None,
        creator: None,
    }
}

/// One party's transactions followed by a summary page.
///
/// `party` is matched exactly; a name with no transactions is an error so
/// that a typo does not produce an empty report.
pub fn party_report(
    transactions: &[Transaction],
    party: &str,
    options: &GenerationOptions,
) -> Result<Composition, DocumentError> {
    let own = party_transactions(transactions, party);
    if own.is_empty() {
        return Err(DocumentError::UnknownParty(party.to_string()));
    }
    let totals = compute_totals(own.iter().copied());

    let mut ctx = LayoutContext::new(PageConfig::a4());
    ctx.text_at(FORM_LEFT, 20.0, "Party Expense Report", FontSpec::normal(18.0));
    ctx.text_at(FORM_LEFT, 30.0, &format!("Party Name: {party}"), FontSpec::normal(12.0));
    ctx.text_at(
        FORM_LEFT,
        38.0,
        &format!("Generated on: {}", short_date(options.today)),
        FontSpec::normal(12.0),
    );

    ctx.set_cursor_y(45.0);
    report_table(&[30.0, 82.0, 30.0, 40.0])
        .head(["Date", "Purpose", "Type", "Amount"])
        .rows(own.iter().map(|tx| {
            [
                short_date(tx.timestamp.date_naive()),
                tx.purpose.clone(),
                tx.kind.as_str().to_uppercase(),
                signed_amount(tx.kind, tx.amount),
            ]
        }))
        .draw(&mut ctx);

    ctx.new_page();
    ctx.text_at(FORM_LEFT, 20.0, "Final Summary", FontSpec::normal(18.0));
    ctx.text_at(
        FORM_LEFT,
        45.0,
        &format!("Total Credits : Rs. {}", format_amount(totals.total_credits)),
        FontSpec::normal(13.0),
    );
    ctx.text_at(
        FORM_LEFT,
        60.0,
        &format!("Total Debits  : Rs. {}", format_amount(totals.total_debits)),
        FontSpec::normal(13.0),
    );
    let net = totals.net();
    ctx.colored_text_at(
        FORM_LEFT,
        80.0,
        &format!("Net Contribution : Rs. {}", format_amount(net)),
        FontSpec::normal(15.0),
        net_color(net),
    );
    ctx.set_cursor_y(90.0);

    Ok(Composition {
        layout: ctx.finish(),
        info: report_info(format!("{party} Expense Report")),
    })
}

/// Balance, totals, the party ranking and every transaction.
pub fn ledger_report(transactions: &[Transaction], options: &GenerationOptions) -> Composition {
    let summary = LedgerSummary::from_transactions(transactions);
    let mut ctx = LayoutContext::new(PageConfig::a4());

    ctx.text_at(FORM_LEFT, 20.0, "Expense Ledger Report", FontSpec::normal(18.0));
    ctx.text_at(
        FORM_LEFT,
        30.0,
        &format!("Generated on: {}", short_date(options.today)),
        FontSpec::normal(12.0),
    );
    ctx.colored_text_at(
        FORM_LEFT,
        42.0,
        &format!("Balance : Rs. {}", format_amount(summary.balance)),
        FontSpec::bold(13.0),
        net_color(summary.balance),
    );
    ctx.text_at(
        FORM_LEFT,
        50.0,
        &format!("Total Credits : Rs. {}", format_amount(summary.totals.total_credits)),
        FontSpec::normal(12.0),
    );
    ctx.text_at(
        FORM_LEFT,
        57.0,
        &format!("Total Debits  : Rs. {}", format_amount(summary.totals.total_debits)),
        FontSpec::normal(12.0),
    );

    ctx.text_at(FORM_LEFT, 70.0, "Parties", FontSpec::bold(14.0));
    ctx.set_cursor_y(74.0);
    let parties_end = report_table(&[62.0, 35.0, 35.0, 35.0, 15.0])
        .head(["Party", "Credits", "Debits", "Net", "Entries"])
        .rows(summary.parties.iter().map(|p| {
            [
                p.name.clone(),
                format_amount(p.total_credits),
                format_amount(p.total_debits),
                format_amount(p.net_contribution),
                p.transaction_count.to_string(),
            ]
        }))
        .draw(&mut ctx);

    ctx.set_cursor_y(parties_end + 12.0);
    ctx.ensure_space(20.0);
    let heading_y = ctx.cursor_y();
    ctx.text_at(FORM_LEFT, heading_y, "Transactions", FontSpec::bold(14.0));
    ctx.set_cursor_y(heading_y + 4.0);
    report_table(&[28.0, 40.0, 56.0, 22.0, 36.0])
        .head(["Date", "Party", "Purpose", "Type", "Amount"])
        .rows(transactions.iter().map(|tx| {
            [
                short_date(tx.timestamp.date_naive()),
                tx.person.clone(),
                tx.purpose.clone(),
                tx.kind.as_str().to_uppercase(),
                signed_amount(tx.kind, tx.amount),
            ]
        }))
        .draw(&mut ctx);

    log::debug!(
        "ledger report: {} transactions across {} parties",
        transactions.len(),
        summary.parties.len()
    );
    Composition {
        layout: ctx.finish(),
        info: report_info("Expense Ledger Report".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;
    use chrono::{TimeZone, Utc};
    use solardocs_layout::LayoutElement;
    use solardocs_ledger::{NewTransaction, TransactionKind};

    fn options() -> GenerationOptions {
        GenerationOptions::new(Default::default(), fixtures::today())
    }

    fn ledger() -> Vec<Transaction> {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        [
            (TransactionKind::Credit, 100, "Harshal", "Panels"),
            (TransactionKind::Debit, 40, "Harshal", "Cables"),
            (TransactionKind::Debit, 70, "Meera", "Transport"),
        ]
        .into_iter()
        .map(|(kind, amount, person, purpose)| {
            NewTransaction::new(kind, amount, person).purpose(purpose).validate(at).unwrap()
        })
        .collect()
    }

    fn colour_of(doc: &solardocs_layout::LaidOutDocument, page: usize, prefix: &str) -> Color {
        doc.pages[page]
            .iter()
            .find_map(|el| match &el.element {
                LayoutElement::Text(t) if t.content.starts_with(prefix) => Some(t.color),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn party_report_lists_rows_then_summary_page() {
        let doc = party_report(&ledger(), "Harshal", &options()).unwrap().layout;
        assert_eq!(doc.page_count(), 2);
        let first = doc.page_text(0);
        assert!(first.contains(&"Party Name: Harshal"));
        assert!(first.contains(&"Generated on: 5/3/2024"));
        assert!(first.contains(&"+Rs. 100.00"));
        assert!(first.contains(&"-Rs. 40.00"));
        assert!(first.contains(&"DEBIT"));
        assert!(!first.contains(&"Transport"));

        let summary = doc.page_text(1);
        assert_eq!(summary[0], "Final Summary");
        assert!(summary.contains(&"Total Credits : Rs. 100.00"));
        assert!(summary.contains(&"Total Debits  : Rs. 40.00"));
        assert!(summary.contains(&"Net Contribution : Rs. 60.00"));
        assert_eq!(colour_of(&doc, 1, "Net Contribution"), POSITIVE);
    }

    #[test]
    fn negative_contribution_is_red() {
        let doc = party_report(&ledger(), "Meera", &options()).unwrap().layout;
        assert!(doc.page_text(1).contains(&"Net Contribution : Rs. -70.00"));
        assert_eq!(colour_of(&doc, 1, "Net Contribution"), NEGATIVE);
    }

    #[test]
    fn unknown_party_is_an_error() {
        let err = party_report(&ledger(), "harshal", &options()).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownParty(name) if name == "harshal"));
    }

    #[test]
    fn ledger_report_ranks_parties_and_lists_everything() {
        let doc = ledger_report(&ledger(), &options()).layout;
        let text: Vec<&str> = (0..doc.page_count()).flat_map(|p| doc.page_text(p)).collect();
        assert!(text.contains(&"Balance : Rs. -10.00"));
        assert_eq!(colour_of(&doc, 0, "Balance"), NEGATIVE);
        let harshal = text.iter().position(|t| *t == "Harshal").unwrap();
        let meera = text.iter().position(|t| *t == "Meera").unwrap();
        assert!(harshal < meera);
        assert!(text.contains(&"Transport"));
        assert!(text.contains(&"-Rs. 70.00"));
    }

    #[test]
    fn empty_ledger_still_renders_headings() {
        let doc = ledger_report(&[], &options()).layout;
        assert_eq!(doc.page_count(), 1);
        assert!(doc.page_text(0).contains(&"Balance : Rs. 0.00"));
        assert_eq!(colour_of(&doc, 0, "Balance"), POSITIVE);
    }
}
