//! Flowing text primitives.
//!
//! Every primitive checks for a page break before it starts and again before
//! each wrapped line, so callers never have to manage the cursor for text.

use crate::config::PageConfig;
use crate::context::LayoutContext;
use crate::fonts::{FontSpec, FontWeight};
use crate::text::{parse_spans, wrap_spans, wrap_text, Span, WrappedLine, WrappedRun};
use solardocs_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Where and how a block of text flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub width: f32,
    pub font: FontSpec,
    pub color: Color,
    pub line_height: f32,
    pub space_after: f32,
    pub align: Align,
}

impl Block {
    /// 10pt body text across the content width, 2mm after the block.
    pub fn body(config: &PageConfig) -> Self {
        Self {
            x: config.margin_left,
            width: config.content_width(),
            font: FontSpec::normal(10.0),
            color: Color::BLACK,
            line_height: config.line_height,
            space_after: 2.0,
            align: Align::Left,
        }
    }

    pub fn at(self, x: f32, width: f32) -> Self {
        Self { x, width, ..self }
    }

    pub fn indented(self, by: f32) -> Self {
        Self { x: self.x + by, width: self.width - by, ..self }
    }

    pub fn font(self, font: FontSpec) -> Self {
        Self { font, ..self }
    }

    pub fn bold(self) -> Self {
        Self { font: self.font.with_weight(FontWeight::Bold), ..self }
    }

    pub fn color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn line_height(self, line_height: f32) -> Self {
        Self { line_height, ..self }
    }

    pub fn space_after(self, space_after: f32) -> Self {
        Self { space_after, ..self }
    }

    pub fn centered(self) -> Self {
        Self { align: Align::Center, ..self }
    }
}

/// Wrapped body text. Returns the number of lines emitted.
pub fn paragraph(ctx: &mut LayoutContext, text: &str, block: &Block) -> usize {
    ctx.page_break_if_needed();
    let lines: Vec<WrappedLine> = wrap_text(text, block.width, block.font)
        .into_iter()
        .map(|line| single_run(line, block))
        .collect();
    emit(ctx, &lines, block)
}

/// Body text with `**bold**` emphasis.
pub fn rich_paragraph(ctx: &mut LayoutContext, text: &str, block: &Block) -> usize {
    ctx.page_break_if_needed();
    let spans = parse_spans(text);
    emit(ctx, &wrap_rich(&spans, block), block)
}

/// A centred heading, wrapped if it does not fit on one line.
pub fn title(ctx: &mut LayoutContext, text: &str, font: FontSpec, line_height: f32) -> usize {
    let block = Block::body(ctx.config())
        .font(font)
        .line_height(line_height)
        .space_after(0.0)
        .centered();
    paragraph(ctx, text, &block)
}

/// Wrapped text centred within the block.
pub fn centered_paragraph(ctx: &mut LayoutContext, text: &str, block: &Block) -> usize {
    paragraph(ctx, text, &block.centered())
}

/// A bold heading on its own line.
pub fn section_title(ctx: &mut LayoutContext, text: &str, block: &Block) -> usize {
    paragraph(ctx, text, &block.bold())
}

/// A hanging clause such as `(a)`, `(iv)` or `6.1`, text 10mm right of the label.
pub fn clause(ctx: &mut LayoutContext, label: &str, text: &str, block: &Block) -> usize {
    labelled(ctx, label, text, block, 10.0)
}

/// A label hanging in front of wrapped text, e.g. `(a)`, `6.1` or `-`.
///
/// The label sits on the first line; the text flows at `block.x + indent`.
/// Blank text emits nothing, not even the label.
pub fn labelled(ctx: &mut LayoutContext, label: &str, text: &str, block: &Block, indent: f32) -> usize {
    let body = block.indented(indent);
    let lines = wrap_rich(&parse_spans(text), &body);
    if lines.is_empty() {
        return 0;
    }
    ctx.page_break_if_needed();
    ctx.colored_text_at(block.x, ctx.cursor_y(), label, block.font, block.color);
    emit(ctx, &lines, &body)
}

/// A bullet item: a dash at `block.x`, text indented by 5mm.
pub fn bullet(ctx: &mut LayoutContext, text: &str, block: &Block) -> usize {
    labelled(ctx, "-", text, block, 5.0)
}

/// A bold numbered heading (`3.` followed by the title 10mm further right).
pub fn numbered_section(ctx: &mut LayoutContext, number: usize, heading: &str, block: &Block) -> usize {
    let heading_block = block.bold().line_height(7.0).space_after(0.0);
    labelled(ctx, &format!("{number}."), heading, &heading_block, 10.0)
}

/// Vertical gap.
pub fn space(ctx: &mut LayoutContext, dy: f32) {
    ctx.advance(dy);
}

/// Lower-case roman numeral for clause labels.
pub fn roman_numeral(mut n: usize) -> String {
    const TABLE: [(usize, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// `1 -> a`, `2 -> b`, ..., wrapping past `z` to `aa`.
pub fn letter_label(n: usize) -> String {
    let mut n = n.max(1);
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    out.iter().rev().collect()
}

fn single_run(text: String, block: &Block) -> WrappedLine {
    let width = block.font.text_width(&text);
    WrappedLine {
        runs: vec![WrappedRun { text, weight: block.font.weight, offset: 0.0 }],
        width,
    }
}

fn wrap_rich(spans: &[Span], block: &Block) -> Vec<WrappedLine> {
    // A bold base font turns every span bold.
    if block.font.weight == FontWeight::Bold {
        let bold: Vec<Span> = spans
            .iter()
            .map(|s| Span::new(s.text.clone(), FontWeight::Bold))
            .collect();
        return wrap_spans(&bold, block.width, block.font);
    }
    wrap_spans(spans, block.width, block.font)
}

fn emit(ctx: &mut LayoutContext, lines: &[WrappedLine], block: &Block) -> usize {
    if lines.is_empty() {
        return 0;
    }
    for line in lines {
        ctx.page_break_if_needed();
        let start = match block.align {
            Align::Left => block.x,
            Align::Center => block.x + (block.width - line.width) / 2.0,
        };
        let y = ctx.cursor_y();
        for run in &line.runs {
            ctx.colored_text_at(start + run.offset, y, &run.text, block.font.with_weight(run.weight), block.color);
        }
        ctx.advance(block.line_height);
    }
    ctx.advance(block.space_after);
    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutElement;

    fn ctx() -> LayoutContext {
        LayoutContext::new(PageConfig::a4())
    }

    #[test]
    fn empty_paragraph_emits_nothing_and_keeps_the_cursor() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        assert_eq!(paragraph(&mut ctx, "", &block), 0);
        assert_eq!(ctx.cursor_y(), 20.0);
        assert!(ctx.finish().pages[0].is_empty());
    }

    #[test]
    fn paragraph_advances_per_line_plus_spacing() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        let lines = paragraph(&mut ctx, &"solar rooftop ".repeat(40), &block);
        assert!(lines > 1);
        assert!((ctx.cursor_y() - (20.0 + lines as f32 * 5.0 + 2.0)).abs() < 1e-3);
    }

    #[test]
    fn long_paragraph_continues_on_the_next_page() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        ctx.set_cursor_y(262.0);
        paragraph(&mut ctx, &"net metering agreement ".repeat(60), &block);
        let doc = ctx.finish();
        assert_eq!(doc.page_count(), 2);
        for el in &doc.pages[0] {
            assert!(el.y <= 270.0 + 1e-3, "line below threshold at {}", el.y);
        }
        assert_eq!(doc.pages[1][0].y, 20.0);
    }

    #[test]
    fn labelled_clause_hangs_the_text() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        labelled(&mut ctx, "(a)", "the system shall be maintained", &block, 10.0);
        let doc = ctx.finish();
        let page = &doc.pages[0];
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].x, 20.0);
        assert_eq!(page[1].x, 30.0);
        assert_eq!(page[0].y, page[1].y);
    }

    #[test]
    fn blank_clause_draws_no_label() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        assert_eq!(clause(&mut ctx, "(b)", "   ", &block), 0);
        assert_eq!(bullet(&mut ctx, "", &block), 0);
        assert_eq!(ctx.cursor_y(), 20.0);
        assert!(ctx.finish().pages[0].is_empty());
    }

    #[test]
    fn numbered_section_is_bold_and_seven_millimetres_tall() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        numbered_section(&mut ctx, 3, "PRICE AND PAYMENT TERMS", &block);
        assert_eq!(ctx.cursor_y(), 27.0);
        let doc = ctx.finish();
        assert_eq!(doc.page_text(0), vec!["3.", "PRICE AND PAYMENT TERMS"]);
        assert!(doc.pages[0].iter().all(|el| matches!(
            &el.element,
            LayoutElement::Text(t) if t.font.weight == FontWeight::Bold
        )));
    }

    #[test]
    fn rich_paragraph_mixes_weights() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config());
        rich_paragraph(&mut ctx, "Total cost **Rs. 2,50,000** inclusive", &block);
        let doc = ctx.finish();
        let weights: Vec<_> = doc.pages[0]
            .iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Text(t) => Some(t.font.weight),
                _ => None,
            })
            .collect();
        assert_eq!(weights, vec![FontWeight::Normal, FontWeight::Bold, FontWeight::Normal]);
    }

    #[test]
    fn centred_title_is_centred() {
        let mut ctx = ctx();
        title(&mut ctx, "COMMISSIONING REPORT", FontSpec::bold(14.0), 7.0);
        let doc = ctx.finish();
        let el = &doc.pages[0][0];
        assert!((el.x + el.width / 2.0 - 105.0).abs() < 1e-3);
    }

    #[test]
    fn clause_and_section_title() {
        let mut ctx = ctx();
        let block = Block::body(ctx.config()).font(FontSpec::normal(11.0));
        section_title(&mut ctx, "5. Period of Agreement, and Termination:", &block);
        clause(&mut ctx, "(a)", "By mutual consent; or", &block);
        let doc = ctx.finish();
        assert_eq!(
            doc.page_text(0),
            vec!["5. Period of Agreement, and Termination:", "(a)", "By mutual consent; or"]
        );
        assert_eq!(doc.pages[0][2].x, 30.0);
    }

    #[test]
    fn labels() {
        assert_eq!(roman_numeral(1), "i");
        assert_eq!(roman_numeral(4), "iv");
        assert_eq!(roman_numeral(9), "ix");
        assert_eq!(roman_numeral(14), "xiv");
        assert_eq!(letter_label(1), "a");
        assert_eq!(letter_label(7), "g");
        assert_eq!(letter_label(27), "aa");
    }
}
