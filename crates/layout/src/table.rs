//! Grid and plain tables with wrapped cells.
//!
//! Rows are atomic: a row that would cross the break threshold moves to a
//! new page, and the header row is repeated there.

use crate::context::LayoutContext;
use crate::fonts::{FontSpec, FontWeight};
use crate::text::wrap_text;
use solardocs_types::{Color, Rect};

/// Line height factor applied to the cell font size.
const LINE_FACTOR: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableTheme {
    /// Every cell outlined.
    #[default]
    Grid,
    /// No outlines; fills only.
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub theme: TableTheme,
    /// Cell font size in points.
    pub font_size: f32,
    /// Inner cell padding in millimetres.
    pub padding: f32,
    pub line_color: Color,
    pub line_width: f32,
    pub head_fill: Option<Color>,
    pub head_text: Color,
    /// Fill for every other body row, starting with the first.
    pub stripe_fill: Option<Color>,
    pub min_row_height: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            theme: TableTheme::Grid,
            font_size: 10.0,
            padding: 3.0,
            line_color: Color::BLACK,
            line_width: 0.1,
            head_fill: Some(Color::gray(220)),
            head_text: Color::BLACK,
            stripe_fill: None,
            min_row_height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub width: f32,
    pub weight: FontWeight,
}

impl Column {
    pub fn new(width: f32) -> Self {
        Self { width, weight: FontWeight::Normal }
    }

    pub fn bold(width: f32) -> Self {
        Self { width, weight: FontWeight::Bold }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub x: f32,
    pub columns: Vec<Column>,
    pub head: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl Table {
    pub fn new(x: f32, columns: Vec<Column>) -> Self {
        Self {
            x,
            columns,
            head: None,
            rows: Vec::new(),
            style: TableStyle::default(),
        }
    }

    /// `count` equal columns spanning `width`.
    pub fn even(x: f32, width: f32, count: usize) -> Self {
        let count = count.max(1);
        Self::new(x, vec![Column::new(width / count as f32); count])
    }

    pub fn head<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.head = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows<R, S>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Lays the table out from the cursor and leaves the cursor below it.
    /// Returns the final y.
    pub fn draw(&self, ctx: &mut LayoutContext) -> f32 {
        ctx.page_break_if_needed();
        if let Some(head) = &self.head {
            self.draw_row(ctx, head, RowKind::Head);
        }
        for (index, row) in self.rows.iter().enumerate() {
            let height = self.row_height(row, RowKind::Body(index));
            if ctx.ensure_space(height) {
                if let Some(head) = &self.head {
                    self.draw_row(ctx, head, RowKind::Head);
                }
            }
            self.draw_row(ctx, row, RowKind::Body(index));
        }
        ctx.cursor_y()
    }

    fn cell_font(&self, column: &Column, kind: RowKind) -> FontSpec {
        match kind {
            RowKind::Head => FontSpec::bold(self.style.font_size),
            RowKind::Body(_) => FontSpec { weight: column.weight, size: self.style.font_size },
        }
    }

    fn line_height(&self) -> f32 {
        FontSpec::normal(self.style.font_size).size_mm() * LINE_FACTOR
    }

    fn cell_lines(&self, row: &[String], kind: RowKind) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let text = row.get(i).map(String::as_str).unwrap_or("");
                let inner = (column.width - 2.0 * self.style.padding).max(0.0);
                wrap_text(text, inner, self.cell_font(column, kind))
            })
            .collect()
    }

    fn row_height(&self, row: &[String], kind: RowKind) -> f32 {
        let lines = self.cell_lines(row, kind).iter().map(Vec::len).max().unwrap_or(0).max(1);
        (lines as f32 * self.line_height() + 2.0 * self.style.padding).max(self.style.min_row_height)
    }

    fn draw_row(&self, ctx: &mut LayoutContext, row: &[String], kind: RowKind) {
        let cells = self.cell_lines(row, kind);
        let height = self.row_height(row, kind);
        if matches!(kind, RowKind::Head) {
            ctx.ensure_space(height);
        }
        let top = ctx.cursor_y();
        let fill = match kind {
            RowKind::Head => self.style.head_fill,
            RowKind::Body(index) if index % 2 == 0 => self.style.stripe_fill,
            RowKind::Body(_) => None,
        };
        let text_color = match kind {
            RowKind::Head => self.style.head_text,
            RowKind::Body(_) => Color::BLACK,
        };
        let line_height = self.line_height();
        let ascent = FontSpec::normal(self.style.font_size).size_mm() * 0.8;

        let mut x = self.x;
        for (column, lines) in self.columns.iter().zip(&cells) {
            let bounds = Rect::new(x, top, column.width, height);
            if let Some(fill) = fill {
                ctx.filled_rect(bounds, fill);
            }
            if self.style.theme == TableTheme::Grid {
                ctx.rect(bounds, self.style.line_color, self.style.line_width);
            }
            let font = self.cell_font(column, kind);
            for (i, line) in lines.iter().enumerate() {
                let baseline = top + self.style.padding + ascent + i as f32 * line_height;
                ctx.colored_text_at(x + self.style.padding, baseline, line, font, text_color);
            }
            x += column.width;
        }
        ctx.set_cursor_y(top + height);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Head,
    Body(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::LayoutElement;

    fn sample(rows: usize) -> Table {
        Table::new(14.0, vec![Column::new(15.0), Column::new(80.0), Column::new(80.0)])
            .head(["SNo", "Particulars", "As Commissioned"])
            .rows((1..=rows).map(|i| vec![i.to_string(), format!("Row {i}"), "value".to_string()]))
    }

    #[test]
    fn draws_head_and_rows_and_returns_final_y() {
        let mut ctx = LayoutContext::new(PageConfig::a4());
        ctx.set_cursor_y(40.0);
        let end = sample(3).draw(&mut ctx);
        assert!(end > 40.0);
        assert_eq!(ctx.cursor_y(), end);
        let doc = ctx.finish();
        let texts = doc.page_text(0);
        assert_eq!(&texts[..3], &["SNo", "Particulars", "As Commissioned"]);
        assert!(texts.contains(&"Row 3"));
    }

    #[test]
    fn long_cells_grow_the_row() {
        let style = TableStyle::default();
        let table = Table::new(14.0, vec![Column::new(30.0)]).style(style);
        let short = table.row_height(&["ok".to_string()], RowKind::Body(0));
        let tall = table.row_height(&["a much longer observation text".to_string()], RowKind::Body(0));
        assert!(tall > short);
    }

    #[test]
    fn rows_never_cross_the_threshold_and_head_repeats() {
        let mut ctx = LayoutContext::new(PageConfig::a4());
        sample(40).draw(&mut ctx);
        let doc = ctx.finish();
        assert!(doc.page_count() >= 2);
        for page in &doc.pages {
            for el in page {
                if let LayoutElement::Rectangle(_) = el.element {
                    assert!(el.y + el.height <= 270.0 + 0.01);
                }
            }
        }
        assert_eq!(doc.page_text(1)[0], "SNo");
    }

    #[test]
    fn plain_theme_draws_no_outlines() {
        let mut ctx = LayoutContext::new(PageConfig::a4());
        let style = TableStyle { theme: TableTheme::Plain, head_fill: None, ..TableStyle::default() };
        Table::even(20.0, 170.0, 2).row(["PV Module Capacity", "540 Wp"]).style(style).draw(&mut ctx);
        let doc = ctx.finish();
        assert!(doc.pages[0].iter().all(|el| matches!(el.element, LayoutElement::Text(_))));
    }
}
