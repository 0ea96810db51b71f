//! The explicit layout context threaded through every primitive.

use crate::algorithms::pagination::{check_fit, past_threshold};
use crate::config::PageConfig;
use crate::elements::{
    ImageElement, ImageSlot, LayoutElement, LineElement, PositionedElement, RectElement,
    TextElement,
};
use crate::fonts::FontSpec;
use crate::output::LaidOutDocument;
use solardocs_types::{Color, Rect};

/// Cursor, page list and pending images of a document being laid out.
///
/// The context always holds at least one page. The cursor is the baseline
/// of the next line of flowing text on the current page.
#[derive(Debug)]
pub struct LayoutContext {
    config: PageConfig,
    pages: Vec<Vec<PositionedElement>>,
    images: Vec<ImageSlot>,
    cursor_y: f32,
}

impl LayoutContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            pages: vec![Vec::new()],
            images: Vec::new(),
            cursor_y: config.margin_top,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn set_cursor_y(&mut self, y: f32) {
        self.cursor_y = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a fresh page and moves the cursor to the top margin.
    pub fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor_y = self.config.margin_top;
        log::trace!("layout: started page {}", self.pages.len());
    }

    /// True while nothing has been drawn on the current page.
    pub fn page_is_blank(&self) -> bool {
        self.pages.last().is_none_or(Vec::is_empty)
    }

    /// Moves to the top of a fresh page, reusing the current one if it is
    /// still blank.
    pub fn start_page(&mut self) {
        if self.page_is_blank() {
            self.cursor_y = self.config.margin_top;
        } else {
            self.new_page();
        }
    }

    /// Breaks the page when the cursor has passed the threshold.
    pub fn page_break_if_needed(&mut self) -> bool {
        if past_threshold(self.cursor_y, self.config.break_threshold()) {
            log::debug!("layout: cursor at {:.1}mm passed the threshold", self.cursor_y);
            self.new_page();
            true
        } else {
            false
        }
    }

    /// Breaks the page unless a block of `height` fits above the threshold.
    ///
    /// Used for blocks that must not be split, such as table rows and
    /// signature blocks. A block taller than a whole page is placed anyway.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        let analysis = check_fit(self.cursor_y, height, self.config.break_threshold());
        let at_top = (self.cursor_y - self.config.margin_top).abs() < f32::EPSILON;
        if analysis.should_break && !at_top {
            log::debug!(
                "layout: {:.1}mm block does not fit in {:.1}mm, breaking page",
                height,
                analysis.remaining_height
            );
            self.new_page();
            true
        } else {
            false
        }
    }

    pub fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    /// Draws black text with its baseline at `y`. Empty text draws nothing.
    pub fn text_at(&mut self, x: f32, y: f32, text: &str, font: FontSpec) {
        self.colored_text_at(x, y, text, font, Color::BLACK);
    }

    pub fn colored_text_at(&mut self, x: f32, y: f32, text: &str, font: FontSpec, color: Color) {
        if text.is_empty() {
            return;
        }
        self.push(PositionedElement {
            x,
            y,
            width: font.text_width(text),
            height: font.size_mm(),
            element: LayoutElement::Text(TextElement {
                content: text.to_string(),
                font,
                color,
            }),
        });
    }

    /// Draws text horizontally centred on the page.
    pub fn centered_text_at(&mut self, y: f32, text: &str, font: FontSpec) {
        let x = self.config.center_x() - font.text_width(text) / 2.0;
        self.text_at(x, y, text, font);
    }

    /// Draws text so that it ends at `right`.
    pub fn right_aligned_text_at(&mut self, right: f32, y: f32, text: &str, font: FontSpec) {
        self.text_at(right - font.text_width(text), y, text, font);
    }

    pub fn rect(&mut self, bounds: Rect, stroke: Color, line_width: f32) {
        self.push_rect(bounds, RectElement { stroke: Some(stroke), fill: None, line_width });
    }

    pub fn filled_rect(&mut self, bounds: Rect, fill: Color) {
        self.push_rect(bounds, RectElement { stroke: None, fill: Some(fill), line_width: 0.0 });
    }

    pub fn push_rect(&mut self, bounds: Rect, rect: RectElement) {
        self.push(PositionedElement {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element: LayoutElement::Rectangle(rect),
        });
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, line_width: f32) {
        self.push(PositionedElement {
            x: from.0,
            y: from.1,
            width: (to.0 - from.0).abs(),
            height: (to.1 - from.1).abs(),
            element: LayoutElement::Line(LineElement {
                x2: to.0,
                y2: to.1,
                color,
                line_width,
            }),
        });
    }

    /// Reserves `bounds` on the current page for an image blob.
    ///
    /// Blank sources are treated as absent and reserve nothing. Returns the
    /// slot index otherwise.
    pub fn image_slot(&mut self, source: &str, bounds: Rect) -> Option<usize> {
        if source.trim().is_empty() {
            return None;
        }
        let slot = self.images.len();
        self.images.push(ImageSlot {
            source: source.to_string(),
            bounds,
            page: self.page_index(),
        });
        self.push(PositionedElement {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element: LayoutElement::Image(ImageElement { slot }),
        });
        Some(slot)
    }

    pub fn finish(self) -> LaidOutDocument {
        LaidOutDocument {
            config: self.config,
            pages: self.pages,
            images: self.images,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}
