use crate::fonts::FontSpec;
use solardocs_types::{Color, Rect};

/// A drawable placed on a page. Coordinates are millimetres from the
/// top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
    Image(ImageElement),
}

/// Text anchored at its baseline: the element's `y` is the baseline and
/// `height` is the em size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectElement {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub line_width: f32,
}

/// A straight segment from the element origin to (`x2`, `y2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineElement {
    pub x2: f32,
    pub y2: f32,
    pub color: Color,
    pub line_width: f32,
}

/// Placeholder for an image; `slot` indexes [`crate::LaidOutDocument::images`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageElement {
    pub slot: usize,
}

/// An image requested during layout, resolved once layout is done.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    pub source: String,
    pub bounds: Rect,
    pub page: usize,
}
