/// Page geometry used by every document, in millimetres.
///
/// Text is placed by baseline. Flow primitives start a new page once the
/// cursor passes [`PageConfig::break_threshold`], and continue at
/// `margin_top` on the fresh page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Baseline-to-baseline distance for body text.
    pub line_height: f32,
}

impl PageConfig {
    /// A4 portrait with a 20 mm frame and a break threshold at 270 mm.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: 20.0,
            margin_bottom: 27.0,
            margin_left: 20.0,
            margin_right: 20.0,
            line_height: 5.0,
        }
    }

    pub fn break_threshold(&self) -> f32 {
        self.height - self.margin_bottom
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn with_margins(mut self, horizontal: f32) -> Self {
        self.margin_left = horizontal;
        self.margin_right = horizontal;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::a4()
    }
}
