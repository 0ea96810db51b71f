//! Metrics for the two standard PDF fonts every document uses.
//!
//! Only Helvetica and Helvetica-Bold are used, so widths come from their AFM
//! tables rather than from font files. Widths are in 1/1000 em; sizes are in
//! points while the layout works in millimetres.

use std::fmt;

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontWeight::Normal => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontWeight::Normal => &HELVETICA_WIDTHS,
            FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

/// Weight plus size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub weight: FontWeight,
    pub size: f32,
}

impl FontSpec {
    pub const fn normal(size: f32) -> Self {
        Self { weight: FontWeight::Normal, size }
    }

    pub const fn bold(size: f32) -> Self {
        Self { weight: FontWeight::Bold, size }
    }

    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    /// Em size in millimetres.
    pub fn size_mm(&self) -> f32 {
        self.size * MM_PER_PT
    }

    /// Advance width of `text` in millimetres.
    pub fn text_width(&self, text: &str) -> f32 {
        let table = self.weight.widths();
        let units: u32 = text.chars().map(|c| char_width(table, c) as u32).sum();
        units as f32 / 1000.0 * self.size_mm()
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::normal(10.0)
    }
}

/// Width of `text` set in `font`, in millimetres.
pub fn text_width(text: &str, font: FontSpec) -> f32 {
    font.text_width(text)
}

fn char_width(table: &[u16; 95], c: char) -> u16 {
    match c as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        // Characters outside ASCII are rendered via WinAnsi (or '?'), which
        // both fonts set close to the digit width.
        _ => 556,
    }
}

/// Advance widths of printable ASCII (0x20..=0x7E) in 1/1000 em, from the
/// `WX` entries of Adobe's `Helvetica.afm` and `Helvetica-Bold.afm` core font
/// metrics.
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // ' ' ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Same layout as [`HELVETICA_WIDTHS`].
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
