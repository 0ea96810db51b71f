//! Greedy word wrapping against the standard font metrics.

use super::Span;
use crate::fonts::{FontSpec, FontWeight};

/// Breaks `text` into lines no wider than `max_width` millimetres.
///
/// Words are separated by whitespace and never split. A word wider than the
/// limit gets a line of its own. Explicit newlines start a new line, so an
/// empty line between two newlines is preserved. Text without any visible
/// character yields no lines.
pub fn wrap_text(text: &str, max_width: f32, font: FontSpec) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let space = font.text_width(" ");
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0.0;
        for word in paragraph.split_whitespace() {
            let word_width = font.text_width(word);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        lines.push(line);
    }
    lines
}

/// A same-weight piece of a wrapped rich line, offset from the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedRun {
    pub text: String,
    pub weight: FontWeight,
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrappedLine {
    pub runs: Vec<WrappedRun>,
    pub width: f32,
}

impl WrappedLine {
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect::<Vec<_>>().join(" ")
    }

    fn push_word(&mut self, word: &str, weight: FontWeight, font: FontSpec) {
        let spec = font.with_weight(weight);
        let space = font.text_width(" ");
        let word_width = spec.text_width(word);
        match self.runs.last_mut() {
            Some(run) if run.weight == weight => {
                run.text.push(' ');
                run.text.push_str(word);
                self.width += space + word_width;
            }
            Some(_) => {
                let offset = self.width + space;
                self.runs.push(WrappedRun { text: word.to_string(), weight, offset });
                self.width = offset + word_width;
            }
            None => {
                self.runs.push(WrappedRun { text: word.to_string(), weight, offset: 0.0 });
                self.width = word_width;
            }
        }
    }
}

/// Wraps mixed-weight spans as one paragraph.
///
/// Each word is measured in its own weight while spaces use the base font.
/// Word boundaries follow whitespace only, so a bold span glued to
/// punctuation (`**5 kWp**,`) keeps the punctuation as a separate run on the
/// same line.
pub fn wrap_spans(spans: &[Span], max_width: f32, font: FontSpec) -> Vec<WrappedLine> {
    let space = font.text_width(" ");
    let mut lines = Vec::new();
    let mut line = WrappedLine::default();

    for span in spans {
        let spec = font.with_weight(span.weight);
        for word in span.text.split_whitespace() {
            let word_width = spec.text_width(word);
            if !line.runs.is_empty() && line.width + space + word_width > max_width {
                lines.push(std::mem::take(&mut line));
            }
            line.push_word(word, span.weight, font);
        }
    }
    if !line.runs.is_empty() {
        lines.push(line);
    }
    lines
}
