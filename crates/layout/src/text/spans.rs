use crate::fonts::FontWeight;

/// A run of text sharing one weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub weight: FontWeight,
}

impl Span {
    pub fn new(text: impl Into<String>, weight: FontWeight) -> Self {
        Self { text: text.into(), weight }
    }
}

const DELIMITER: &str = "**";

/// Splits text using the `**bold**` delimiter into ordered spans.
///
/// An opening delimiter without a closing one is kept as literal text.
/// Empty spans are dropped.
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(DELIMITER) {
        let after_open = &rest[open + DELIMITER.len()..];
        let Some(close) = after_open.find(DELIMITER) else {
            break;
        };
        push_span(&mut spans, &rest[..open], FontWeight::Normal);
        push_span(&mut spans, &after_open[..close], FontWeight::Bold);
        rest = &after_open[close + DELIMITER.len()..];
    }
    push_span(&mut spans, rest, FontWeight::Normal);
    spans
}

fn push_span(spans: &mut Vec<Span>, text: &str, weight: FontWeight) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.weight == weight => last.text.push_str(text),
        _ => spans.push(Span::new(text, weight)),
    }
}
