mod spans;
mod wrapper;

pub use spans::{parse_spans, Span};
pub use wrapper::{wrap_spans, wrap_text, WrappedLine, WrappedRun};
