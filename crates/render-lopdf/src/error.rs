use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    /// The decoded images do not line up with the layout's image slots.
    #[error("Layout has {slots} image slot(s) but {images} image(s) were supplied")]
    SlotMismatch { slots: usize, images: usize },
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
