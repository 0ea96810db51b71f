use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";

/// How the caller wants the document delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Shown inline, e.g. in a browser tab.
    #[default]
    Preview,
    /// Saved under its filename.
    Download,
}

impl OutputMode {
    pub fn from_download_flag(download: bool) -> Self {
        if download { OutputMode::Download } else { OutputMode::Preview }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub mode: OutputMode,
    /// Date printed where a document needs "today".
    pub today: NaiveDate,
}

impl GenerationOptions {
    pub fn new(mode: OutputMode, today: NaiveDate) -> Self {
        Self { mode, today }
    }

    pub fn download(self) -> Self {
        Self { mode: OutputMode::Download, ..self }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(OutputMode::Preview, Local::now().date_naive())
    }
}

/// Finished PDF bytes plus what a transport needs to deliver them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: &'static str,
    pub mode: OutputMode,
}

impl GeneratedDocument {
    /// `Content-Disposition` header value for the output mode.
    pub fn content_disposition(&self) -> String {
        let disposition = match self.mode {
            OutputMode::Preview => "inline",
            OutputMode::Download => "attachment",
        };
        format!("{disposition}; filename=\"{}\"", self.filename)
    }
}

/// Collapses every run of non-alphanumeric characters to one `_`.
///
/// Leading and trailing underscores are dropped; a name with nothing left
/// becomes `document`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }
    if out.is_empty() { "document".to_string() } else { out }
}

/// `<document type>_<normalised name>.pdf`
pub fn output_filename(document_type: &str, name: &str) -> String {
    format!("{document_type}_{}.pdf", normalize_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_normalised() {
        assert_eq!(normalize_name("Asha  Patil"), "Asha_Patil");
        assert_eq!(normalize_name(" M/S. Janhavi & Co. "), "M_S_Janhavi_Co");
        assert_eq!(normalize_name("***"), "document");
        assert_eq!(normalize_name(""), "document");
    }

    #[test]
    fn filenames_carry_type_and_name() {
        assert_eq!(output_filename("WCR", "Ravi Kumar"), "WCR_Ravi_Kumar.pdf");
    }

    #[test]
    fn disposition_follows_mode() {
        let mut doc = GeneratedDocument {
            bytes: Vec::new(),
            filename: "DCR_Asha.pdf".into(),
            mime: PDF_MIME,
            mode: OutputMode::Preview,
        };
        assert_eq!(doc.content_disposition(), "inline; filename=\"DCR_Asha.pdf\"");
        doc.mode = OutputMode::Download;
        assert_eq!(doc.content_disposition(), "attachment; filename=\"DCR_Asha.pdf\"");
    }
}
