use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// 1-based number of the first page whose text contains `needle`.
pub fn find_page(doc: &LopdfDocument, needle: &str) -> Option<u32> {
    let pages = doc.get_pages().len() as u32;
    (1..=pages).find(|&page| doc.extract_text(&[page]).is_ok_and(|text| text.contains(needle)))
}

/// Value of an entry in the document information dictionary.
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let dict = doc.get_object(info).ok()?.as_dict().ok()?;
    let value = dict.get(key).ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(value).into_owned())
}

/// Number of image XObjects in the file.
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .count()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that `text` first appears on the 1-based `page`
#[macro_export]
macro_rules! assert_pdf_text_on_page {
    ($pdf:expr, $text:expr, $page:expr) => {
        let found = $crate::common::pdf_assertions::find_page(&$pdf.doc, $text);
        assert_eq!(
            found,
            Some($page),
            "Expected '{}' first on page {}, found on {:?}",
            $text,
            $page,
            found
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
