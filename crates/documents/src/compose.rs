//! Turns records into finished PDF bytes.
//!
//! Layout is synchronous and cheap. The composer then resolves every image
//! slot of the layout concurrently and serialises the PDF on the blocking
//! pool, so a request either gets a complete document or an error.

use crate::error::DocumentError;
use crate::generators::{self, Composition};
use crate::kind::DocumentKind;
use crate::output::{normalize_name, output_filename, GeneratedDocument, GenerationOptions, PDF_MIME};
use crate::records::{InstallationRecord, WorkCompletionRecord};
use solardocs_ledger::Transaction;
use solardocs_render_lopdf::PdfRenderer;
use solardocs_resource::{load_images, FilesystemResourceProvider, InlineResourceProvider, ResourceProvider};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DocumentComposer {
    provider: Arc<dyn ResourceProvider>,
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new(Arc::new(InlineResourceProvider))
    }
}

impl DocumentComposer {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self { provider }
    }

    /// Image fields may name files below `dir` as well as carry inline blobs.
    pub fn with_asset_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(Arc::new(FilesystemResourceProvider::new(dir)))
    }

    /// Lays out one of the installation documents for `record`.
    ///
    /// The work completion letter needs its own record; asking for it here
    /// is a [`DocumentError::RecordMismatch`].
    pub fn layout(
        kind: DocumentKind,
        record: &InstallationRecord,
        options: &GenerationOptions,
    ) -> Result<Composition, DocumentError> {
        let composition = match kind {
            DocumentKind::CommissioningReport => generators::commissioning::layout(record, options),
            DocumentKind::DcrDeclaration => generators::dcr_declaration::layout(record, options),
            DocumentKind::WorkCompletionReport => generators::work_completion_report::layout(record, options),
            DocumentKind::NetMeteringAgreement => generators::net_metering::layout(record, options),
            DocumentKind::ModelAgreement => generators::model_agreement::layout(record, options),
            DocumentKind::WorkCompletionLetter => {
                return Err(DocumentError::RecordMismatch(kind.slug()));
            }
        };
        Ok(composition)
    }

    pub async fn generate(
        &self,
        kind: DocumentKind,
        record: &InstallationRecord,
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        let composition = Self::layout(kind, record, options)?;
        let filename = output_filename(kind.document_type(), &record.consumer_name);
        self.finish(composition, filename, options).await
    }

    /// The bank letter. Fails with [`DocumentError::Validation`] before any
    /// layout happens when a required field is blank.
    pub async fn work_completion_letter(
        &self,
        record: &WorkCompletionRecord,
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        let composition = generators::work_completion_letter::layout(record)?;
        let kind = DocumentKind::WorkCompletionLetter;
        let filename = output_filename(kind.document_type(), &record.consumer_name);
        self.finish(composition, filename, options).await
    }

    /// Generates `kind` from a raw JSON record, picking the record type the
    /// document needs.
    pub async fn generate_json(
        &self,
        kind: DocumentKind,
        record: serde_json::Value,
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        if kind.uses_work_completion_record() {
            let record: WorkCompletionRecord = serde_json::from_value(record)?;
            self.work_completion_letter(&record, options).await
        } else {
            let record: InstallationRecord = serde_json::from_value(record)?;
            self.generate(kind, &record.normalize()?, options).await
        }
    }

    pub async fn party_report(
        &self,
        transactions: &[Transaction],
        party: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        let composition = generators::ledger_reports::party_report(transactions, party, options)?;
        let filename = format!("{}-expense-report.pdf", normalize_name(party));
        self.finish(composition, filename, options).await
    }

    pub async fn ledger_report(
        &self,
        transactions: &[Transaction],
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        let composition = generators::ledger_reports::ledger_report(transactions, options);
        self.finish(composition, "expense-ledger-report.pdf".to_string(), options).await
    }

    async fn finish(
        &self,
        composition: Composition,
        filename: String,
        options: &GenerationOptions,
    ) -> Result<GeneratedDocument, DocumentError> {
        let Composition { layout, info } = composition;
        let sources: Vec<String> = layout.images.iter().map(|slot| slot.source.clone()).collect();
        let images = load_images(Arc::clone(&self.provider), &sources).await;
        let embedded = images.iter().filter(|image| image.is_some()).count();

        let pages = layout.page_count();
        let bytes = tokio::task::spawn_blocking(move || PdfRenderer::render(&layout, &images, &info))
            .await
            .map_err(|e| DocumentError::Task(e.to_string()))??;

        log::info!(
            "Generated {} ({} pages, {}/{} images, {} bytes)",
            filename,
            pages,
            embedded,
            sources.len(),
            bytes.len()
        );
        Ok(GeneratedDocument { bytes, filename, mime: PDF_MIME, mode: options.mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::fixtures;
    use crate::output::OutputMode;

    fn options() -> GenerationOptions {
        GenerationOptions::new(OutputMode::Preview, fixtures::today())
    }

    #[tokio::test]
    async fn installation_documents_render_to_pdf() {
        let composer = DocumentComposer::default();
        let record = fixtures::installation(3);
        for kind in DocumentKind::ALL.into_iter().filter(|k| !k.uses_work_completion_record()) {
            let doc = composer.generate(kind, &record, &options()).await.unwrap();
            assert!(doc.bytes.starts_with(b"%PDF-"), "{kind} is not a PDF");
            assert_eq!(doc.filename, format!("{}_Asha_Patil.pdf", kind.document_type()));
            assert_eq!(doc.mime, PDF_MIME);
        }
    }

    #[tokio::test]
    async fn letter_needs_its_own_record() {
        let composer = DocumentComposer::default();
        let err = composer
            .generate(DocumentKind::WorkCompletionLetter, &fixtures::installation(1), &options())
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::RecordMismatch("work-completion-letter")));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn letter_validation_produces_no_bytes() {
        let composer = DocumentComposer::default();
        let record = WorkCompletionRecord { installer_contact: String::new(), ..fixtures::work_completion() };
        let err = composer.work_completion_letter(&record, &options()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: installerContact");
    }

    #[tokio::test]
    async fn json_records_pick_their_type() {
        let composer = DocumentComposer::default();
        let options = options().download();
        let doc = composer
            .generate_json(
                DocumentKind::WorkCompletionLetter,
                serde_json::to_value(fixtures::work_completion()).unwrap(),
                &options,
            )
            .await
            .unwrap();
        assert_eq!(doc.filename, "Work_Completion_Letter_Asha_Patil.pdf");
        assert_eq!(doc.content_disposition(), "attachment; filename=\"Work_Completion_Letter_Asha_Patil.pdf\"");

        let doc = composer
            .generate_json(
                DocumentKind::DcrDeclaration,
                serde_json::json!({ "consumerName": "Asha Patil", "numberOfModules": 2 }),
                &options,
            )
            .await
            .unwrap();
        assert_eq!(doc.filename, "DCR_Asha_Patil.pdf");

        let err = composer
            .generate_json(DocumentKind::DcrDeclaration, serde_json::json!([1, 2]), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn undecodable_images_are_omitted() {
        let composer = DocumentComposer::default();
        let mut record = fixtures::installation(2);
        record.company_stamp = "data:image/png;base64,bm90IGFuIGltYWdl".into();
        let doc = composer.generate(DocumentKind::DcrDeclaration, &record, &options()).await.unwrap();
        assert!(doc.bytes.starts_with(b"%PDF-"));
    }
}
