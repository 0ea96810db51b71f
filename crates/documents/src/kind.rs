use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every document the service can produce from a form record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Annexure-I commissioning report with the Proforma-A certificate.
    CommissioningReport,
    /// Annexure-A domestic content (DCR) self-declaration.
    DcrDeclaration,
    /// Detailed work completion report with guarantee certificate.
    WorkCompletionReport,
    NetMeteringAgreement,
    ModelAgreement,
    /// Covering letter to the bank; built from a [`WorkCompletionRecord`].
    ///
    /// [`WorkCompletionRecord`]: crate::WorkCompletionRecord
    WorkCompletionLetter,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::CommissioningReport,
        DocumentKind::DcrDeclaration,
        DocumentKind::WorkCompletionReport,
        DocumentKind::NetMeteringAgreement,
        DocumentKind::ModelAgreement,
        DocumentKind::WorkCompletionLetter,
    ];

    /// URL and CLI name.
    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::CommissioningReport => "commissioning-report",
            DocumentKind::DcrDeclaration => "dcr-declaration",
            DocumentKind::WorkCompletionReport => "work-completion-report",
            DocumentKind::NetMeteringAgreement => "net-metering-agreement",
            DocumentKind::ModelAgreement => "model-agreement",
            DocumentKind::WorkCompletionLetter => "work-completion-letter",
        }
    }

    /// Prefix of the output filename.
    pub fn document_type(self) -> &'static str {
        match self {
            DocumentKind::CommissioningReport => "Annexure-I",
            DocumentKind::DcrDeclaration => "DCR",
            DocumentKind::WorkCompletionReport => "WCR",
            DocumentKind::NetMeteringAgreement => "Net_Metering_Agreement",
            DocumentKind::ModelAgreement => "Model_Agreement",
            DocumentKind::WorkCompletionLetter => "Work_Completion_Letter",
        }
    }

    pub fn uses_work_completion_record(self) -> bool {
        self == DocumentKind::WorkCompletionLetter
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let kind = match wanted.as_str() {
            "annexure-i" | "commissioning" => DocumentKind::CommissioningReport,
            "dcr" | "hypothecation" | "annexure-a" => DocumentKind::DcrDeclaration,
            "wcr" => DocumentKind::WorkCompletionReport,
            "net-meter" | "net-metering" => DocumentKind::NetMeteringAgreement,
            "letter" | "work-completion" => DocumentKind::WorkCompletionLetter,
            other => {
                return DocumentKind::ALL
                    .into_iter()
                    .find(|kind| kind.slug() == other)
                    .ok_or_else(|| DocumentError::UnknownKind(s.to_string()));
            }
        };
        Ok(kind)
    }
}
