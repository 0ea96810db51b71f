use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl LedgerError {
    /// Names of the fields the error is about.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            LedgerError::MissingFields(fields) => fields.clone(),
            LedgerError::InvalidField { field, .. } => vec![field],
        }
    }
}
