//! solardocs: paperwork PDFs for rooftop solar installations and a
//! shared-expense ledger, served over HTTP.
//!
//! The heavy lifting lives in the workspace crates; this crate wires them
//! into an `axum` service.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use api::router;
pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
