//! The shared-expense ledger endpoints.
//!
//! Mutations answer with the ledger as it is afterwards, so a client never
//! needs a second round trip to refresh its view.

use super::documents::{pdf_response, DeliveryQuery};
use crate::error::Result;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use solardocs_ledger::{LedgerSnapshot, LedgerSummary, NewTransaction, Transaction};

#[derive(Debug, Serialize)]
pub struct TransactionCreated {
    pub transaction: Transaction,
    #[serde(flatten)]
    pub ledger: LedgerSnapshot,
}

#[derive(Debug, Serialize)]
pub struct TransactionDeleted {
    pub deleted: Transaction,
    #[serde(flatten)]
    pub ledger: LedgerSnapshot,
}

async fn snapshot(state: &AppState) -> Result<LedgerSnapshot> {
    Ok(LedgerSnapshot::new(state.transactions.all().await?))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<LedgerSnapshot>> {
    Ok(Json(snapshot(&state).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(submission): Json<NewTransaction>,
) -> Result<(StatusCode, Json<TransactionCreated>)> {
    let transaction = submission.validate(Utc::now())?;
    let transaction = state.transactions.append(transaction).await?;
    log::info!(
        "Recorded {} of {} for {}",
        transaction.kind,
        transaction.amount,
        transaction.person
    );
    let ledger = snapshot(&state).await?;
    Ok((StatusCode::CREATED, Json(TransactionCreated { transaction, ledger })))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<TransactionDeleted>> {
    let deleted = state.transactions.delete(&id).await?;
    log::info!("Deleted transaction {}", deleted.id);
    let ledger = snapshot(&state).await?;
    Ok(Json(TransactionDeleted { deleted, ledger }))
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<LedgerSummary>> {
    let transactions = state.transactions.all().await?;
    Ok(Json(LedgerSummary::from_transactions(&transactions)))
}

pub async fn party_report(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(delivery): Query<DeliveryQuery>,
) -> Result<Response> {
    let transactions = state.transactions.all().await?;
    let document = state.composer.party_report(&transactions, &name, &delivery.options()).await?;
    Ok(pdf_response(document))
}

pub async fn ledger_report(State(state): State<AppState>, Query(delivery): Query<DeliveryQuery>) -> Result<Response> {
    let transactions = state.transactions.all().await?;
    let document = state.composer.ledger_report(&transactions, &delivery.options()).await?;
    Ok(pdf_response(document))
}
