//! CRUD handlers shared by both form collections.

use crate::error::Result;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use solardocs_documents::{InstallationRecord, WorkCompletionRecord};
use solardocs_store::{list_with_timeout, Page, PageRequest, RecordStore, Stored};
use std::sync::Arc;

/// A record type with its own collection.
pub trait FormRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Used in log lines.
    const NAME: &'static str;

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>>;

    /// Normalises a submitted record before it is stored.
    fn prepare(self) -> Result<Self> {
        Ok(self)
    }
}

impl FormRecord for WorkCompletionRecord {
    const NAME: &'static str = "work completion record";

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>> {
        &state.work_completion
    }
}

impl FormRecord for InstallationRecord {
    const NAME: &'static str = "installation record";

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>> {
        &state.installations
    }

    fn prepare(self) -> Result<Self> {
        Ok(self.normalize()?)
    }
}

pub async fn list<R: FormRecord>(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> Result<Json<Page<Stored<R>>>> {
    let page = list_with_timeout(R::store(&state).as_ref(), request.clamped(), state.list_timeout).await?;
    Ok(Json(page))
}

pub async fn get<R: FormRecord>(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Stored<R>>> {
    Ok(Json(R::store(&state).get(&id).await?))
}

pub async fn create<R: FormRecord>(
    State(state): State<AppState>,
    Json(record): Json<R>,
) -> Result<(StatusCode, Json<Stored<R>>)> {
    let stored = R::store(&state).create(record.prepare()?).await?;
    log::info!("Created {} {}", R::NAME, stored.id);
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete<R: FormRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Stored<R>>> {
    let deleted = R::store(&state).delete(&id).await?;
    log::info!("Deleted {} {}", R::NAME, deleted.id);
    Ok(Json(deleted))
}
