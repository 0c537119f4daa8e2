//! Render handler.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::document::ResolvedDocument;
use crate::model::InvoiceRecord;

use super::super::state::AppState;
use super::ApiError;

/// POST /api/render/:id - Render an invoice record with a template.
///
/// Unknown template ids render with the generic template, as the library
/// does; the response's `template.fallback` tells the caller.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<InvoiceRecord>, JsonRejection>,
) -> Result<Json<ResolvedDocument>, ApiError> {
    let Json(record) = body?;
    let document = state.engine.render(&record, &id)?;
    Ok(Json(document))
}
