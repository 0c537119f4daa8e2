//! Suggestion handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::model::InvoiceRecord;
use crate::suggest::{Suggestions, suggest as suggest_from};

use super::super::state::AppState;
use super::ApiError;

/// POST /api/suggest - Suggest a template and tax rate from saved records.
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<InvoiceRecord>>, JsonRejection>,
) -> Result<Json<Suggestions>, ApiError> {
    let Json(records) = body?;
    Ok(Json(suggest_from(&records, state.engine.registry())))
}
