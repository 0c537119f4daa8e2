//! Template catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;

use crate::template::TemplateDescriptor;

use super::super::state::AppState;
use super::ApiError;

/// Template information returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
}

/// GET /api/templates - List all templates in gallery order.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<TemplateInfo>> {
    let templates = state
        .engine
        .registry()
        .iter()
        .map(|t| TemplateInfo {
            id: t.id,
            name: t.name,
            industry: t.industry,
        })
        .collect();
    Json(templates)
}

/// GET /api/templates/:id - Full descriptor of one template.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<&'static TemplateDescriptor>, ApiError> {
    state
        .engine
        .registry()
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Unknown template '{}'", id)))
}
