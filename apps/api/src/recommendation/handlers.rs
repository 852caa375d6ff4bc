//! Axum route handlers for the recommendation pages and the query history API.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::query::UserQuery;
use crate::recommendation::resolver::resolve;
use crate::render::{render_dashboard, render_index};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: u32 = 20;
const MAX_HISTORY_LIMIT: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    pub skills: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_index())
}

/// POST /recommend
///
/// Resolves the submitted skills to a career, records the submission, and renders the result.
/// A missing `skills` field is rejected by the `Form` extractor before this runs.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> Result<Html<String>, AppError> {
    let career = resolve(&form.skills);
    let id = state.store.save(&form.skills, career).await?;

    info!("Query {id}: recommended {career}");
    Ok(Html(render_dashboard(&form.skills, career)))
}

/// GET /api/v1/queries?limit=N
///
/// Most recent submissions, newest first. `limit` defaults to 20 and is capped at 100.
pub async fn handle_list_queries(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<UserQuery>>, AppError> {
    let limit = match params.limit {
        Some(0) => return Err(AppError::Validation("limit must be at least 1".to_string())),
        Some(n) => n.min(MAX_HISTORY_LIMIT),
        None => DEFAULT_HISTORY_LIMIT,
    };

    Ok(Json(state.store.recent(limit).await?))
}

/// GET /api/v1/queries/:id
pub async fn handle_get_query(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserQuery>, AppError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Query {id} not found")))
}
