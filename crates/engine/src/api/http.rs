//! HTTP routes.
//!
//! Every trigger runs its optimistic transition synchronously and answers with
//! the resulting snapshot; the reaction itself is resolved in the background
//! and shows up in later `GET /api/session` calls.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use toothtutor_domain::{ConditionChange, DomainError, SelectionTicket};
use toothtutor_shared::{
    CustomRemedyRequest, RemedyOption, RemedySearchQuery, SelectConditionRequest,
    SelectRemedyRequest, SessionSnapshot,
};

use super::presentation::{remedy_options, session_snapshot};
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/session", get(get_session))
        .route("/api/remedies", get(list_remedies))
        .route("/api/condition", post(select_condition))
        .route("/api/remedy", post(select_remedy))
        .route("/api/remedy/custom", post(submit_custom_remedy))
        .route("/api/remedy/reset", post(reset_remedy))
        .route("/api/dropdown/toggle", post(toggle_dropdown))
        .route("/api/dropdown/close", post(close_dropdown))
        .fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn get_session(State(app): State<Arc<App>>) -> Json<SessionSnapshot> {
    Json(current_snapshot(&app).await)
}

async fn list_remedies(
    State(app): State<Arc<App>>,
    Query(query): Query<RemedySearchQuery>,
) -> Json<Vec<RemedyOption>> {
    Json(remedy_options(
        app.use_cases.reaction.picker.options(&query.query),
    ))
}

// =============================================================================
// Selection triggers
// =============================================================================

async fn select_condition(
    State(app): State<Arc<App>>,
    Json(request): Json<SelectConditionRequest>,
) -> (StatusCode, Json<SessionSnapshot>) {
    match app
        .use_cases
        .reaction
        .select
        .begin_condition(request.condition)
        .await
    {
        ConditionChange::Unchanged => (StatusCode::OK, Json(current_snapshot(&app).await)),
        ConditionChange::Changed(ticket) => accepted(&app, ticket).await,
    }
}

async fn select_remedy(
    State(app): State<Arc<App>>,
    Json(request): Json<SelectRemedyRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let ticket = app
        .use_cases
        .reaction
        .select
        .begin_remedy(&request.remedy)
        .await?;
    Ok(accepted(&app, ticket).await)
}

async fn submit_custom_remedy(
    State(app): State<Arc<App>>,
    Json(request): Json<CustomRemedyRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let ticket = app
        .use_cases
        .reaction
        .select
        .begin_custom(&request.text)
        .await?;
    Ok(accepted(&app, ticket).await)
}

async fn reset_remedy(State(app): State<Arc<App>>) -> (StatusCode, Json<SessionSnapshot>) {
    let ticket = app.use_cases.reaction.select.begin_reset().await;
    accepted(&app, ticket).await
}

// =============================================================================
// Remedy dropdown
// =============================================================================

async fn toggle_dropdown(State(app): State<Arc<App>>) -> Json<SessionSnapshot> {
    app.use_cases.reaction.picker.toggle().await;
    Json(current_snapshot(&app).await)
}

async fn close_dropdown(State(app): State<Arc<App>>) -> Json<SessionSnapshot> {
    app.use_cases.reaction.picker.close().await;
    Json(current_snapshot(&app).await)
}

// =============================================================================
// Helpers
// =============================================================================

async fn current_snapshot(app: &App) -> SessionSnapshot {
    session_snapshot(&app.session.snapshot().await)
}

/// Hand the ticket to a background task and answer with the optimistic state.
async fn accepted(app: &App, ticket: SelectionTicket) -> (StatusCode, Json<SessionSnapshot>) {
    let snapshot = current_snapshot(app).await;
    app.use_cases.reaction.select.spawn_completion(ticket);
    (StatusCode::ACCEPTED, Json(snapshot))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
