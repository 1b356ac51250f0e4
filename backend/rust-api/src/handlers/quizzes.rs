use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    extractors::{AppJson, ClientId},
    models::attempt::{AnswerRequest, AttemptSnapshot, ReviewResponse, SubmitResponse},
    services::AppState,
};

use super::{catalog::QUIZZES_ROUTE, ApiError};

/// POST /api/v1/quizzes/{id}/attempts - Start a timed attempt
pub async fn start_attempt(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(quiz_id): Path<String>,
) -> Response {
    match state.quizzes.start_attempt(&client_id, &quiz_id).await {
        Some(snapshot) => (StatusCode::CREATED, Json(snapshot)).into_response(),
        None => {
            tracing::debug!("Unknown quiz {}, redirecting to listing", quiz_id);
            Redirect::temporary(QUIZZES_ROUTE).into_response()
        }
    }
}

/// GET /api/v1/attempts/{id}
pub async fn get_attempt(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<Json<AttemptSnapshot>, ApiError> {
    let snapshot = state.quizzes.snapshot(&client_id, &attempt_id).await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/attempts/{id}/answers
pub async fn answer_question(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
    AppJson(req): AppJson<AnswerRequest>,
) -> Result<Json<AttemptSnapshot>, ApiError> {
    let snapshot = state
        .quizzes
        .answer(&client_id, &attempt_id, &req.question_id, &req.option_id)
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/attempts/{id}/next
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<Json<AttemptSnapshot>, ApiError> {
    let snapshot = state.quizzes.next_question(&client_id, &attempt_id).await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/attempts/{id}/prev
pub async fn prev_question(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<Json<AttemptSnapshot>, ApiError> {
    let snapshot = state.quizzes.prev_question(&client_id, &attempt_id).await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/attempts/{id}/submit
pub async fn submit_attempt(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let response = state.quizzes.submit(&client_id, &attempt_id).await?;
    Ok(Json(response))
}

/// POST /api/v1/attempts/{id}/review
pub async fn review_attempt(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let review = state.quizzes.review(&client_id, &attempt_id).await?;
    Ok(Json(review))
}

/// DELETE /api/v1/attempts/{id}
pub async fn abandon_attempt(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(attempt_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.quizzes.abandon(&client_id, &attempt_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
