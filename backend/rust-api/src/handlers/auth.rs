use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::{AppJson, ClientId},
    models::user::{DashboardSummary, ProgressPatch, SignupRequest, UpdateOutcome, User},
    services::AppState,
};

use super::ApiError;

/// POST /api/v1/auth/signup - Create a user with empty progress
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(format!("Validation error: {}", e)));
    }

    let user = state.auth.signup(&client_id, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/v1/auth/login - Store the supplied user object as-is
pub async fn login(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    AppJson(user): AppJson<User>,
) -> Result<Json<User>, ApiError> {
    let user = state.auth.login(&client_id, user).await?;
    Ok(Json(user))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<StatusCode, ApiError> {
    state.auth.logout(&client_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn current_user(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<Json<User>, ApiError> {
    state
        .auth
        .current_user(&client_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::unauthorized("Not signed in"))
}

/// PATCH /api/v1/auth/progress
pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    AppJson(patch): AppJson<ProgressPatch>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let updated = state.auth.update_progress(&client_id, patch).await?;
    Ok(Json(UpdateOutcome { updated }))
}

/// POST /api/v1/auth/progress/subjects/{sid}/lessons/{lid}
pub async fn mark_lesson_complete(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path((subject_id, lesson_id)): Path<(String, String)>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let updated = state
        .auth
        .mark_lesson_complete(&client_id, &subject_id, &lesson_id)
        .await?;
    Ok(Json(UpdateOutcome { updated }))
}

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<Json<DashboardSummary>, ApiError> {
    state
        .auth
        .dashboard(&client_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::unauthorized("Not signed in"))
}
