use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    extractors::{AppJson, ClientId},
    models::assistant::{AssistantReply, ChatMessage, SendMessageRequest, TranscriptResponse},
    services::{assistant_service, AppState},
};

use super::ApiError;

/// GET /api/v1/assistant/greeting
pub async fn greeting() -> Json<AssistantReply> {
    Json(assistant_service::greeting())
}

/// POST /api/v1/assistant/messages - Reply arrives after the configured delay
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    AppJson(req): AppJson<SendMessageRequest>,
) -> Result<Json<ChatMessage>, ApiError> {
    let reply = state.assistant.send_message(&client_id, &req.text).await?;
    Ok(Json(reply))
}

/// GET /api/v1/assistant/transcript
pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Json<TranscriptResponse> {
    Json(TranscriptResponse {
        messages: state.assistant.transcript(&client_id).await,
    })
}

/// DELETE /api/v1/assistant/transcript
pub async fn clear_transcript(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> StatusCode {
    state.assistant.clear_transcript(&client_id).await;
    StatusCode::NO_CONTENT
}
