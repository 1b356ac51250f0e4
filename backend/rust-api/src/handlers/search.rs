use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::extractors::ClientId;
use crate::models::search::{ResultsQuery, SearchQuery, SearchResponse, SearchResult};
use crate::services::AppState;

/// GET /api/v1/search?q=&from=
pub async fn perform_search(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let response = state
        .search
        .perform_search(&client_id, &query.q, query.from.as_deref())
        .await;
    Json(response)
}

/// GET /api/v1/search/results?type=
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Query(query): Query<ResultsQuery>,
) -> Json<Vec<SearchResult>> {
    Json(state.search.results(&client_id, query.kind).await)
}

/// DELETE /api/v1/search/results
pub async fn clear_results(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> StatusCode {
    state.search.clear_search(&client_id).await;
    StatusCode::NO_CONTENT
}
