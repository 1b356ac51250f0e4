use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;

use crate::extractors::ClientId;
use crate::models::catalog::{
    CareerRoadmap, CategoryFilter, CategoryOverview, Course, QuestionPaper, QuestionPaperQuery, QuizSummary,
    Subject,
};
use crate::services::AppState;

use super::ApiError;

pub const SUBJECTS_ROUTE: &str = "/api/v1/catalog/subjects";
pub const QUIZZES_ROUTE: &str = "/api/v1/catalog/quizzes";

/// GET /api/v1/catalog/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryOverview>> {
    Json(state.catalog.categories().to_vec())
}

/// GET /api/v1/catalog/categories/{key}
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Json<CategoryOverview> {
    Json(state.catalog.category(&key).clone())
}

/// GET /api/v1/catalog/roadmaps
pub async fn list_roadmaps(State(state): State<Arc<AppState>>) -> Json<Vec<CareerRoadmap>> {
    Json(state.catalog.roadmaps().to_vec())
}

/// GET /api/v1/catalog/roadmaps/{path}
pub async fn get_roadmap(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Json<CareerRoadmap> {
    Json(state.catalog.roadmap(&path).clone())
}

/// GET /api/v1/catalog/subjects?category=
pub async fn list_subjects(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<Subject>> {
    let subjects = state.catalog.subjects(filter.category.as_deref());
    Json(subjects.into_iter().cloned().collect())
}

/// GET /api/v1/catalog/subjects/{id}
pub async fn get_subject(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Path(subject_id): Path<String>,
) -> Result<Response, ApiError> {
    if state.catalog.subject(&subject_id).is_none() {
        tracing::debug!("Unknown subject {}, redirecting to listing", subject_id);
        return Ok(Redirect::temporary(SUBJECTS_ROUTE).into_response());
    }

    let user = state.auth.current_user(&client_id).await?;
    let stored = user
        .as_ref()
        .and_then(|u| u.progress.subjects.get(&subject_id));

    match state.catalog.subject_detail(&subject_id, stored) {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok(Redirect::temporary(SUBJECTS_ROUTE).into_response()),
    }
}

/// GET /api/v1/catalog/courses?category=
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<Course>> {
    let courses = state.catalog.courses(filter.category.as_deref());
    Json(courses.into_iter().cloned().collect())
}

/// GET /api/v1/catalog/quizzes?category=
///
/// Summaries only, correct answers stay on the server.
pub async fn list_quizzes(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<QuizSummary>> {
    let quizzes = state.catalog.quizzes(filter.category.as_deref());
    Json(quizzes.into_iter().map(QuizSummary::from).collect())
}

/// GET /api/v1/catalog/question-papers
pub async fn list_question_papers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuestionPaperQuery>,
) -> Json<Vec<QuestionPaper>> {
    let papers = state.catalog.question_papers(&query);
    Json(papers.into_iter().cloned().collect())
}
