use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use services::AppState;

/// CSP middleware adds Content-Security-Policy header to all responses
async fn csp_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; connect-src 'self'"),
    );
    response
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(extractors::CLIENT_ID_HEADER),
            HeaderName::from_static(middlewares::trace::TRACE_ID_HEADER),
        ])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler).layer(middleware::from_fn_with_state(
                app_state.clone(),
                handlers::metrics_auth_middleware,
            )),
        )
        .nest("/api/v1/catalog", catalog_routes())
        .nest("/api/v1/search", search_routes())
        .nest("/api/v1/auth", auth_routes())
        .route("/api/v1/dashboard", get(handlers::auth::dashboard))
        .route(
            "/api/v1/quizzes/{id}/attempts",
            post(handlers::quizzes::start_attempt),
        )
        .nest("/api/v1/attempts", attempt_routes())
        .nest("/api/v1/assistant", assistant_routes())
        .with_state(app_state)
        .layer(cors)
        .layer(middleware::from_fn(csp_middleware))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(handlers::catalog::list_categories))
        .route("/categories/{key}", get(handlers::catalog::get_category))
        .route("/roadmaps", get(handlers::catalog::list_roadmaps))
        .route("/roadmaps/{path}", get(handlers::catalog::get_roadmap))
        .route("/subjects", get(handlers::catalog::list_subjects))
        .route("/subjects/{id}", get(handlers::catalog::get_subject))
        .route("/courses", get(handlers::catalog::list_courses))
        .route("/quizzes", get(handlers::catalog::list_quizzes))
        .route(
            "/question-papers",
            get(handlers::catalog::list_question_papers),
        )
}

fn search_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(handlers::search::perform_search)).route(
        "/results",
        get(handlers::search::get_results).delete(handlers::search::clear_results),
    )
}

fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::current_user))
        .route("/progress", patch(handlers::auth::update_progress))
        .route(
            "/progress/subjects/{sid}/lessons/{lid}",
            post(handlers::auth::mark_lesson_complete),
        )
}

fn attempt_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/{id}",
            get(handlers::quizzes::get_attempt).delete(handlers::quizzes::abandon_attempt),
        )
        .route("/{id}/answers", put(handlers::quizzes::answer_question))
        .route("/{id}/next", post(handlers::quizzes::next_question))
        .route("/{id}/prev", post(handlers::quizzes::prev_question))
        .route("/{id}/submit", post(handlers::quizzes::submit_attempt))
        .route("/{id}/review", post(handlers::quizzes::review_attempt))
        .route("/{id}/stream", get(handlers::sse::attempt_stream))
}

fn assistant_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/greeting", get(handlers::assistant::greeting))
        .route("/messages", post(handlers::assistant::send_message))
        .route(
            "/transcript",
            get(handlers::assistant::get_transcript).delete(handlers::assistant::clear_transcript),
        )
}
