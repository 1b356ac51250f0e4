use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

const UNMATCHED_ROUTE: &str = "unmatched";

/// Records request count and latency per method, route template and status.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = route_label(req.extensions().get::<MatchedPath>());

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &route, &status])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route])
        .observe(start.elapsed().as_secs_f64());

    response
}

/// Subject slugs, quiz ids and attempt ids all collapse into the route
/// template, e.g. `/api/v1/attempts/{id}/answers`. Requests that hit no route
/// share one label.
fn route_label(matched: Option<&MatchedPath>) -> String {
    matched
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new()
            .route("/api/v1/attempts/{id}", get(|| async { StatusCode::OK }))
            .layer(middleware::from_fn(metrics_middleware))
    }

    fn count(method: &str, route: &str, status: &str) -> u64 {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&[method, route, status])
            .get()
    }

    #[tokio::test]
    async fn attempt_ids_collapse_into_route_template() {
        let before = count("GET", "/api/v1/attempts/{id}", "200");

        for id in ["a1", "550e8400-e29b-41d4-a716-446655440000"] {
            let response = router()
                .oneshot(
                    Request::builder()
                        .uri(format!("/api/v1/attempts/{}", id))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert!(count("GET", "/api/v1/attempts/{id}", "200") >= before + 2);
    }

    #[test]
    fn missing_route_uses_shared_label() {
        assert_eq!(route_label(None), "unmatched");
    }
}
