use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{send, send_json, sign_up};

#[tokio::test]
async fn test_signup_creates_user_with_empty_progress() {
    let app = common::create_test_app().await;

    let user = sign_up(&app, "signup-1").await;

    assert_eq!(user["name"], "Asha Verma");
    assert!(user["progress"]["subjects"].as_object().unwrap().is_empty());
    assert!(user["progress"]["quizzes"].as_object().unwrap().is_empty());

    let (status, me) = send_json(&app, "GET", "/api/v1/auth/me", "signup-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user["id"]);
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = common::create_test_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/auth/signup",
        "signup-2",
        Some(json!({ "name": "Asha", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let app = common::create_test_app().await;

    let response = app_request_with_raw_body(&app, "{not json").await;
    assert_eq!(response.0, StatusCode::BAD_REQUEST);
    assert_eq!(response.1["status"], 400);
}

async fn app_request_with_raw_body(
    app: &axum::Router,
    raw: &str,
) -> (StatusCode, serde_json::Value) {
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/v1/auth/signup")
                .header("content-type", "application/json")
                .body(Body::from(raw.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_me_without_user_is_unauthorized() {
    let app = common::create_test_app().await;

    let (status, _) = send_json(&app, "GET", "/api/v1/auth/me", "nobody", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "GET", "/api/v1/dashboard", "nobody", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_progress_without_user_reports_not_updated() {
    let app = common::create_test_app().await;

    let (status, json) = send_json(
        &app,
        "PATCH",
        "/api/v1/auth/progress",
        "nobody",
        Some(json!({ "quizzes": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "updated": false }));
}

#[tokio::test]
async fn test_update_progress_same_quiz_keeps_latest() {
    let app = common::create_test_app().await;
    sign_up(&app, "progress-1").await;

    for score in [40, 90] {
        let (status, json) = send_json(
            &app,
            "PATCH",
            "/api/v1/auth/progress",
            "progress-1",
            Some(json!({
                "quizzes": {
                    "quiz-calculus": {
                        "score": score,
                        "date": "2024-05-01T10:00:00Z",
                        "timeTaken": 300
                    }
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["updated"], true);
    }

    let (_, me) = send_json(&app, "GET", "/api/v1/auth/me", "progress-1", None).await;
    let quizzes = me["progress"]["quizzes"].as_object().unwrap();
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes["quiz-calculus"]["score"], 90);
}

#[tokio::test]
async fn test_mark_lesson_complete_updates_subject_progress() {
    let app = common::create_test_app().await;
    sign_up(&app, "lesson-1").await;

    let (status, json) = send_json(
        &app,
        "POST",
        "/api/v1/auth/progress/subjects/physics-fundamentals/lessons/kinematics",
        "lesson-1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["updated"], true);

    let (_, detail) = send_json(
        &app,
        "GET",
        "/api/v1/catalog/subjects/physics-fundamentals",
        "lesson-1",
        None,
    )
    .await;
    assert_eq!(detail["progress"]["completedLessons"], json!(["kinematics"]));
    assert_eq!(detail["progress"]["overallProgress"], 14);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/auth/progress/subjects/physics-fundamentals/lessons/optics",
        "lesson-1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_stores_user_and_logout_removes_it() {
    let app = common::create_test_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/auth/login",
        "login-1",
        Some(json!({
            "id": "42",
            "name": "Ravi",
            "email": "ravi@example.com",
            "progress": {
                "subjects": {},
                "quizzes": {
                    "quiz-mechanics": { "score": 80, "date": "2024-05-01T10:00:00Z", "timeTaken": 600 }
                },
                "lastActivity": "2024-05-01T10:00:00Z"
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, summary) = send_json(&app, "GET", "/api/v1/dashboard", "login-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["quizzesTaken"], 1);
    assert_eq!(summary["averageScore"], 80);
    assert_eq!(summary["recentQuizzes"][0]["title"], "Mechanics Quiz");

    let response = send(&app, "POST", "/api/v1/auth/logout", "login-1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, "GET", "/api/v1/auth/me", "login-1", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_accepts_progress_without_last_activity() {
    let app = common::create_test_app().await;

    let (status, user) = send_json(
        &app,
        "POST",
        "/api/v1/auth/login",
        "login-2",
        Some(json!({
            "id": "7",
            "name": "Meera",
            "email": "meera@example.com",
            "progress": { "subjects": {}, "quizzes": {} }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(user["progress"]["lastActivity"].is_string());
}
