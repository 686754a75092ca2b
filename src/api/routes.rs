//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{cv_content, github_projects, mission_log, system_status, AppState};

/// Create the API router.
///
/// CORS is wide open: the frontend is served from a different origin and
/// the API carries no credentials or mutating endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(system_status))
        .route("/api/mission", get(mission_log))
        .route("/api/cv", get(cv_content))
        .route("/api/projects", get(github_projects))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_router() -> Router {
        create_router(AppState::new(&Config::default()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn status_endpoint_returns_ok_json() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ONLINE");
        assert_eq!(body["version"], "2.1.0-beta");
    }

    #[tokio::test]
    async fn mission_endpoint_is_idempotent() {
        let app = test_router();

        let first = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/mission")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let second = app
            .oneshot(
                Request::builder()
                    .uri("/api/mission")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(body_string(first).await, body_string(second).await);
    }

    #[tokio::test]
    async fn cv_endpoint_is_plain_text_and_never_errors() {
        let config = Config {
            cv_path: "definitely/not/here/cv.txt".to_string(),
            ..Config::default()
        };
        let app = create_router(AppState::new(&config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain;charset=UTF-8"
        );
        assert!(body_string(response).await.contains("not found"));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/mission")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn parallel_status_requests_are_each_valid() {
        let app = test_router();

        let responses = futures::future::join_all((0..16).map(|_| {
            app.clone().oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
        }))
        .await;

        for response in responses {
            let response = response.unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(body["status"], "ONLINE");

            let load = body["server_load"].as_str().unwrap();
            let value: f64 = load.strip_suffix('%').unwrap().parse().unwrap();
            assert!((0.0..100.0).contains(&value));
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
