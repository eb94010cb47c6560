use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez, readyz},
        rsvps::{
            create_rsvp, delete_rsvp, get_rsvp, list_rsvps, update_rsvp, update_rsvp_from_body,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let rsvp_routes = Router::new()
        .route(
            "/rsvps",
            get(list_rsvps).post(create_rsvp).put(update_rsvp_from_body),
        )
        .route(
            "/rsvps/{id}",
            get(get_rsvp).put(update_rsvp).delete(delete_rsvp),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .route("/healthz", get(healthz))
        .merge(rsvp_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use rsvp_core::rsvp::Rsvp;

    use crate::state::test_support::TestRepository;

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap().status()
    }

    async fn create(app: &Router, name: &str, total: i32) -> Rsvp {
        let (status, body) = send(
            app,
            "POST",
            "/rsvps",
            Some(json!({ "guestName": name, "totalAttending": total })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    fn app_with_repo() -> (Router, Arc<TestRepository>) {
        let repo = Arc::new(TestRepository::default());
        let app = create_app(AppState::with_test_repository(repo.clone()));
        (app, repo)
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let (status, _) = send(&app, "GET", "/livez", None).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_reports_store_health() {
        let (app, repo) = app_with_repo();

        let (status, body) = send(&app, "GET", "/readyz", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["healthy"], true);

        repo.unavailable.store(true, Ordering::SeqCst);
        let (status, body) = send(&app, "GET", "/readyz", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["healthy"], false);
    }

    #[tokio::test]
    async fn test_healthz_counts_cached_rsvps() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;

        let (_, body) = send(&app, "GET", "/healthz", None).await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["cachedRsvps"], 0);

        send(&app, "GET", &format!("/rsvps/{}", created.id), None).await;

        let (status, body) = send(&app, "GET", "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["cachedRsvps"], 1);
    }

    #[tokio::test]
    async fn test_list_rsvps_empty() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "GET", "/rsvps", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert!(json.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let app = create_app(AppState::default());

        let created = create(&app, "John Doe", 2).await;
        assert_eq!(created.guest_name, "John Doe");
        assert_eq!(created.total_attending, 2);

        let (status, body) = send(&app, "GET", &format!("/rsvps/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            "POST",
            "/rsvps",
            Some(json!({ "id": 999, "guestName": "Jane", "totalAttending": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_ne!(created.id, 999);
    }

    #[tokio::test]
    async fn test_response_uses_camel_case_fields() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;

        let (_, body) = send(&app, "GET", &format!("/rsvps/{}", created.id), None).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["guestName"], "John Doe");
        assert_eq!(json["totalAttending"], 2);
        assert_eq!(json["id"], created.id);
    }

    #[tokio::test]
    async fn test_get_nonexistent_rsvp() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, "GET", "/rsvps/4242", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(String::from_utf8(body).unwrap().contains("4242"));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = create_app(AppState::default());

        let (status, _) = send(&app, "GET", "/rsvps/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", "/rsvps/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_get_hits_cache() {
        let (app, repo) = app_with_repo();
        let created = create(&app, "John Doe", 2).await;
        let uri = format!("/rsvps/{}", created.id);

        send(&app, "GET", &uri, None).await;
        send(&app, "GET", &uri, None).await;
        send(&app, "GET", &uri, None).await;

        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_all_bypasses_cache() {
        let (app, repo) = app_with_repo();
        let a = create(&app, "A", 1).await;
        let b = create(&app, "B", 2).await;
        send(&app, "GET", &format!("/rsvps/{}", a.id), None).await;
        send(&app, "GET", &format!("/rsvps/{}", b.id), None).await;

        let (_, first) = send(&app, "GET", "/rsvps", None).await;
        let (_, second) = send(&app, "GET", "/rsvps", None).await;

        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 2);
        let all: Vec<Rsvp> = serde_json::from_slice(&first).unwrap();
        assert_eq!(all, vec![a, b]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_is_visible_to_next_get() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;
        let uri = format!("/rsvps/{}", created.id);

        // Warm the cache with the old value
        let (_, body) = send(&app, "GET", &uri, None).await;
        let before: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_eq!(before.guest_name, "John Doe");

        let (status, body) = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "guestName": "NEW NAME", "totalAttending": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let returned: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_eq!(returned, Rsvp::new(created.id, "NEW NAME", 2));

        let (_, body) = send(&app, "GET", &uri, None).await;
        let after: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_eq!(after.guest_name, "NEW NAME");
        assert_eq!(after.total_attending, 2);
    }

    #[tokio::test]
    async fn test_update_with_id_in_body() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;

        let (status, _) = send(
            &app,
            "PUT",
            "/rsvps",
            Some(json!({ "id": created.id, "guestName": "Jane", "totalAttending": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", &format!("/rsvps/{}", created.id), None).await;
        let after: Rsvp = serde_json::from_slice(&body).unwrap();
        assert_eq!(after, Rsvp::new(created.id, "Jane", 3));
    }

    #[tokio::test]
    async fn test_update_without_any_id_is_bad_request() {
        let app = create_app(AppState::default());

        let (status, _) = send(
            &app,
            "PUT",
            "/rsvps",
            Some(json!({ "guestName": "Jane", "totalAttending": 3 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_with_mismatched_ids_is_bad_request() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/rsvps/{}", created.id),
            Some(json!({ "id": created.id + 1, "guestName": "Jane", "totalAttending": 3 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let app = create_app(AppState::default());

        let (status, _) = send(
            &app,
            "PUT",
            "/rsvps/31337",
            Some(json!({ "guestName": "Nobody", "totalAttending": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, "GET", "/rsvps", None).await;
        let all: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let app = create_app(AppState::default());
        let created = create(&app, "John Doe", 2).await;
        let uri = format!("/rsvps/{}", created.id);

        // Warm the cache so a stale hit would show
        send(&app, "GET", &uri, None).await;

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Deleting again still succeeds
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_store() {
        let (app, repo) = app_with_repo();

        let invalid_bodies = [
            json!({ "totalAttending": 2 }),
            json!({ "guestName": "   ", "totalAttending": 2 }),
            json!({ "guestName": "x".repeat(51), "totalAttending": 2 }),
            json!({ "guestName": "John" }),
            json!({ "guestName": "John", "totalAttending": -1 }),
        ];

        for body in invalid_bodies {
            let (status, _) = send(&app, "POST", "/rsvps", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        }

        assert_eq!(repo.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_guest_name_of_fifty_chars_is_accepted() {
        let app = create_app(AppState::default());

        let created = create(&app, &"é".repeat(50), 1).await;

        assert_eq!(created.guest_name.chars().count(), 50);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = create_app(AppState::default());

        assert_eq!(
            send_raw(&app, "POST", "/rsvps", "{not json").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, "POST", "/rsvps", r#"{"guestName":"A","totalAttending":"two"}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, "PUT", "/rsvps/1", "[]").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_store_outage_is_service_unavailable() {
        let (app, repo) = app_with_repo();
        let created = create(&app, "John Doe", 2).await;
        repo.unavailable.store(true, Ordering::SeqCst);

        let (status, _) = send(&app, "GET", &format!("/rsvps/{}", created.id), None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = send(&app, "GET", "/rsvps", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        // Nothing was cached from the failed read
        repo.unavailable.store(false, Ordering::SeqCst);
        let (_, body) = send(&app, "GET", "/healthz", None).await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["cachedRsvps"], 0);
    }
}
