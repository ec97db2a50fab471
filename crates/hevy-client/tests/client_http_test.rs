// ABOUTME: HTTP-level tests for HevyClient against a wiremock server
// ABOUTME: Verifies paths, pagination query, api-key header, request envelopes, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hevy_client::{ClientError, HevyApi, HevyClient, HevyClientConfig};
use hevy_core::models::{
    ExercisePayload, Keyed, Nullable, RoutineFolderPayload, SetPayload,
    WebhookSubscriptionPayload, WorkoutPayload,
};
use hevy_core::pagination::PageParams;
use serde_json::{json, Number, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> HevyClient {
    let config = HevyClientConfig::new(TEST_KEY).with_base_url(server.uri());
    HevyClient::with_http_client(config, reqwest::Client::new())
}

fn sample_workout() -> WorkoutPayload {
    WorkoutPayload {
        title: "Leg Day".to_owned(),
        description: "Squats".to_owned(),
        start_time: "2024-03-01T08:00:00Z".to_owned(),
        end_time: "2024-03-01T09:00:00Z".to_owned(),
        is_private: true,
        exercises: vec![ExercisePayload {
            exercise_template_id: "D04AC939".to_owned(),
            superset_id: Nullable::Null,
            notes: String::new(),
            sets: vec![SetPayload {
                set_type: "normal".to_owned(),
                weight_kg: Nullable::Value(Number::from(100)),
                reps: Nullable::Value(Number::from(5)),
                distance_meters: Nullable::Null,
                duration_seconds: Nullable::Null,
                custom_metric: Keyed::Present(Nullable::Null),
                rpe: Nullable::Null,
            }],
        }],
    }
}

#[tokio::test]
async fn test_get_workouts_sends_pagination_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .and(header("api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "page_count": 7,
            "workouts": [{"id": "w1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .get_workouts(PageParams::new(2, 5))
        .await
        .unwrap();
    assert_eq!(body["workouts"][0]["id"], "w1");
}

#[tokio::test]
async fn test_get_workout_by_id_encodes_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts/abc%20123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc 123"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .get_workout_by_id("abc 123")
        .await
        .unwrap();
    assert_eq!(body["id"], "abc 123");
}

#[tokio::test]
async fn test_create_workout_wraps_body_in_envelope() {
    let server = MockServer::start().await;
    let workout = sample_workout();
    Mock::given(method("POST"))
        .and(path("/v1/workouts"))
        .and(body_json(json!({ "workout": serde_json::to_value(&workout).unwrap() })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "w2"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).create_workout(&workout).await.unwrap();
    assert_eq!(body["id"], "w2");
}

#[tokio::test]
async fn test_update_workout_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/workouts/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "w1"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .update_workout("w1", &sample_workout())
        .await
        .unwrap();
    assert_eq!(body["id"], "w1");
}

#[tokio::test]
async fn test_routine_folder_operations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/routine_folders/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/routine_folders"))
        .and(body_json(json!({"routine_folder": {"title": "PPL"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 43, "title": "PPL"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let folder = client.get_routine_folder_by_id(42).await.unwrap();
    assert_eq!(folder["id"], 42);

    let created = client
        .create_routine_folder(&RoutineFolderPayload {
            title: "PPL".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(created["title"], "PPL");
}

#[tokio::test]
async fn test_exercise_template_list_uses_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercise_templates"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exercise_templates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .get_exercise_templates(PageParams::default())
        .await
        .unwrap();
    assert_eq!(body["exercise_templates"], json!([]));
}

#[tokio::test]
async fn test_webhook_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/webhook-subscription"))
        .and(body_json(json!({
            "webhook": {"url": "https://example.com/hook", "authToken": "tok"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "webhook2"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/webhook-subscription"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_webhook_subscription(&WebhookSubscriptionPayload {
            url: "https://example.com/hook".to_owned(),
            auth_token: "tok".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(created["id"], "webhook2");

    client.delete_webhook_subscription().await.unwrap();
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/webhook-subscription"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .get_webhook_subscription()
        .await
        .unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_workouts(PageParams::default())
        .await
        .unwrap_err();
    match err {
        ClientError::AuthenticationFailed {
            status_code,
            reason,
        } => {
            assert_eq!(status_code, 401);
            assert_eq!(reason, "invalid api key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/routine_folders"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "17"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_routine_folders(PageParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::RateLimitExceeded {
            retry_after_secs: 17
        }
    ));
}

#[tokio::test]
async fn test_not_found_and_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercise_templates/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_exercise_template_by_id("missing")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));

    let err = client.get_workout_by_id("broken").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::ApiError {
            status_code: 500,
            ..
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_workout_by_id("w1")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = HevyClientConfig::new(TEST_KEY).with_base_url("http://127.0.0.1:9");
    let client = HevyClient::with_http_client(config, reqwest::Client::new());

    let err = client.get_webhook_subscription().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
