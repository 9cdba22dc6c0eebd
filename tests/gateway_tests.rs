mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::{web, HttpResponse};
use filemyrti_portal::api::error::{LOCAL_BACKEND_DOWN_MESSAGE, TIMEOUT_MESSAGE};
use filemyrti_portal::api::{
    ApiResponse, ErrorKind, InMemoryTokenStore, RequestOptions, TokenStore,
};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};

use common::{client_for, refused_base_url, slow, spawn_backend, spawn_echo_backend};

async fn created() -> HttpResponse {
    HttpResponse::Created().json(json!({
        "success": true,
        "message": "Application submitted",
        "data": { "id": 42 }
    }))
}

async fn validation_failed() -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({
        "success": false,
        "message": "Validation failed",
        "errors": [
            { "field": "email", "message": "Email is invalid", "value": "not-an-email" },
            { "field": "password", "message": "Password is too short" }
        ]
    }))
}

async fn plain_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .content_type("text/plain")
        .body("Down for maintenance")
}

async fn empty_bad_gateway() -> HttpResponse {
    HttpResponse::BadGateway().finish()
}

async fn broken_json() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("{\"success\": tru")
}

async fn traced_not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .insert_header(("X-Request-ID", "req-abc-123"))
        .json(json!({ "success": false, "error": "Service not found" }))
}

async fn loose_envelope() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": "yes",
        "data": { "id": 7 },
        "errors": ["legacy string error"]
    }))
}

async fn validator_errors() -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({
        "success": false,
        "message": "Validation failed",
        "errors": [{ "path": "email", "msg": "invalid" }]
    }))
}

async fn plain_ok() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("pong")
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/rti-applications/public", web::post().to(created))
        .route("/api/auth/register", web::post().to(validation_failed))
        .route("/api/states/maintenance", web::get().to(plain_unavailable))
        .route("/api/states/gateway", web::get().to(empty_bad_gateway))
        .route("/api/states/broken", web::get().to(broken_json))
        .route("/api/services/missing", web::get().to(traced_not_found))
        .route("/api/services/slow", web::get().to(slow))
        .route("/api/states/loose", web::get().to(loose_envelope))
        .route("/api/auth/login", web::post().to(validator_errors))
        .route("/ping", web::get().to(plain_ok));
}

#[actix_web::test]
async fn created_response_is_returned_as_envelope() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().rti_applications_public();

    let response: ApiResponse = client
        .execute(&endpoint, RequestOptions::post(&json!({ "full_name": "Asha" })).unwrap())
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Application submitted"));
    assert_eq!(response.data.unwrap()["id"], 42);
}

#[actix_web::test]
async fn typed_data_deserializes() {
    #[derive(serde::Deserialize)]
    struct Created {
        id: i64,
    }

    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().rti_applications_public();

    let response: ApiResponse<Created> = client
        .execute(&endpoint, RequestOptions::post(&json!({})).unwrap())
        .await
        .unwrap();
    assert_eq!(response.data.map(|d| d.id), Some(42));
}

#[actix_web::test]
async fn validation_errors_are_kept() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().auth_register();

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::post(&json!({})).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::RemoteRejected);
    assert_eq!(err.status_code, 422);
    assert_eq!(err.message, "Validation failed");
    assert_eq!(err.field_errors().len(), 2);
    assert_eq!(err.field_errors()[0].field, "email");
    assert_eq!(err.field_errors()[0].value, Some(json!("not-an-email")));
    assert_eq!(err.response.as_ref().unwrap()["success"], false);
}

#[actix_web::test]
async fn plain_text_rejection_uses_body_text() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().state_by_slug("maintenance");

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::RemoteRejected);
    assert_eq!(err.status_code, 503);
    assert_eq!(err.message, "Down for maintenance");
}

#[actix_web::test]
async fn empty_rejection_uses_reason_phrase() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().state_by_slug("gateway");

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 502);
    assert_eq!(err.message, "API Error: Bad Gateway");
}

#[actix_web::test]
async fn broken_json_is_malformed_response() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().state_by_slug("broken");

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::MalformedResponse);
    assert_eq!(err.status_code, 0);
    assert!(err.message.starts_with("Request failed: "), "{}", err.message);
}

#[actix_web::test]
async fn non_json_success_is_message_only() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = format!("{}/ping", client.endpoints().base_url());

    let response: ApiResponse = client.execute(&endpoint, RequestOptions::get()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("pong"));
    assert!(response.data.is_none());
}

#[actix_web::test]
async fn request_id_and_error_key_are_surfaced() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().service_by_slug("missing");

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.status_code, 404);
    assert_eq!(err.message, "Service not found");
    assert_eq!(err.request_id.as_deref(), Some("req-abc-123"));
}

#[actix_web::test]
async fn slow_backend_times_out() {
    let base = spawn_backend(routes);
    let client = client_for(&base).with_timeout(Duration::from_millis(50));
    let endpoint = client.endpoints().service_by_slug("slow");

    let started = Instant::now();
    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.status_code, 408);
    assert_eq!(err.message, TIMEOUT_MESSAGE);
    assert!(started.elapsed() < Duration::from_millis(300));
}

#[actix_web::test]
async fn refused_loopback_reports_local_backend_down() {
    let client = client_for(&refused_base_url());
    let endpoint = client.endpoints().services();

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NetworkUnavailable);
    assert_eq!(err.status_code, 0);
    assert_eq!(err.message, LOCAL_BACKEND_DOWN_MESSAGE);
}

#[actix_web::test]
async fn bearer_token_follows_the_store() {
    let base = spawn_echo_backend();
    let tokens = Arc::new(InMemoryTokenStore::new());
    let client = client_for(&base).with_token_store(tokens.clone());

    let anonymous: ApiResponse = client.auth().profile().await.unwrap();
    assert_eq!(anonymous.data.unwrap()["authorization"], Value::Null);

    tokens.set("jwt-token");
    let signed_in: ApiResponse = client.auth().profile().await.unwrap();
    assert_eq!(signed_in.data.unwrap()["authorization"], "Bearer jwt-token");

    tokens.clear();
    assert_eq!(tokens.token(), None);
    let signed_out: ApiResponse = client.auth().profile().await.unwrap();
    assert_eq!(signed_out.data.unwrap()["authorization"], Value::Null);
}

#[actix_web::test]
async fn per_call_headers_override_defaults() {
    let base = spawn_echo_backend();
    let client = client_for(&base);
    let endpoint = client.endpoints().contact_public();

    let options = RequestOptions::json(Method::PUT, &json!({ "a": 1 }))
        .unwrap()
        .header(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("application/vnd.filemyrti+json"),
        );
    let response: ApiResponse = client.execute(&endpoint, options).await.unwrap();
    let data = response.data.unwrap();

    assert_eq!(data["method"], "PUT");
    assert_eq!(data["content_type"], "application/vnd.filemyrti+json");
    assert_eq!(data["body"], json!({ "a": 1 }));
}

#[actix_web::test]
async fn concurrent_calls_do_not_serialize() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().service_by_slug("slow");

    let started = Instant::now();
    let calls = (0..8).map(|_| client.execute::<Value>(&endpoint, RequestOptions::get()));
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert!(started.elapsed() < Duration::from_millis(8 * 300));
}

#[actix_web::test]
async fn loose_success_envelope_is_passed_through() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().state_by_slug("loose");

    let response: ApiResponse = client.execute(&endpoint, RequestOptions::get()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.data, Some(json!({ "id": 7 })));
    let errors = response.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "legacy string error");
    assert_eq!(response.raw["success"], "yes");
}

#[actix_web::test]
async fn validator_style_errors_survive_rejection() {
    let base = spawn_backend(routes);
    let client = client_for(&base);
    let endpoint = client.endpoints().auth_login();

    let err = client
        .execute::<Value>(&endpoint, RequestOptions::post(&json!({})).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::RemoteRejected);
    assert_eq!(err.status_code, 422);
    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field_errors()[0].field, "email");
    assert_eq!(err.field_errors()[0].message, "invalid");
}
