#![allow(dead_code)]

use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use filemyrti_portal::api::{ApiClient, EndpointMap};
use serde_json::{json, Value};

/// Start a throwaway backend on an ephemeral loopback port and return its
/// base URL. Routes not registered by `configure` are answered by [`echo`].
pub fn spawn_backend<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || {
        App::new()
            .configure(configure.clone())
            .default_service(web::to(echo))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind mock backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

/// Backend without any special routes.
pub fn spawn_echo_backend() -> String {
    spawn_backend(|_cfg: &mut web::ServiceConfig| {})
}

/// Base URL of a loopback port nobody listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn client_for(base_url: &str) -> ApiClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client");
    ApiClient::with_http_client(http, EndpointMap::new(base_url))
        .with_timeout(Duration::from_secs(5))
}

/// Reflects the request back inside a success envelope.
pub async fn echo(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "method": req.method().as_str(),
            "path": req.path(),
            "query": req.query_string(),
            "authorization": header("authorization"),
            "content_type": header("content-type"),
            "body": parsed,
            "raw": String::from_utf8_lossy(&body),
        }
    }))
}

pub async fn slow(_req: HttpRequest) -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_millis(300)).await;
    HttpResponse::Ok().json(json!({ "success": true, "data": { "slow": true } }))
}
