mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use filemyrti_portal::catalog::{DepartmentSection, StateProfile};
use filemyrti_portal::config::PortalConfig;
use filemyrti_portal::documents::routes::DocumentLookup;
use filemyrti_portal::documents::{DepartmentId, Jurisdiction};
use filemyrti_portal::{configure_api, AppState, ErrorResponse};
use serde_json::json;

use common::{client_for, refused_base_url, spawn_backend};

fn state_for(base_url: &str) -> web::Data<AppState> {
    web::Data::new(AppState::with_client(
        PortalConfig::default(),
        client_for(base_url),
    ))
}

#[actix_web::test]
async fn lists_state_profiles() {
    let app = test::init_service(
        App::new()
            .app_data(state_for(&refused_base_url()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/catalog/states").to_request();
    let states: Vec<StateProfile> = test::call_and_read_body_json(&app, req).await;
    let slugs: Vec<&str> = states.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, ["karnataka", "goa"]);
}

#[actix_web::test]
async fn state_lookup_is_case_insensitive() {
    let app = test::init_service(
        App::new()
            .app_data(state_for(&refused_base_url()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/catalog/states/GOA").to_request();
    let goa: StateProfile = test::call_and_read_body_json(&app, req).await;
    assert_eq!(goa.slug, "goa");
    assert_eq!(goa.name, "Goa");

    let req = test::TestRequest::get().uri("/api/catalog/states/kerala").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "NotFound");
    assert!(body.message.contains("kerala"));
}

#[actix_web::test]
async fn department_sections_by_jurisdiction() {
    let app = test::init_service(
        App::new()
            .app_data(state_for(&refused_base_url()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/departments/goa")
        .to_request();
    let sections: Vec<DepartmentSection> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sections.len(), 13);
    assert_eq!(sections[0].category, "RTI Goa Police & Security");
    assert_eq!(sections[0].items[0], "RTI Goa Home Department");
    assert_eq!(sections.iter().map(|s| s.items.len()).sum::<usize>(), 78);

    let req = test::TestRequest::get()
        .uri("/api/catalog/departments/Delhi")
        .to_request();
    let sections: Vec<DepartmentSection> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sections.iter().map(|s| s.items.len()).sum::<usize>(), 54);

    let req = test::TestRequest::get()
        .uri("/api/catalog/departments/kerala")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn document_lookup_by_label() {
    let app = test::init_service(
        App::new()
            .app_data(state_for(&refused_base_url()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/documents?label=RTI%20Goa%20Home%20Department")
        .to_request();
    let lookup: DocumentLookup = test::call_and_read_body_json(&app, req).await;
    assert_eq!(lookup.jurisdiction, Jurisdiction::Goa);
    assert_eq!(
        lookup.department_id,
        Some(DepartmentId::from_label("RTI Goa Home Department"))
    );
    assert_eq!(
        lookup.path.as_deref(),
        Some("/assets/PDF/RTI Templates For Goa State/RTI Goa Police & Security/RTI Template for Goa Home Department.pdf")
    );

    let req = test::TestRequest::get()
        .uri("/api/catalog/documents?label=Karnataka%20Lokayukta")
        .to_request();
    let lookup: DocumentLookup = test::call_and_read_body_json(&app, req).await;
    assert_eq!(lookup.jurisdiction, Jurisdiction::Karnataka);
    assert_eq!(lookup.department_id, None);
    assert_eq!(lookup.path, None);

    let req = test::TestRequest::get()
        .uri("/api/catalog/documents?label=%20%20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

async fn healthy() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[actix_web::test]
async fn backend_health_passes_through() {
    let base = spawn_backend(|cfg: &mut web::ServiceConfig| {
        cfg.route("/health", web::get().to(healthy));
    });
    let app = test::init_service(
        App::new()
            .app_data(state_for(&base))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/backend-health")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn backend_health_reports_bad_gateway() {
    let app = test::init_service(
        App::new()
            .app_data(state_for(&refused_base_url()))
            .configure(configure_api),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/backend-health")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "BadGateway");
    assert_eq!(body.message, "Backend server is not reachable");
}

#[actix_web::test]
async fn error_response_shapes() {
    let not_found = ErrorResponse::not_found("missing");
    assert_eq!(not_found.error, "NotFound");
    assert_eq!(not_found.message, "missing");
    assert!(chrono::DateTime::parse_from_rfc3339(&not_found.timestamp).is_ok());

    assert_eq!(ErrorResponse::bad_request("nope").error, "BadRequest");
}
