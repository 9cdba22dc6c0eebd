use actix_web::{web, HttpResponse, Responder};

use crate::catalog::{self, DepartmentSection, StateProfile};
use crate::documents::Jurisdiction;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/catalog/states",
    tag = "Catalog",
    responses(
        (status = 200, description = "All supported states", body = Vec<StateProfile>)
    )
)]
pub async fn list_states() -> impl Responder {
    HttpResponse::Ok().json(catalog::all_states())
}

#[utoipa::path(
    get,
    path = "/api/catalog/states/{slug}",
    tag = "Catalog",
    params(
        ("slug" = String, Path, description = "State slug, case-insensitive")
    ),
    responses(
        (status = 200, description = "State profile", body = StateProfile),
        (status = 404, description = "Unknown state", body = ErrorResponse)
    )
)]
pub async fn get_state(path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match catalog::lookup_state(&slug) {
        Some(state) => HttpResponse::Ok().json(state),
        None => HttpResponse::NotFound()
            .json(ErrorResponse::not_found(&format!("State '{}' not found", slug))),
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog/departments/{jurisdiction}",
    tag = "Catalog",
    params(
        ("jurisdiction" = String, Path, description = "delhi, karnataka or goa")
    ),
    responses(
        (status = 200, description = "Departments grouped by category", body = Vec<DepartmentSection>),
        (status = 404, description = "Unknown jurisdiction", body = ErrorResponse)
    )
)]
pub async fn list_departments(path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    match Jurisdiction::from_slug(&raw) {
        Some(jurisdiction) => HttpResponse::Ok().json(catalog::department_sections(jurisdiction)),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Jurisdiction '{}' not found",
            raw
        ))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/catalog/states").route(web::get().to(list_states)))
        .service(web::resource("/catalog/states/{slug}").route(web::get().to(get_state)))
        .service(
            web::resource("/catalog/departments/{jurisdiction}")
                .route(web::get().to(list_departments)),
        );
}
