use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{registry, resolve_jurisdiction, DepartmentId, Jurisdiction};
use crate::ErrorResponse;

#[derive(Deserialize, Debug)]
pub struct DocumentQuery {
    pub label: String,
}

/// Resolution result for one label. `path` is absent when no template exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DocumentLookup {
    pub label: String,
    pub jurisdiction: Jurisdiction,
    pub department_id: Option<DepartmentId>,
    pub path: Option<String>,
}

impl DocumentLookup {
    pub fn for_label(label: &str) -> Self {
        let record = registry().by_label(label);
        Self {
            label: label.to_string(),
            jurisdiction: record
                .map(|r| r.jurisdiction)
                .unwrap_or_else(|| resolve_jurisdiction(label)),
            department_id: record.map(|r| r.id.clone()),
            path: record.map(|r| r.path.clone()),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog/documents",
    tag = "Documents",
    params(
        ("label" = String, Query, description = "Exact department label")
    ),
    responses(
        (status = 200, description = "Resolution result, path is null when no template exists", body = DocumentLookup),
        (status = 400, description = "Empty label", body = ErrorResponse)
    )
)]
pub async fn resolve_document(query: web::Query<DocumentQuery>) -> impl Responder {
    if query.label.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("label must not be empty"));
    }
    let lookup = DocumentLookup::for_label(&query.label);
    if lookup.path.is_none() {
        log::debug!("No template for department label {:?}", query.label);
    }
    HttpResponse::Ok().json(lookup)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/catalog/documents").route(web::get().to(resolve_document)));
}
