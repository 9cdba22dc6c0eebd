use actix_web::{web, HttpResponse, Responder};

use crate::{AppState, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/catalog/backend-health",
    tag = "Backend",
    responses(
        (status = 200, description = "Health document reported by the backend"),
        (status = 502, description = "Backend unreachable", body = ErrorResponse)
    )
)]
pub async fn backend_health(state: web::Data<AppState>) -> impl Responder {
    match state.api.health().check().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("BadGateway", &e.message))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/catalog/backend-health").route(web::get().to(backend_health)));
}
