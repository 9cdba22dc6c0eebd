use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod catalog;
pub mod config;
pub mod documents;
pub mod state;

pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::catalog::routes::list_states,
        crate::catalog::routes::get_state,
        crate::catalog::routes::list_departments,
        crate::documents::routes::resolve_document,
        crate::api::routes::backend_health
    ),
    components(
        schemas(
            catalog::StateProfile,
            catalog::StateHero,
            catalog::StateFaq,
            catalog::ProcessStep,
            catalog::DepartmentSection,
            documents::Jurisdiction,
            documents::DepartmentId,
            documents::routes::DocumentLookup,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Catalog", description = "State profiles and department listings."),
        (name = "Documents", description = "Department to RTI template resolution."),
        (name = "Backend", description = "Backend reachability.")
    )
)]
pub struct ApiDoc;

/// Register every `/api` route on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(catalog::routes::config)
            .configure(documents::routes::config)
            .configure(api::routes::config),
    );
}

/// Log what the static tables contain and which listed departments have no
/// template.
fn log_catalog_summary() {
    log::info!(
        "Loaded {} department templates and {} state profiles",
        documents::registry().len(),
        catalog::all_states().len()
    );
    for state in catalog::all_states() {
        let missing = documents::audit_labels(state.departments.iter().map(String::as_str));
        if !missing.is_empty() {
            log::warn!(
                "{}: {} of {} listed departments have no RTI template",
                state.slug,
                missing.len(),
                state.departments.len()
            );
            log::debug!("{}: no template for {:?}", state.slug, missing);
        }
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new(config.clone()) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to build backend client: {}", e);
            std::process::exit(1);
        }
    };

    log_catalog_summary();

    let prometheus = PrometheusMetricsBuilder::new("filemyrti_portal")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "Starting catalog server at http://{}:{} (backend {})",
        config.host,
        config.port,
        config.api_base_url
    );

    let assets_dir = config.assets_dir.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(configure_api)
            .service(actix_files::Files::new("/assets", assets_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
