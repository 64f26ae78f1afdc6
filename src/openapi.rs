use actix_web::{HttpResponse, web};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers.
///
/// # Endpoints
/// - Root: `GET /`
/// - Greeting: `GET /api/hello`
///
/// # Tags
/// 1. **Health**: liveness probe
/// 2. **Hello**: greeting endpoint
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::hello::hello,
    ),
    components(
        schemas(
            crate::models::health::RootStatus,
            crate::models::hello::HelloResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health monitoring endpoints"),
        (name = "Hello", description = "Greeting endpoints")
    ),
    info(
        description = "A simple API demonstrating a layered architecture",
        title = "Hello API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;

// The page links its assets relatively; the base element points them at `/docs/`
// so the same page works with and without the trailing slash.
async fn swagger_index(config: web::Data<Config<'static>>) -> HttpResponse {
    match utoipa_swagger_ui::serve("index.html", config.into_inner()) {
        Ok(Some(file)) => {
            let html = String::from_utf8_lossy(&file.bytes)
                .replacen("<head>", &format!("<head><base href=\"{DOCS_PATH}/\">"), 1);
            HttpResponse::Ok().content_type(file.content_type).body(html)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render Swagger UI");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Mounts `/openapi.json`, Swagger UI at `/docs` (assets under `/docs/`) and
/// ReDoc at `/redoc`.
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    let openapi = ApiDoc::openapi();

    cfg.service(
        web::resource(DOCS_PATH)
            .app_data(web::Data::new(Config::new([OPENAPI_JSON_PATH])))
            .route(web::get().to(swagger_index)),
    )
    .service(SwaggerUi::new(format!("{DOCS_PATH}/{{_:.*}}")).url(OPENAPI_JSON_PATH, openapi.clone()))
    .service(Redoc::with_url(REDOC_PATH, openapi));
}
