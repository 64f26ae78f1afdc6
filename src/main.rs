use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use hello_api::config::Settings;
use hello_api::cors::cors;
use hello_api::hello_service::HelloService;
use hello_api::models::DEFAULT_API_VERSION;
use hello_api::telemetry::init_logging;

/// Hello API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Root health check and greeting endpoints
/// - Swagger UI, ReDoc and the raw OpenAPI document
/// - CORS for the local frontend origins
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Health: `/`
/// - Greeting: `/api/hello`
/// - Swagger UI: `/docs/`
/// - ReDoc: `/redoc`
/// - OpenAPI spec: `/openapi.json`
///
/// # Configuration
/// - Binds to `0.0.0.0:8000` unless `HELLO_API_HOST` / `HELLO_API_PORT` are set
/// - Log filter from `RUST_LOG`, default `info`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let settings = Settings::from_env()?;
    let service = Data::new(HelloService::new(DEFAULT_API_VERSION));

    tracing::info!("Starting Hello API application");
    tracing::info!("API documentation available at /docs");

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(hello_api::routes::configure)
    })
    .bind(settings.bind_addr())?
    .run()
    .await;

    tracing::info!("Shutting down Hello API application");
    result
}
