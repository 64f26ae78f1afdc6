use actix_web::web;

/// # Root Health Check
///
/// `GET /` answers 200 with a static status object pointing at `/docs`.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "Hello API is running!",
///   "docs": "/docs"
/// }
/// ```
pub mod health;

/// # Hello Endpoint
///
/// `GET /api/hello` returns a greeting, the generation time and the API
/// version. Needs a [`HelloService`] registered as app data.
///
/// [`HelloService`]: crate::hello_service::HelloService
pub mod hello;

/// # API Route Configuration
///
/// ## Mounted Services
/// - Root health check (see [`health::configure_routes`])
/// - Greeting under `/api` (see [`hello::configure_routes`])
/// - Documentation (see [`configure_docs`])
///
/// ## Endpoints
///
/// ```text
/// GET /              - Service health status
/// GET /api/hello     - Greeting
/// GET /docs/         - Swagger UI
/// GET /redoc         - ReDoc
/// GET /openapi.json  - OpenAPI document
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`hello::configure_routes`]: crate::routes::hello::configure_routes
/// [`configure_docs`]: crate::openapi::configure_docs
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    hello::configure_routes(cfg);
    crate::openapi::configure_docs(cfg);
}
