use crate::error::ApiError;
use crate::hello_service::HelloService;
use crate::models::HelloResponse;
use actix_web::{HttpResponse, get, web};

/// # Hello Endpoint
///
/// Returns a greeting together with the generation time and API version.
///
/// ## Responses
/// - **200 OK**: [`HelloResponse`]
/// - **500 Internal Server Error**: the greeting failed model validation
///
/// ## Example Response
/// ```json
/// {
///   "message": "Hello from Actix Web! 🚀",
///   "timestamp": "2025-12-26T10:00:00.123456Z",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting generated", body = HelloResponse),
        (status = 500, description = "Server error")
    ),
    tag = "Hello"
)]
#[get("/hello")]
pub async fn hello(service: web::Data<HelloService>) -> Result<HttpResponse, ApiError> {
    tracing::info!("Hello endpoint called");
    let response = service.generate_hello_response()?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(hello));
}
