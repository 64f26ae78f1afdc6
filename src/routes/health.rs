use crate::models::RootStatus;
use actix_web::{HttpResponse, Responder, get};

/// # Root Health Check
///
/// Static liveness probe. Always answers 200 with a pointer to the docs.
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
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootStatus)
    ),
    tag = "Health"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootStatus::healthy())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
