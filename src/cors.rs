use actix_cors::Cors;

/// Frontend origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    // docker compose service name
    "http://frontend:3000",
];

/// Cross-origin policy: the origins above, with credentials, any method and
/// any header.
pub fn cors() -> Cors {
    ALLOWED_ORIGINS
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::header, test, web};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_preflight_from_allowed_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/api/hello", web::get().to(ok)),
        )
        .await;

        for origin in ALLOWED_ORIGINS {
            let req = test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri("/api/hello")
                .insert_header((header::ORIGIN, origin))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert!(resp.status().is_success());
            assert_eq!(
                resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
                origin
            );
            assert_eq!(
                resp.headers()
                    .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                    .unwrap(),
                "true"
            );
            assert!(resp.headers().get(header::ACCESS_CONTROL_MAX_AGE).is_none());
        }
    }

    #[actix_web::test]
    async fn test_unknown_origin_not_allowed() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/api/hello", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/hello")
            .insert_header((header::ORIGIN, "http://evil.example:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
