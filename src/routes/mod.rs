//! API 라우트 설정 모듈
//!
//! | Route | Method | 핸들러 |
//! |---|---|---|
//! | `/` | GET | [`handlers::root`] |
//! | `/api/products` | GET | [`handlers::products::list_products`] |
//! | `/health` | GET | [`handlers::health::health_check`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! // 자체 서버
//! let app = App::new().configure(configure_app(state, origins));
//!
//! // 외부 호스트에 마운트
//! host_app.configure(zeta_edge_catalog::routes::configure_app(state, origins));
//! ```

use actix_web::web;

use crate::core::AppState;
use crate::handlers;
use crate::middlewares::configure_cors;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::root)
        .service(handlers::products::list_products)
        .service(handlers::health::health_check);
}

/// 상태 주입, CORS 허용 목록, 라우트를 포함한 완성된 애플리케이션 구성
///
/// 리스닝을 생략하는 배포 형태에서 외부 호스트가 이 함수 하나로 앱을 마운트합니다.
/// 반환된 클로저는 워커마다 호출되어 CORS 미들웨어를 새로 만듭니다.
pub fn configure_app(
    state: web::Data<AppState>,
    allowed_origins: Vec<String>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(
            web::scope("")
                .wrap(configure_cors(&allowed_origins))
                .app_data(state.clone())
                .configure(configure_all_routes),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::config::CorsConfig;
    use crate::db::memory::MemoryStore;
    use crate::db::{DocumentStore, UnavailableStore};

    fn state_for(store: Arc<dyn DocumentStore>) -> web::Data<AppState> {
        web::Data::new(AppState::new(store, "products"))
    }

    fn origins() -> Vec<String> {
        CorsConfig::parse_origins(None)
    }

    async fn get_json(store: Arc<dyn DocumentStore>, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(configure_app(state_for(store), origins()))).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_root_returns_status_text() {
        let app = test::init_service(
            App::new().configure(configure_app(state_for(Arc::new(MemoryStore::new())), origins())),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"Zeta Edge server is running"));
    }

    #[actix_web::test]
    async fn test_products_without_limit_returns_all() {
        let (status, body) = get_json(Arc::new(MemoryStore::with_products("products", 5)), "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_products_with_limit() {
        let (status, body) = get_json(
            Arc::new(MemoryStore::with_products("products", 5)),
            "/api/products?limit=3",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], json!({ "_id": 0, "name": "product-0" }));
    }

    #[actix_web::test]
    async fn test_products_zero_or_invalid_limit_returns_all() {
        for uri in ["/api/products?limit=0", "/api/products?limit=abc", "/api/products?limit="] {
            let (status, body) = get_json(Arc::new(MemoryStore::with_products("products", 5)), uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body.as_array().unwrap().len(), 5, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_products_empty_collection() {
        let (status, body) = get_json(Arc::new(MemoryStore::new()), "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_products_repeated_calls_are_identical() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::with_products("products", 4));
        let app = test::init_service(App::new().configure(configure_app(state_for(store), origins()))).await;

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/api/products").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            bodies.push(body);
        }
        assert_eq!(bodies[0], bodies[1]);
    }

    #[actix_web::test]
    async fn test_products_database_failure() {
        let (status, body) = get_json(
            Arc::new(MemoryStore::failing("server selection timeout")),
            "/api/products?limit=2",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Failed to fetch products" }));
    }

    #[actix_web::test]
    async fn test_health_up() {
        let (status, body) = get_json(Arc::new(MemoryStore::new()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mongodb"]["ok"], true);
        assert_eq!(body["mongodb"]["message"], "MongoDB is reachable");
        assert!(body["mongodb"]["latencyMs"].as_u64().is_some());
        assert!(body["uptimeSeconds"].as_u64().is_some());
        assert!(body["memory"].is_object());
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[actix_web::test]
    async fn test_health_down() {
        let (status, body) = get_json(Arc::new(MemoryStore::failing("connection refused")), "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "down");
        assert_eq!(body["mongodb"], json!({ "ok": false, "message": "connection refused" }));
        assert!(body.get("memory").is_none());
        assert!(body.get("uptimeSeconds").is_none());
    }

    #[actix_web::test]
    async fn test_degraded_startup_serves_failures() {
        let store: Arc<dyn DocumentStore> = Arc::new(UnavailableStore::new("CLUSTER_NAME is not set"));

        let (status, _) = get_json(store.clone(), "/api/products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = get_json(store, "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["mongodb"]["message"], "CLUSTER_NAME is not set");
    }

    #[actix_web::test]
    async fn test_cors_allow_list() {
        let app = test::init_service(
            App::new().configure(configure_app(state_for(Arc::new(MemoryStore::new())), origins())),
        )
        .await;

        let allowed = test::TestRequest::get()
            .uri("/api/products")
            .insert_header((header::ORIGIN, "https://zeta-edge-server.vercel.app"))
            .to_request();
        let resp = test::call_service(&app, allowed).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://zeta-edge-server.vercel.app"
        );

        let denied = test::TestRequest::get()
            .uri("/api/products")
            .insert_header((header::ORIGIN, "https://unknown.example"))
            .to_request();
        let resp = test::call_service(&app, denied).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
