//! # Application State
//!
//! 요청 처리에 필요한 모든 핸들을 하나로 묶어 `web::Data` 로 주입합니다.
//! 데이터베이스 핸들은 부트스트랩에서 한 번 만들어 명시적으로 소유하며,
//! 서버가 멈춘 뒤 [`AppState::shutdown`] 으로 해제합니다.
//!
//! ```text
//! main (acquire) ──▶ AppState ──▶ HttpServer workers (shared Arc)
//!                       │
//!                       └──▶ shutdown (release)
//! ```

use std::sync::Arc;

use crate::db::DocumentStore;
use crate::repositories::products::ProductRepository;
use crate::services::catalog::CatalogService;
use crate::services::health::HealthService;

/// 핸들러에 주입되는 애플리케이션 상태
///
/// 모든 필드는 `Arc` 기반이라 워커 간 복제 비용이 작습니다.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    pub catalog: CatalogService,
    pub health: HealthService,
}

impl AppState {
    /// 저장소 하나로 리포지토리와 서비스를 조립합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let store: Arc<dyn DocumentStore> = Arc::new(Database::connect(&config).await?);
    /// let state = AppState::new(store, &config.products_collection);
    /// ```
    pub fn new(store: Arc<dyn DocumentStore>, products_collection: &str) -> Self {
        let product_repo = Arc::new(ProductRepository::new(store.clone(), products_collection));

        Self {
            catalog: CatalogService::new(product_repo),
            health: HealthService::new(store.clone()),
            store,
        }
    }

    /// 데이터베이스 자원을 해제합니다.
    pub async fn shutdown(&self) {
        self.store.shutdown().await;
    }
}
