//! # 카탈로그 조회 서비스
//!
//! "상품 목록을 최대 N 개까지" 라는 단일 질의에 답합니다.

use std::sync::Arc;

use log::debug;

use crate::domain::entities::products::Product;
use crate::errors::AppResult;
use crate::repositories::products::ProductRepository;

/// 상품 카탈로그 서비스
#[derive(Clone)]
pub struct CatalogService {
    product_repo: Arc<ProductRepository>,
}

impl CatalogService {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 상품 목록을 조회합니다.
    ///
    /// `limit` 이 `Some(n)` 이면 최대 n 개, `None` 이면 컬렉션 전체를 반환합니다.
    /// 순서는 데이터베이스가 돌려준 그대로입니다.
    pub async fn list_products(&self, limit: Option<u64>) -> AppResult<Vec<Product>> {
        let products = self.product_repo.find_all(limit).await?;

        debug!(
            "상품 {}개 조회 (collection={}, limit={:?})",
            products.len(),
            self.product_repo.collection_name(),
            limit
        );

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;

    fn service_with(count: usize) -> CatalogService {
        let store = Arc::new(MemoryStore::with_products("products", count));
        CatalogService::new(Arc::new(ProductRepository::new(store, "products")))
    }

    #[actix_web::test]
    async fn test_list_products_limited() {
        let service = service_with(5);

        let products = service.list_products(Some(3)).await.unwrap();
        assert_eq!(products.len(), 3);
    }

    #[actix_web::test]
    async fn test_list_products_is_idempotent() {
        let service = service_with(4);

        let first = service.list_products(None).await.unwrap();
        let second = service.list_products(None).await.unwrap();
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_list_products_empty_collection() {
        let service = service_with(0);

        assert!(service.list_products(None).await.unwrap().is_empty());
    }
}
