//! # 상품 리포지토리 구현
//!
//! 상품 컬렉션을 읽기 전용으로 조회합니다. 쓰기 경로는 없습니다.

use std::sync::Arc;

use crate::db::DocumentStore;
use crate::domain::entities::products::Product;
use crate::errors::AppResult;

/// 상품 컬렉션 리포지토리
///
/// 주입받은 [`DocumentStore`] 를 통해 설정된 컬렉션 하나만 조회합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = ProductRepository::new(store, "products");
/// let first_three = repo.find_all(Some(3)).await?;
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// 컬렉션 이름을 반환합니다.
    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    /// 컬렉션의 문서를 조회합니다.
    ///
    /// # 인자
    ///
    /// * `limit` - 결과 개수 상한. `None` 이면 전체 문서
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<Product>)` - 드라이버가 돌려준 순서 그대로의 상품 목록
    /// * `Err(AppError::DatabaseError)` - 조회 실패
    pub async fn find_all(&self, limit: Option<u64>) -> AppResult<Vec<Product>> {
        let limit = limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));
        let documents = self.store.find_documents(&self.collection, limit).await?;

        Ok(documents.into_iter().map(Product::from).collect())
    }
}
