//! 테스트용 인메모리 문서 저장소

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mongodb::bson::{doc, Document};

use super::DocumentStore;
use crate::errors::{AppError, AppResult};

/// 컬렉션별 문서를 메모리에 보관하는 저장소
///
/// `failing` 으로 만들면 모든 작업이 드라이버 오류처럼 실패합니다.
#[derive(Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Document>>,
    failure: Option<String>,
    pings: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// `{ _id: i, name: "product-i" }` 형태의 문서 `count` 개로 컬렉션을 채웁니다.
    pub fn with_products(collection: &str, count: usize) -> Self {
        let docs: Vec<Document> = (0..count)
            .map(|i| doc! { "_id": i as i64, "name": format!("product-{}", i) })
            .collect();

        Self {
            collections: HashMap::from([(collection.to_string(), docs)]),
            ..Self::default()
        }
    }

    pub fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        match &self.failure {
            Some(reason) => Err(AppError::DatabaseError(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    async fn find_documents(&self, collection: &str, limit: Option<i64>) -> AppResult<Vec<Document>> {
        self.check()?;

        let docs = self.collections.get(collection).cloned().unwrap_or_default();

        Ok(match limit {
            Some(limit) => docs.into_iter().take(limit.unsigned_abs() as usize).collect(),
            None => docs,
        })
    }
}
