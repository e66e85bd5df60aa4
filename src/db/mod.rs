//! Database Connection Management Module
//!
//! MongoDB 연결 관리를 담당하는 모듈입니다.
//! 프로세스가 살아 있는 동안 하나의 클라이언트를 공유하며, 드라이버의
//! 기본 커넥션 풀이 동시 요청을 다중화합니다. 이 계층은 별도의 잠금,
//! 재시도, 타임아웃을 추가하지 않습니다.
//!
//! 상위 계층은 [`DocumentStore`] trait 에만 의존합니다.
//!
//! - [`Database`] - 실제 MongoDB 클라이언트
//! - [`UnavailableStore`] - 시작 시 클라이언트를 만들지 못했을 때 주입되는 저장소
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::MongoConfig;
//! use crate::db::{Database, DocumentStore};
//!
//! let database = Database::connect(&MongoConfig::from_env()).await?;
//! let store: Arc<dyn DocumentStore> = Arc::new(database);
//! store.ping().await?;
//! ```

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::{options::ClientOptions, Client};

use crate::config::MongoConfig;
use crate::errors::{AppError, AppResult};

/// 생존 확인 명령을 보낼 데이터베이스
pub const ADMIN_DATABASE: &str = "admin";

/// 문서 저장소 추상화
///
/// 핸들러와 서비스는 구체 드라이버 대신 이 trait 을 주입받습니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 저장소 이름 (로그 용도)
    fn name(&self) -> &str;

    /// `admin` 데이터베이스에 `{ ping: 1 }` 명령을 보냅니다.
    async fn ping(&self) -> AppResult<()>;

    /// 컬렉션의 모든 문서를 조회합니다.
    ///
    /// `limit` 이 주어지면 드라이버의 limit 으로 전달합니다. 순서는 보장하지 않습니다.
    async fn find_documents(&self, collection: &str, limit: Option<i64>) -> AppResult<Vec<Document>>;

    /// 연결 자원을 해제합니다.
    async fn shutdown(&self) {}
}

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB 클라이언트를 생성합니다.
    ///
    /// 드라이버는 연결을 지연 생성하므로 이 단계에서는 URI 해석과 클라이언트
    /// 구성만 수행합니다. 실제 도달 가능 여부는 [`DocumentStore::ping`] 으로 확인합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&MongoConfig::from_env()).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 자격 증명이 누락된 경우
    /// * `AppError::DatabaseError` - URI 해석 또는 클라이언트 생성 실패
    pub async fn connect(config: &MongoConfig) -> AppResult<Self> {
        let uri = config.connection_uri()?;

        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&uri).await?;
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        info!("📡 MongoDB 클라이언트 생성: {}", config.redacted_target());

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

#[async_trait]
impl DocumentStore for Database {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn ping(&self) -> AppResult<()> {
        self.client
            .database(ADMIN_DATABASE)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn find_documents(&self, collection: &str, limit: Option<i64>) -> AppResult<Vec<Document>> {
        let collection = self.get_database().collection::<Document>(collection);

        let mut find = collection.find(doc! {});
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let cursor = find.await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn shutdown(&self) {
        info!("🔌 MongoDB 연결 종료중...");
        self.client.clone().shutdown().await;
    }
}

/// 시작 시 클라이언트 생성에 실패했을 때 주입되는 저장소
///
/// 서버는 그대로 기동되며, 데이터베이스를 건드리는 모든 요청은
/// 보관된 사유와 함께 실패합니다.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn failure(&self) -> AppError {
        AppError::DatabaseError(self.reason.clone())
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn ping(&self) -> AppResult<()> {
        Err(self.failure())
    }

    async fn find_documents(&self, _collection: &str, _limit: Option<i64>) -> AppResult<Vec<Document>> {
        Err(self.failure())
    }
}
