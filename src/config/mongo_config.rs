//! # MongoDB Configuration Module
//!
//! 카탈로그가 읽는 MongoDB 클러스터 접속 정보를 관리합니다.
//!
//! ## 환경 변수 설정
//!
//! ### Atlas 자격 증명 (기본 방식)
//! ```bash
//! export MONGO_USERNAME="catalog_reader"
//! export MONGO_PASSWORD="secret"
//! export CLUSTER_NAME="cluster0"
//! export APP_NAME="zeta-edge"
//! ```
//!
//! ### 전체 URI 직접 지정
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! ```
//!
//! `MONGODB_URI` 가 있으면 자격 증명 변수는 무시됩니다.

use std::env;

use crate::errors::{AppError, AppResult};

/// Atlas 클러스터 호스트 접미사 기본값
pub const DEFAULT_CLUSTER_DOMAIN: &str = "fouwysj.mongodb.net";
/// 드라이버에 보고할 애플리케이션 이름 기본값
pub const DEFAULT_APP_NAME: &str = "zeta-edge";
/// 카탈로그 데이터베이스 기본값
pub const DEFAULT_DATABASE_NAME: &str = "ZE_DB";
/// 상품 컬렉션 기본값
pub const DEFAULT_PRODUCTS_COLLECTION: &str = "products";

/// MongoDB 접속 설정
#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    /// 직접 지정된 연결 URI
    pub uri: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub cluster_name: Option<String>,
    pub cluster_domain: String,
    pub app_name: String,
    pub database_name: String,
    pub products_collection: String,
}

impl MongoConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = MongoConfig::from_lookup(|key| match key {
    ///     "MONGODB_URI" => Some("mongodb://localhost:27017".to_string()),
    ///     _ => None,
    /// });
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            uri: get("MONGODB_URI"),
            username: get("MONGO_USERNAME"),
            password: get("MONGO_PASSWORD"),
            cluster_name: get("CLUSTER_NAME"),
            cluster_domain: get("MONGO_CLUSTER_DOMAIN")
                .unwrap_or_else(|| DEFAULT_CLUSTER_DOMAIN.to_string()),
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            database_name: get("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            products_collection: get("PRODUCTS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_PRODUCTS_COLLECTION.to_string()),
        }
    }

    /// 드라이버에 넘길 연결 문자열을 만듭니다.
    ///
    /// 사용자 이름과 비밀번호는 퍼센트 인코딩됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - URI도 없고 자격 증명 중 하나라도 빠진 경우
    pub fn connection_uri(&self) -> AppResult<String> {
        if let Some(uri) = &self.uri {
            return Ok(uri.clone());
        }

        let require = |value: &Option<String>, key: &str| {
            value
                .clone()
                .ok_or_else(|| AppError::ConfigError(format!("{} is not set", key)))
        };

        let username = require(&self.username, "MONGO_USERNAME")?;
        let password = require(&self.password, "MONGO_PASSWORD")?;
        let cluster = require(&self.cluster_name, "CLUSTER_NAME")?;

        Ok(format!(
            "mongodb+srv://{}:{}@{}.{}/?appName={}",
            urlencoding::encode(&username),
            urlencoding::encode(&password),
            cluster,
            self.cluster_domain,
            urlencoding::encode(&self.app_name),
        ))
    }

    /// 로그에 남길 수 있도록 비밀번호를 가린 접속 대상 설명
    pub fn redacted_target(&self) -> String {
        match (&self.uri, &self.cluster_name) {
            (Some(_), _) => "MONGODB_URI".to_string(),
            (None, Some(cluster)) => format!("{}.{}", cluster, self.cluster_domain),
            (None, None) => "<unconfigured>".to_string(),
        }
    }
}
