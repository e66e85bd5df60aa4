//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 데이터베이스 계층에서
//! 발생한 오류를 일관된 형태로 전달합니다.
//!
//! 카탈로그 서비스의 에러는 두 갈래뿐입니다.
//!
//! - **데이터베이스 작업 실패** (연결, ping, 조회): 로그로 남기고
//!   상품 목록은 [`AppError::RequestFailed`] 로 바꿔 500, 헬스체크는 503 으로 응답합니다.
//! - **시작 시 연결 실패**: 로그만 남기고 프로세스는 계속 실행됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn load(store: &dyn DocumentStore) -> AppResult<Vec<Product>> {
//!     let docs = store.find_documents("products", None).await?;
//!     Ok(docs.into_iter().map(Product::from).collect())
//! }
//! ```

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// 내부 원인을 숨길 때 응답에 쓰는 기본 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 내부 문자열은 드라이버가 돌려준 메시지 그대로입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정값 누락/파싱 실패 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 클라이언트에 메시지를 그대로 노출하는 요청 실패 (500 Internal Server Error)
    #[error("{0}")]
    RequestFailed(String),
}

impl AppError {
    /// 접두어 없이 원인 메시지만 반환합니다.
    ///
    /// 헬스체크 실패 응답의 `mongodb.message` 에 사용됩니다.
    pub fn reason(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg)
            | AppError::RequestFailed(msg) => msg,
        }
    }

    /// 응답 본문에 실을 메시지. 드라이버/설정 오류 내용은 노출하지 않습니다.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::RequestFailed(msg) => msg,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// { "message": "Failed to fetch products" }
    /// ```
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.public_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_request_failed_exposes_message() {
        let (status, body) = body_json(AppError::RequestFailed("Failed to fetch products".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Failed to fetch products" }));
    }

    #[actix_web::test]
    async fn test_database_error_response_hides_driver_text() {
        let (status, body) = body_json(AppError::DatabaseError("connection refused".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }

    #[test]
    fn test_config_error_status() {
        let error = AppError::ConfigError("MONGO_USERNAME is not set".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_reason_strips_prefix() {
        let error = AppError::DatabaseError("server selection timeout".to_string());

        assert_eq!(error.reason(), "server selection timeout");
        assert_eq!(error.to_string(), "Database error: server selection timeout");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
