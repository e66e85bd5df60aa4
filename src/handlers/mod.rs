//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로, 결과를 HTTP 응답으로 변환하는 무상태 핸들러들입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Frontend)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 카탈로그 조회, 헬스체크               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 상품 컬렉션                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore - MongoDB                      ← Infrastructure
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - [`root`] - `GET /` 상태 문자열
//! - [`products`] - `GET /api/products`
//! - [`health`] - `GET /health`

use actix_web::{get, HttpResponse};

pub mod products;
pub mod health;

/// `GET /` 응답 본문
pub const ROOT_MESSAGE: &str = "Zeta Edge server is running";

/// 서버 기동 여부를 알리는 고정 문자열을 반환합니다.
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ROOT_MESSAGE)
}
