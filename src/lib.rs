//! 제타 엣지 상품 카탈로그 서비스
//!
//! MongoDB 상품 컬렉션을 읽기 전용으로 노출하는 작은 HTTP API 입니다.
//! 쓰기 경로, 인증, 페이지네이션은 없으며 결과 개수 제한 하나만 지원합니다.
//!
//! # Endpoints
//!
//! - `GET /` - 서버 기동 확인 문자열
//! - `GET /api/products?limit=N` - 상품 문서 배열
//! - `GET /health` - MongoDB ping, 지연 시간, 가동 시간, 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← CORS 허용 목록 + 라우트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 카탈로그 조회, 헬스체크
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 상품 컬렉션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← DocumentStore
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! 외부 호스트에 앱을 마운트하는 경우:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use zeta_edge_catalog::config::{CorsConfig, MongoConfig};
//! use zeta_edge_catalog::core::AppState;
//! use zeta_edge_catalog::db::Database;
//! use zeta_edge_catalog::routes::configure_app;
//!
//! let mongo = MongoConfig::from_env();
//! let database = Arc::new(Database::connect(&mongo).await?);
//! let state = web::Data::new(AppState::new(database, &mongo.products_collection));
//! let app = App::new().configure(configure_app(state, CorsConfig::allowed_origins()));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
