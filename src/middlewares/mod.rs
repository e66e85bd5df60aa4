//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에 끼워 넣는 횡단 관심사를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### CORS 허용 목록 ([`cors::configure_cors`])
//! - 허용된 Origin 에만 `Access-Control-Allow-Origin` 응답
//! - 허용되지 않은 Origin 은 핸들러 도달 전 거절
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::App;
//! use crate::middlewares::configure_cors;
//!
//! App::new()
//!     .wrap(configure_cors(&CorsConfig::allowed_origins()))
//!     .configure(configure_all_routes)
//! ```

pub mod cors;

pub use cors::configure_cors;
