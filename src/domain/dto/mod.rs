//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//!
//! - [`products`] - 상품 목록 쿼리 파라미터
//! - [`health`] - 헬스체크 응답 본문

pub mod products;
pub mod health;
