//! # Domain Layer Module
//!
//! 카탈로그 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 상품 문서 (스키마 없음, 읽기 전용)
//! └── DTOs          - 쿼리 파라미터, 헬스체크 응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
