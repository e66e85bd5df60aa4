//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - [`catalog`] - 상품 목록 조회 (선택적 개수 제한)
//! - [`health`] - 데이터베이스 ping 및 프로세스 상태 보고
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{catalog::CatalogService, health::HealthService};
//!
//! let products = catalog.list_products(Some(10)).await?;
//! let report = health.check().await;
//! ```

pub mod catalog;
pub mod health;
