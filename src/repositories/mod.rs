//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 생성 시점에 [`DocumentStore`](crate::db::DocumentStore) 를
//! 주입받으며, 전역 인스턴스를 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::products::ProductRepository;
//!
//! let repo = ProductRepository::new(store.clone(), "products");
//! let products = repo.find_all(None).await?;
//! ```

pub mod products;
