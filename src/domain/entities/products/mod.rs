//! Products Entity Module
//!
//! 카탈로그 상품 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::products::Product;
//!
//! let product = Product::from(doc! { "name": "Edge Router" });
//! let body = serde_json::to_string(&product)?;
//! ```

pub mod product;

pub use product::Product;
