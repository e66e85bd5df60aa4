//! 상품 데이터 액세스 계층
//!
//! [`ProductRepository`](product_repo::ProductRepository) 가 상품 컬렉션을 조회합니다.

pub mod product_repo;

pub use product_repo::ProductRepository;
