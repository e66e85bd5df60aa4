//! Domain Entities Module
//!
//! 카탈로그 서비스가 다루는 도메인 엔티티를 모아둔 모듈입니다.
//! 현재는 외부 프로세스가 관리하는 상품 컬렉션을 읽기 전용으로 표현하는
//! [`products::Product`] 하나뿐입니다.

pub mod products;
