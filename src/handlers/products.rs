//! # Product Catalog HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/products` | 상품 목록 조회 (`?limit=N`) | 200 / 500 |

use actix_web::{get, web, HttpResponse};
use log::error;

use crate::core::AppState;
use crate::domain::dto::products::ProductListQuery;
use crate::errors::AppError;

/// 상품 조회 실패 시 응답 메시지
pub const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";

/// 상품 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/products?limit=<int>`
///
/// # 응답
///
/// - `200 OK` - 상품 문서 배열 (`limit` 이 0, 숫자 아님, 없음이면 전체)
/// - `500 Internal Server Error` - `{"message": "Failed to fetch products"}`
///
/// 타임아웃, 연결 끊김, 잘못된 쿼리 등 모든 조회 오류는 같은 응답으로 처리되며
/// 드라이버 오류 내용은 로그에만 남습니다.
///
/// # Examples
///
/// ```bash
/// curl "http://localhost:5000/api/products?limit=3"
/// ```
#[get("/api/products")]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
    let products = state
        .catalog
        .list_products(query.effective_limit())
        .await
        .map_err(|e| {
            error!("상품 목록 조회 실패: {}", e);
            AppError::RequestFailed(FETCH_PRODUCTS_FAILED.to_string())
        })?;

    Ok(HttpResponse::Ok().json(products))
}
