//! Product Entity Implementation
//!
//! 상품 컬렉션의 문서를 스키마 없이 그대로 감싸는 경계 타입입니다.
//! 필드 검증이나 변환 없이 조회 시점의 스냅샷을 그대로 전달합니다.

use mongodb::bson::{Bson, Document};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// 상품 엔티티
///
/// 구조는 컬렉션에 저장된 문서가 결정합니다. 이 서비스는 상품을
/// 읽기만 하며, 어떤 문서도 거부하지 않습니다.
///
/// JSON 직렬화 규칙:
///
/// | BSON | JSON |
/// |------|------|
/// | `ObjectId` | 24자리 hex 문자열 |
/// | `DateTime` | ISO-8601 문자열 |
/// | 중첩 문서/배열 | 재귀적으로 동일 규칙 적용 |
/// | 그 외 | relaxed extended JSON |
#[derive(Debug, Clone, PartialEq)]
pub struct Product(Document);

impl Product {
    /// JSON 값으로 변환합니다.
    pub fn to_json(&self) -> Value {
        document_to_json(&self.0)
    }
}

impl From<Document> for Product {
    fn from(document: Document) -> Self {
        Product(document)
    }
}

impl Serialize for Product {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

fn document_to_json(document: &Document) -> Value {
    let fields: Map<String, Value> = document
        .iter()
        .map(|(key, value)| (key.clone(), bson_to_json(value)))
        .collect();
    Value::Object(fields)
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(iso) => Value::String(iso),
            // 연도 범위를 벗어난 날짜
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}
