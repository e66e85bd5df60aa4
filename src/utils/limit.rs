//! `limit` 쿼리 파라미터 해석
//!
//! 앞쪽 정수 접두어만 읽는 관대한 규칙을 따릅니다.
//!
//! | 입력 | 결과 |
//! |------|------|
//! | `"5"` | `Some(5)` |
//! | `" 3abc"` | `Some(3)` |
//! | `"2.9"` | `Some(2)` |
//! | `"-4"` | `Some(4)` |
//! | `"0"`, `"abc"`, `""` | `None` (제한 없음) |

/// `limit` 문자열을 결과 개수 상한으로 변환합니다.
///
/// 0 이거나 숫자로 시작하지 않으면 `None` 을 반환합니다. 음수는 절댓값을
/// 사용하며 (드라이버의 음수 limit 과 같은 개수), `u64` 범위를 넘으면 포화됩니다.
///
/// # Examples
///
/// ```rust
/// use zeta_edge_catalog::utils::limit::parse_limit;
///
/// assert_eq!(parse_limit("10"), Some(10));
/// assert_eq!(parse_limit("abc"), None);
/// ```
pub fn parse_limit(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return None;
    }

    // 숫자로만 이루어져 있으므로 실패 원인은 오버플로뿐
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    (value != 0).then_some(value)
}
