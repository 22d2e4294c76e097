//! 텍스트 정규화 / 금액 숫자화
//!
//! 헤더 탐색과 키워드 비교에 같은 정규화를 사용한다.

/// 금액 문자열에서 제거하는 문자열 (쉼표, 공백, 원화 기호)
const COST_STRIP: &[&str] = &[",", " ", "₩", "원"];

/// 공백/괄호 정규화 + 소문자 (대괄호 제거 포함)
pub fn normalize_text(value: &str) -> String {
    normalize_text_with(value, true)
}

/// 공백/괄호 정규화 + 소문자
///
/// - 전각 괄호 `（` `）` → `(` `)`
/// - `strip_brackets`이면 `[` `]` 제거
/// - 모든 공백 제거
pub fn normalize_text_with(value: &str, strip_brackets: bool) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| !(strip_brackets && (*c == '[' || *c == ']')))
        .map(|c| match c {
            '（' => '(',
            '）' => ')',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// 쉼표/공백/원화기호 제거 후 숫자화
///
/// 파싱할 수 없는 값(빈 문자열, 문자 포함, NaN/무한대)은 `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let mut cleaned = raw.to_string();
    for pattern in COST_STRIP {
        cleaned = cleaned.replace(pattern, "");
    }

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 열 단위 숫자화
pub fn coerce_column<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Option<f64>> {
    values.into_iter().map(coerce_number).collect()
}
