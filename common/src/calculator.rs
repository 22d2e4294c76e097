//! 합계 계산 파이프라인
//!
//! ## 처리 흐름
//! 1. 키워드 → 매칭 규칙
//! 2. 헤더 탐색 (상품명 / 할인적용가)
//! 3. 데이터 행 추출 + 금액 숫자화
//! 4. 행 분류 → 합계 집계

use crate::aggregate::summarize;
use crate::classifier::{classify, MatchRule};
use crate::error::Result;
use crate::header::{extract_rows, locate_headers};
use crate::types::{Calculation, RawGrid};

/// 그리드와 키워드로 합계를 계산한다
///
/// # Examples
/// ```
/// use excel_sum_common::{calculate, RawGrid};
///
/// let grid = RawGrid::from_rows(vec![
///     vec!["등록상품명", "할인적용가(A-B)"],
///     vec!["게이밍 키보드", "50,000원"],
///     vec!["마우스", "20,000원"],
/// ]);
/// let result = calculate(&grid, "키보드").unwrap();
/// assert_eq!(result.summary.matched_count, 1);
/// assert_eq!(result.summary.total, 50000.0);
/// ```
pub fn calculate(grid: &RawGrid, keyword: &str) -> Result<Calculation> {
    let rule = MatchRule::from_keyword(keyword)?;
    let header = locate_headers(grid)?;
    let rows = extract_rows(grid, &header);
    tracing::debug!(data_start = header.data_start(), rows = rows.len(), "데이터 행 추출");

    let matched = classify(&rows, &rule);
    let summary = summarize(&rule, &matched);

    Ok(Calculation {
        header,
        summary,
        matched,
    })
}
