//! 헤더 탐색
//!
//! 시트 전체를 위에서 아래로 훑어 상품명/금액 헤더를 찾는다.
//! 멀티 헤더(두 줄 이상)인 경우 마지막 줄을 쓰기 위해
//! 조건에 맞는 셀이 나올 때마다 위치를 덮어쓴다.

use crate::error::{Error, Result};
use crate::normalize::{coerce_column, normalize_text};
use crate::report::grid_preview;
use crate::types::{DataRow, HeaderLocation, HeaderMatch, RawGrid};

/// 상품명 헤더 후보 ('등록상품명' 우선, '상품명' 허용)
pub const NAME_PRIORITY: &[&str] = &["등록상품명", "상품명"];

/// 금액 헤더 후보 ('할인적용가(A-B)' 우선, 공백/괄호/하이픈 변형 허용)
pub const COST_PRIORITY: &[&str] = &["할인적용가(a-b)", "할인적용가", "할인 적용가", "할인적용가a-b"];

/// 상품명 후보에서 제외하는 토큰
const NAME_EXCLUDE: &str = "id";

/// 에러 시 보여줄 상단 행 수
pub const PREVIEW_ROWS: usize = 12;

/// 정규화된 셀이 상품명 헤더인지 ('id' 포함 셀은 제외)
pub fn is_name_header(normalized: &str) -> bool {
    if normalized.contains(NAME_EXCLUDE) {
        return false;
    }
    contains_any(normalized, NAME_PRIORITY)
}

/// 정규화된 셀이 금액 헤더인지
pub fn is_cost_header(normalized: &str) -> bool {
    contains_any(normalized, COST_PRIORITY)
}

fn contains_any(normalized: &str, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| normalized.contains(&normalize_text(candidate)))
}

/// 상품명/금액 헤더 위치를 찾는다
///
/// 둘 중 하나라도 없으면 상단 12줄 미리보기를 담은 `HeaderNotFound`.
pub fn locate_headers(grid: &RawGrid) -> Result<HeaderMatch> {
    let mut name: Option<HeaderLocation> = None;
    let mut cost: Option<HeaderLocation> = None;

    for (row, cells) in grid.rows().iter().enumerate() {
        let normalized: Vec<String> = cells.iter().map(|c| normalize_text(c)).collect();

        for (col, text) in normalized.iter().enumerate() {
            if is_name_header(text) {
                name = Some(HeaderLocation { row, col });
            }
        }

        for (col, text) in normalized.iter().enumerate() {
            if is_cost_header(text) {
                cost = Some(HeaderLocation { row, col });
            }
        }
    }

    match (name, cost) {
        (Some(name), Some(cost)) => {
            tracing::debug!(
                name_row = name.row,
                name_col = name.col,
                cost_row = cost.row,
                cost_col = cost.col,
                "헤더 위치 확정"
            );
            Ok(HeaderMatch { name, cost })
        }
        _ => {
            tracing::warn!(
                name_found = name.is_some(),
                cost_found = cost.is_some(),
                "헤더를 찾지 못함"
            );
            Err(Error::HeaderNotFound {
                preview: grid_preview(grid, PREVIEW_ROWS),
            })
        }
    }
}

/// 헤더 아래 데이터 행 추출
pub fn extract_rows(grid: &RawGrid, header: &HeaderMatch) -> Vec<DataRow> {
    let row_range = header.data_start()..grid.row_count();
    let costs = coerce_column(row_range.clone().map(|row| grid.cell(row, header.cost.col)));

    row_range
        .zip(costs)
        .map(|(row_index, cost)| DataRow {
            row_index,
            name: grid.cell(row_index, header.name.col).to_string(),
            cost_raw: grid.cell(row_index, header.cost.col).to_string(),
            cost,
        })
        .collect()
}
