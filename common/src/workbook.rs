//! 엑셀 파일 읽기
//!
//! 헤더 없이 첫 번째 시트를 통째로 읽어 RawGrid로 변환한다.
//! 시트 앞쪽의 빈 행/열도 유지하여 행/열 번호가 시트 위치와 같다.

use crate::error::{Error, Result};
use crate::types::RawGrid;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 지원 확장자
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// 지원하는 엑셀 파일인지 (확장자 대소문자 무시)
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// 셀 값을 문자열로 (빈 셀은 빈 문자열)
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(v) => v.clone(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        other => other.to_string(),
    }
}

/// 첫 번째 시트를 읽는다
pub fn load_grid(path: &Path) -> Result<RawGrid> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if !is_supported(path) {
        return Err(Error::UnsupportedFormat(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoWorksheet(path.display().to_string()))?
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    for cells in range.rows() {
        let mut row = vec![String::new(); col_offset];
        row.extend(cells.iter().map(cell_to_string));
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        row_offset,
        col_offset,
        "시트 읽기 완료"
    );
    Ok(RawGrid::new(rows))
}
