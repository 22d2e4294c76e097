//! 세션 상태
//!
//! 선택한 파일 경로와 마지막 계산 결과만 가진다.
//! 계산에 실패하면 이전 결과를 그대로 둔다.

use crate::calculator::calculate;
use crate::classifier::MatchRule;
use crate::error::{Error, Result};
use crate::types::Calculation;
use crate::workbook::{is_supported, load_grid};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Session {
    file_path: Option<PathBuf>,
    last: Option<Calculation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 선택 (xlsx/xls만)
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if !is_supported(&path) {
            return Err(Error::UnsupportedFormat(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "파일 선택");
        self.file_path = Some(path);
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// 마지막으로 성공한 계산 결과
    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }

    /// 선택한 파일을 다시 읽어 합계 계산
    ///
    /// 검사 순서: 파일 선택 → 키워드 → 파일 읽기 → 헤더
    pub fn calculate(&mut self, keyword: &str) -> Result<&Calculation> {
        let path = self.file_path.as_deref().ok_or(Error::MissingFile)?;
        MatchRule::from_keyword(keyword)?;

        let grid = load_grid(path)?;
        let calculation = calculate(&grid, keyword)?;
        tracing::info!(
            keyword = keyword.trim(),
            matched = calculation.summary.matched_count,
            total = calculation.summary.total,
            "합계 계산 완료"
        );

        Ok(self.last.insert(calculation))
    }
}
