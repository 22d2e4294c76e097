//! 계산 결과 타입 정의
//!
//! CLI와 데스크톱에서 공유되는 타입:
//! - RawGrid: 헤더 없이 읽은 시트 전체
//! - HeaderMatch: 상품명/금액 헤더 위치
//! - DataRow / ClassifiedRow: 데이터 행과 매칭 이유
//! - ResultSummary / Calculation: 최종 결과

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// 헤더 구조를 가정하지 않은 시트 데이터 (빈 셀은 빈 문자열)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 문자열 슬라이스로 그리드 생성 (테스트/픽스처용)
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 가장 긴 행의 열 수
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// 셀 값 (범위 밖이면 빈 문자열)
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// 헤더 셀 위치 (0부터 시작하는 행/열)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLocation {
    pub row: usize,
    pub col: usize,
}

/// 상품명 열과 금액 열의 헤더 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMatch {
    pub name: HeaderLocation,
    pub cost: HeaderLocation,
}

impl HeaderMatch {
    /// 데이터 시작 행: 더 아래쪽 헤더의 다음 줄
    pub fn data_start(&self) -> usize {
        self.name.row.max(self.cost.row) + 1
    }
}

/// 헤더 아래의 데이터 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRow {
    /// 시트 기준 행 번호 (0부터)
    pub row_index: usize,
    pub name: String,
    /// 금액 셀 원본 문자열
    pub cost_raw: String,
    /// 숫자화된 금액 (실패 시 None)
    pub cost: Option<f64>,
}

/// 행이 포함된 이유
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MatchReason {
    /// 일반 키워드 포함
    Keyword(String),
    /// 카테고리 표기(HDD/SSD) 포함
    Category(Category),
    /// 카테고리 표기 없이 모델코드로만 매칭
    ModelCode,
}

impl MatchReason {
    pub fn is_model_code(&self) -> bool {
        matches!(self, MatchReason::ModelCode)
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchReason::Keyword(keyword) => write!(f, "키워드:{}", keyword),
            MatchReason::Category(category) => write!(f, "{}", category.label()),
            MatchReason::ModelCode => write!(f, "모델코드"),
        }
    }
}

/// 매칭된 행과 이유
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRow {
    #[serde(flatten)]
    pub row: DataRow,
    pub reason: MatchReason,
}

/// 합계 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// 입력 키워드 (앞뒤 공백 제거)
    pub keyword: String,
    /// 카테고리 규칙이 적용된 경우 해당 카테고리
    pub category: Option<Category>,
    pub total: f64,
    pub matched_count: usize,
    /// 키워드 또는 카테고리 표기로 매칭된 행 수
    pub primary_count: usize,
    /// 모델코드로만 매칭된 행 수
    pub model_code_only_count: usize,
}

/// 한 번의 계산 결과 전체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub header: HeaderMatch,
    pub summary: ResultSummary,
    /// 매칭된 행 (시트 순서)
    pub matched: Vec<ClassifiedRow>,
}

impl Calculation {
    /// 모델코드로만 추가된 행
    pub fn model_code_only(&self) -> impl Iterator<Item = &ClassifiedRow> {
        self.matched.iter().filter(|r| r.reason.is_model_code())
    }

    /// 감사용 목록 (상한 적용)
    pub fn audit_rows(&self, limit: usize) -> Vec<&ClassifiedRow> {
        self.model_code_only().take(limit).collect()
    }
}
