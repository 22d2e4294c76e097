//! 합계 / 건수 집계

use crate::classifier::MatchRule;
use crate::types::{ClassifiedRow, ResultSummary};

/// 매칭된 행의 금액 합계와 이유별 건수
///
/// 숫자화에 실패한 금액(None)은 0으로 취급한다.
pub fn summarize(rule: &MatchRule, matched: &[ClassifiedRow]) -> ResultSummary {
    let total: f64 = matched.iter().filter_map(|m| m.row.cost).sum();
    let model_code_only_count = matched.iter().filter(|m| m.reason.is_model_code()).count();

    ResultSummary {
        keyword: rule.keyword().to_string(),
        category: rule.category(),
        total,
        matched_count: matched.len(),
        primary_count: matched.len() - model_code_only_count,
        model_code_only_count,
    }
}
