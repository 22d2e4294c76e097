//! 행 분류
//!
//! - 일반 키워드: 정규화된 상품명에 정규화된 키워드가 포함되면 매칭
//! - HDD/SSD: 카테고리 표기 포함 또는 모델코드 포함이면 매칭
//!   (표기가 있으면 이유는 항상 카테고리, 없을 때만 "모델코드")

use crate::category::Category;
use crate::error::{Error, Result};
use crate::normalize::normalize_text;
use crate::types::{ClassifiedRow, DataRow, MatchReason};

/// 키워드에서 결정된 매칭 규칙
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// 일반 키워드 (원본 키워드, 정규화된 키워드)
    Keyword { keyword: String, normalized: String },
    /// 카테고리 특수 규칙
    Category { keyword: String, category: Category },
}

impl MatchRule {
    /// 입력 키워드로 규칙 결정 (정규화 결과가 비면 `MissingKeyword`)
    pub fn from_keyword(raw: &str) -> Result<Self> {
        let keyword = raw.trim().to_string();
        let normalized = normalize_text(&keyword);
        if normalized.is_empty() {
            return Err(Error::MissingKeyword);
        }

        Ok(match Category::from_keyword(&normalized) {
            Some(category) => MatchRule::Category { keyword, category },
            None => MatchRule::Keyword { keyword, normalized },
        })
    }

    /// 입력한 키워드 (앞뒤 공백 제거)
    pub fn keyword(&self) -> &str {
        match self {
            MatchRule::Keyword { keyword, .. } | MatchRule::Category { keyword, .. } => keyword,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            MatchRule::Keyword { .. } => None,
            MatchRule::Category { category, .. } => Some(*category),
        }
    }

    /// 한 행의 매칭 이유 (매칭되지 않으면 None)
    pub fn reason_for(&self, name: &str) -> Option<MatchReason> {
        let normalized_name = normalize_text(name);
        match self {
            MatchRule::Keyword { keyword, normalized } => normalized_name
                .contains(normalized.as_str())
                .then(|| MatchReason::Keyword(keyword.clone())),
            MatchRule::Category { category, .. } => {
                if normalized_name.contains(category.token()) {
                    Some(MatchReason::Category(*category))
                } else if category.matches_model(name) {
                    Some(MatchReason::ModelCode)
                } else {
                    None
                }
            }
        }
    }
}

/// 데이터 행을 분류하여 매칭된 행만 반환 (시트 순서 유지)
pub fn classify(rows: &[DataRow], rule: &MatchRule) -> Vec<ClassifiedRow> {
    let matched: Vec<ClassifiedRow> = rows
        .iter()
        .filter_map(|row| {
            rule.reason_for(&row.name).map(|reason| ClassifiedRow {
                row: row.clone(),
                reason,
            })
        })
        .collect();

    tracing::debug!(
        keyword = rule.keyword(),
        rows = rows.len(),
        matched = matched.len(),
        "행 분류 완료"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(row_index: usize, name: &str) -> DataRow {
        DataRow {
            row_index,
            name: name.into(),
            cost_raw: String::new(),
            cost: None,
        }
    }

    #[test]
    fn test_rule_from_keyword() {
        assert!(matches!(
            MatchRule::from_keyword(" HDD "),
            Ok(MatchRule::Category { category: Category::Hdd, .. })
        ));
        assert!(matches!(
            MatchRule::from_keyword("ssd"),
            Ok(MatchRule::Category { category: Category::Ssd, .. })
        ));
        assert!(matches!(MatchRule::from_keyword("외장 HDD"), Ok(MatchRule::Keyword { .. })));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(matches!(MatchRule::from_keyword(""), Err(Error::MissingKeyword)));
        assert!(matches!(MatchRule::from_keyword("   "), Err(Error::MissingKeyword)));
        assert!(matches!(MatchRule::from_keyword("[ ]"), Err(Error::MissingKeyword)));
    }

    #[test]
    fn test_generic_keyword_is_literal() {
        let rule = MatchRule::from_keyword("a.b").unwrap();
        assert!(rule.reason_for("상품 A.B 세트").is_some());
        assert!(rule.reason_for("상품 AXB 세트").is_none());

        let rule = MatchRule::from_keyword("(특가)").unwrap();
        assert!(rule.reason_for("키보드 （특가）").is_some());
    }

    #[test]
    fn test_generic_keyword_ignores_case_and_spaces() {
        let rule = MatchRule::from_keyword("Seagate HDD").unwrap();
        assert_eq!(
            rule.reason_for("seagatehdd 2TB"),
            Some(MatchReason::Keyword("Seagate HDD".into()))
        );
    }

    #[test]
    fn test_category_token_wins_over_model_code() {
        let rule = MatchRule::from_keyword("hdd").unwrap();
        assert_eq!(
            rule.reason_for("WD10EZEX HDD 1TB"),
            Some(MatchReason::Category(Category::Hdd))
        );
        assert_eq!(rule.reason_for("WD10EZEX 1TB"), Some(MatchReason::ModelCode));
        assert_eq!(rule.reason_for("Samsung 870 EVO"), None);
    }

    #[test]
    fn test_category_token_ignores_spaces_and_brackets() {
        // 토큰도 키워드와 같은 정규화를 거친 상품명에서 찾는다
        let hdd = MatchRule::from_keyword("hdd").unwrap();
        assert_eq!(hdd.reason_for("외장 H DD 2TB"), Some(MatchReason::Category(Category::Hdd)));
        assert_eq!(hdd.reason_for("[HDD] 4TB"), Some(MatchReason::Category(Category::Hdd)));

        let ssd = MatchRule::from_keyword("ssd").unwrap();
        assert_eq!(ssd.reason_for("S SD 512GB"), Some(MatchReason::Category(Category::Ssd)));
        assert_eq!(ssd.reason_for("SD 카드 64GB"), None);
    }

    #[test]
    fn test_classify_keeps_order() {
        let rows = vec![
            row(3, "Seagate HDD 1TB"),
            row(4, "키보드"),
            row(5, "wd20ezaz"),
            row(6, "외장 hdd"),
        ];
        let rule = MatchRule::from_keyword("hdd").unwrap();
        let matched = classify(&rows, &rule);

        let indices: Vec<usize> = matched.iter().map(|m| m.row.row_index).collect();
        assert_eq!(indices, vec![3, 5, 6]);
        assert_eq!(matched[1].reason, MatchReason::ModelCode);
    }

    #[test]
    fn test_ssd_model_codes() {
        let rows = vec![
            row(1, "WD Blue SN580 1TB"),
            row(2, "WD Green SATA 240GB"),
            row(3, "삼성 SSD 870"),
            row(4, "Crucial P3"),
        ];
        let rule = MatchRule::from_keyword("SSD").unwrap();
        let matched = classify(&rows, &rule);
        let reasons: Vec<&MatchReason> = matched.iter().map(|m| &m.reason).collect();
        assert_eq!(
            reasons,
            vec![
                &MatchReason::ModelCode,
                &MatchReason::ModelCode,
                &MatchReason::Category(Category::Ssd)
            ]
        );
    }
}
