//! 하드웨어 카테고리 규칙 (HDD / SSD)
//!
//! 상품명에 카테고리 표기가 없어도 모델코드가 들어 있으면 포함한다.
//! 모델코드 목록은 고정 데이터이며 순서를 유지한 채 중복만 제거한다.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// HDD 모델코드 (WD 계열)
pub const HDD_MODEL_CODES: &[&str] = &[
    "WD10EZEX", "WD20EZAZ", "WD20EZBX", "WD30EZAX", "WD40EZAX", "WD60EZAX", "WD80EAZZ", "WD80EAAZ",
    "WD10PURZ", "WD23PURZ", "WD33PURZ", "WD43PURZ", "WD64PURZ", "WD84PURZ", "WD8001PURP", "WD101PURP",
    "WD121PURP", "WD141PURP", "WD181PURP", "WD2003FZEX", "WD4005FZBX", "WD8002FZWX", "WD101FZBX",
    "WD20EFPX", "WD40EFPX", "WD60EZPX", "WD80EFZZ", "WD101EFBX", "WD120EFBX", "WD2002FFSX",
    "WD4003FFBX", "WD6003FFBX", "WD8003FFBX", "WD8005FFBX", "WD102KFBX", "WD121KFBX", "WD142KFGX",
    "WD161KFGX", "WD181KFGX", "WD201KFGX", "WD221KFGX", "WD240KFGX", "WD10SPZX", "WD20SPZX",
    "WD5000LPZX",
];

/// SSD 모델코드
pub const SSD_MODEL_CODES: &[&str] = &[
    "Green 3D", "Green SATA", "Green M.2", "SA510",
    "SN350", "SN570", "SN580", "SN770", "SN770M",
    "SN850X", "SN5000", "SN7100",
];

lazy_static::lazy_static! {
    static ref HDD_PATTERN: Regex = build_model_pattern(HDD_MODEL_CODES)
        .expect("HDD 모델코드 패턴");
    static ref SSD_PATTERN: Regex = build_model_pattern(SSD_MODEL_CODES)
        .expect("SSD 모델코드 패턴");
}

/// 특수 규칙이 적용되는 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hdd,
    Ssd,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hdd, Category::Ssd];

    /// 정규화된 키워드가 카테고리 토큰과 같으면 해당 카테고리
    pub fn from_keyword(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == normalized)
    }

    /// 정규화된 상품명에서 찾는 토큰
    pub fn token(&self) -> &'static str {
        match self {
            Category::Hdd => "hdd",
            Category::Ssd => "ssd",
        }
    }

    /// 화면 표기
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hdd => "HDD",
            Category::Ssd => "SSD",
        }
    }

    /// 모델코드 교대 패턴 (대소문자 무시)
    pub fn model_pattern(&self) -> &'static Regex {
        match self {
            Category::Hdd => &*HDD_PATTERN,
            Category::Ssd => &*SSD_PATTERN,
        }
    }

    /// 원본 상품명에 모델코드가 포함되는지
    pub fn matches_model(&self, raw_name: &str) -> bool {
        self.model_pattern().is_match(raw_name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 순서를 유지하며 중복 제거
pub fn dedup_codes<'a>(codes: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    codes.iter().copied().filter(|c| seen.insert(*c)).collect()
}

/// 코드 목록을 리터럴 교대 패턴 `(c1|c2|...)`으로 컴파일
pub fn build_model_pattern(codes: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = dedup_codes(codes)
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&format!("({})", alternation))
        .case_insensitive(true)
        .build()
}
