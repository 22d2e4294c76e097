use crate::error::{ExcelSumError, Result};
use excel_sum_common::header::PREVIEW_ROWS;
use excel_sum_common::report::AUDIT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 감사 표 최대 표시 건수
    pub audit_limit: usize,
    /// preview 명령 기본 행 수
    pub preview_rows: usize,
    /// 기본 로그 레벨 (RUST_LOG가 우선)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_limit: AUDIT_LIMIT,
            preview_rows: PREVIEW_ROWS,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExcelSumError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("excel-sum").join("config.json"))
    }
}
