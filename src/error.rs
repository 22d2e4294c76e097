use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExcelSumError {
    #[error(transparent)]
    Common(#[from] excel_sum_common::Error),

    #[error("설정 오류: {0}")]
    Config(String),

    #[error("입력 오류: {0}")]
    Prompt(String),

    #[error("JSON 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExcelSumError>;
