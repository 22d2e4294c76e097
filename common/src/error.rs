//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("엑셀 파일을 먼저 선택하세요.")]
    MissingFile,

    #[error("검색할 텍스트를 입력하세요.")]
    MissingKeyword,

    #[error("엑셀에서 '등록상품명' 또는 '할인적용가(A-B)' 헤더를 찾지 못했습니다.\n상단 12줄을 확인하세요.\n\n{preview}")]
    HeaderNotFound { preview: String },

    #[error("지원하지 않는 파일 형식입니다 (xlsx/xls만 가능): {0}")]
    UnsupportedFormat(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("처리 중 오류 발생:\n{0}")]
    Workbook(String),

    #[error("워크시트가 없습니다: {0}")]
    NoWorksheet(String),

    #[error("내보내기 오류: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
