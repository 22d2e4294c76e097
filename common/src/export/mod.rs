//! 내보내기 모듈 (CLI / 데스크톱 공용)

#[cfg(feature = "excel")]
pub mod audit_xlsx;
