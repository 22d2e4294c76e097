//! 설정 파일 테스트
//!
//! HOME을 바꾸므로 다른 테스트와 프로세스를 나눠 둔다.

use excel_sum_rust::commands::run_config;
use excel_sum_rust::config::Config;
use excel_sum_rust::error::ExcelSumError;
use tempfile::tempdir;

#[test]
fn test_init_overwrites_broken_config() {
    let home = tempdir().expect("Failed to create temp dir");
    std::env::set_var("HOME", home.path());

    let path = Config::config_path().unwrap();
    assert!(path.starts_with(home.path()));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"audit_limit": "bad""#).unwrap();

    // 깨진 파일은 읽기/표시에서 에러
    assert!(matches!(Config::load(), Err(ExcelSumError::JsonParse(_))));
    assert!(run_config(true, false).is_err());

    // --init은 기존 내용을 읽지 않고 덮어쓴다
    let output = run_config(false, true).unwrap();
    assert!(output.contains("기본 설정을 저장했습니다"));
    assert_eq!(Config::load().unwrap(), Config::default());

    let shown = run_config(true, true).unwrap();
    assert!(shown.contains("감사 표 최대 건수: 300"));
    assert!(shown.contains("미리보기 행 수: 12"));
}
