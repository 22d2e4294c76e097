//! 엑셀 파일 기반 합계 계산 통합 테스트
//!
//! rust_xlsxwriter로 픽스처 파일을 만든 뒤 calamine으로 다시 읽어 검증

use excel_sum_common::report::AUDIT_LIMIT;
use excel_sum_common::{load_grid, Category, Error, MatchReason, Session};
use excel_sum_rust::commands::{run_preview, run_sum, SumOptions};
use excel_sum_rust::error::ExcelSumError;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 상단 안내문 2줄 + 헤더(2행) + 데이터
fn write_sample(path: &Path, rows: &[(&str, &str)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "판매 정산 내역").unwrap();
    sheet.write_string(2, 0, "등록상품명").unwrap();
    sheet.write_string(2, 1, "옵션").unwrap();
    sheet.write_string(2, 2, "판매가").unwrap();
    sheet.write_string(2, 3, "할인적용가(A-B)").unwrap();

    for (i, (name, cost)) in rows.iter().enumerate() {
        let row = 3 + i as u32;
        sheet.write_string(row, 0, *name).unwrap();
        sheet.write_string(row, 3, *cost).unwrap();
    }

    workbook.save(path).unwrap();
}

fn options() -> SumOptions {
    SumOptions {
        audit: false,
        json: false,
        export_audit: None,
        limit: AUDIT_LIMIT,
    }
}

fn sample_file(dir: &Path) -> PathBuf {
    let path = dir.join("sample.xlsx");
    write_sample(
        &path,
        &[
            ("Seagate HDD 1TB", "120,000원"),
            ("WD10EZEX", "95,000원"),
            ("삼성 SSD 870 EVO", "89,000원"),
            ("WD Blue SN580 1TB", "79,000"),
            ("기계식 키보드", "가격문의"),
        ],
    );
    path
}

#[test]
fn test_worked_example_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let mut session = Session::new();
    session.select_file(&path).unwrap();
    let result = session.calculate("hdd").unwrap();

    assert_eq!(result.header.name.row, 2);
    assert_eq!(result.header.name.col, 0);
    assert_eq!(result.header.cost.col, 3);
    assert_eq!(result.summary.matched_count, 2);
    assert_eq!(result.summary.total, 215000.0);
    assert_eq!(result.matched[0].reason, MatchReason::Category(Category::Hdd));
    assert_eq!(result.matched[1].reason, MatchReason::ModelCode);
    assert_eq!(result.matched[1].row.row_index, 4);
}

#[test]
fn test_sum_output_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let output = run_sum(&path, "ssd", &options()).unwrap();
    assert_eq!(
        output,
        "결과: 168,000 원\n(매칭된 항목 수: 2개 = SSD표기 1개 + 모델코드 1개)"
    );
}

#[test]
fn test_generic_keyword_with_unparseable_cost() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let output = run_sum(&path, "키보드", &options()).unwrap();
    assert_eq!(output, "결과: 0 원\n(매칭된 항목 수: 1개)");
}

#[test]
fn test_sum_with_audit_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let mut opts = options();
    opts.audit = true;
    let output = run_sum(&path, "HDD", &opts).unwrap();

    assert!(output.contains("[모델코드로만 추가된 항목들] (총 1건)"));
    assert!(output.contains("WD10EZEX"));
    assert!(!output.contains("Seagate HDD 1TB"));
}

#[test]
fn test_sum_json_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let mut opts = options();
    opts.json = true;
    let output = run_sum(&path, "hdd", &opts).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["summary"]["matchedCount"], 2);
    assert_eq!(value["summary"]["category"], "hdd");
    assert_eq!(value["matched"][1]["name"], "WD10EZEX");
    assert_eq!(value["matched"][1]["reason"]["kind"], "modelCode");
}

#[test]
fn test_sum_exports_audit_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());
    let audit_path = dir.path().join("audit.xlsx");

    let mut opts = options();
    opts.export_audit = Some(audit_path.clone());
    let output = run_sum(&path, "hdd", &opts).unwrap();

    assert!(output.contains("감사용 엑셀 저장"));
    let summary = load_grid(&audit_path).unwrap();
    assert_eq!(summary.cell(2, 1), "215000");
}

#[test]
fn test_recalculation_is_deterministic() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let mut session = Session::new();
    session.select_file(&path).unwrap();
    let first = session.calculate("ssd").unwrap().clone();
    let second = session.calculate("ssd").unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn test_failed_calculation_keeps_previous_result() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let mut session = Session::new();
    session.select_file(&path).unwrap();
    session.calculate("hdd").unwrap();

    assert!(matches!(session.calculate(""), Err(Error::MissingKeyword)));
    let last = session.last_calculation().expect("이전 결과 유지");
    assert_eq!(last.summary.total, 215000.0);
}

#[test]
fn test_missing_header_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_header.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "상품코드").unwrap();
    sheet.write_string(0, 1, "판매가").unwrap();
    sheet.write_string(1, 0, "HDD-1").unwrap();
    sheet.write_number(1, 1, 1000.0).unwrap();
    workbook.save(&path).unwrap();

    let err = run_sum(&path, "hdd", &options()).unwrap_err();
    match err {
        ExcelSumError::Common(Error::HeaderNotFound { preview }) => {
            assert!(preview.contains("상품코드"));
            assert!(preview.contains("HDD-1"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_numeric_cost_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("numeric.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "상품명").unwrap();
    sheet.write_string(0, 1, "할인 적용가").unwrap();
    sheet.write_string(1, 0, "램 8GB").unwrap();
    sheet.write_number(1, 1, 30000.0).unwrap();
    sheet.write_string(2, 0, "램 16GB").unwrap();
    sheet.write_number(2, 1, 55000.4).unwrap();
    workbook.save(&path).unwrap();

    let output = run_sum(&path, "램", &options()).unwrap();
    assert_eq!(output, "결과: 85,000 원\n(매칭된 항목 수: 2개)");
}

#[test]
fn test_preview_reports_headers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sample_file(dir.path());

    let output = run_preview(&path, 4).unwrap();
    assert!(output.contains("등록상품명 헤더: 2행 0열"));
    assert!(output.contains("할인적용가 헤더: 2행 3열"));
    assert!(output.contains("데이터 시작: 3행"));
    assert!(!output.contains("WD10EZEX"));
}
