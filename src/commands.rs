//! 서브커맨드 실행
//!
//! 각 함수는 화면에 출력할 문자열을 돌려주고, 출력은 main에서 한다.

use crate::config::Config;
use crate::error::{ExcelSumError, Result};
use dialoguer::Input;
use excel_sum_common::export::audit_xlsx::write_audit_workbook;
use excel_sum_common::header::locate_headers;
use excel_sum_common::report::{grid_preview, render_audit, summary_text};
use excel_sum_common::{load_grid, Error, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// sum 명령 옵션
#[derive(Debug, Clone)]
pub struct SumOptions {
    pub audit: bool,
    pub json: bool,
    pub export_audit: Option<PathBuf>,
    pub limit: usize,
}

/// 키워드 입력 프롬프트
pub fn prompt_keyword() -> Result<String> {
    Input::<String>::new()
        .with_prompt("텍스트 입력 (등록상품명 검색)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ExcelSumError::Prompt(e.to_string()))
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 합계 계산
pub fn run_sum(file: &Path, keyword: &str, options: &SumOptions) -> Result<String> {
    let mut session = Session::new();
    session.select_file(file)?;

    let pb = spinner(format!("{} 읽는 중...", file.display()));
    let result = session.calculate(keyword);
    pb.finish_and_clear();
    let calculation = result?;

    if let Some(path) = &options.export_audit {
        write_audit_workbook(calculation, path)?;
        tracing::info!(path = %path.display(), "감사용 엑셀 저장");
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(calculation)?);
    }

    let mut output = summary_text(&calculation.summary);
    if options.audit {
        output.push_str("\n\n");
        output.push_str(&render_audit(calculation, options.limit));
    }
    if let Some(path) = &options.export_audit {
        output.push_str(&format!("\n✔ 감사용 엑셀 저장: {}", path.display()));
    }

    Ok(output)
}

/// 시트 미리보기 + 헤더 탐지 결과
pub fn run_preview(file: &Path, rows: usize) -> Result<String> {
    let grid = load_grid(file)?;
    let mut output = format!(
        "{} ({}행 x {}열)\n\n{}\n\n",
        file.display(),
        grid.row_count(),
        grid.column_count(),
        grid_preview(&grid, rows)
    );

    match locate_headers(&grid) {
        Ok(header) => output.push_str(&format!(
            "등록상품명 헤더: {}행 {}열\n할인적용가 헤더: {}행 {}열\n데이터 시작: {}행",
            header.name.row,
            header.name.col,
            header.cost.row,
            header.cost.col,
            header.data_start()
        )),
        Err(Error::HeaderNotFound { .. }) => {
            output.push_str("⚠ '등록상품명' 또는 '할인적용가(A-B)' 헤더를 찾지 못했습니다.")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(output)
}

/// 설정 표시/초기화
///
/// `--init`은 기존 파일을 읽지 않고 덮어쓴다 (깨진 설정 복구용).
pub fn run_config(show: bool, init: bool) -> Result<String> {
    let mut lines = Vec::new();

    if init {
        let path = Config::default().save()?;
        lines.push(format!("✔ 기본 설정을 저장했습니다: {}", path.display()));
    }

    if show || !init {
        let config = Config::load()?;
        lines.push("설정:".to_string());
        lines.push(format!("  감사 표 최대 건수: {}", config.audit_limit));
        lines.push(format!("  미리보기 행 수: {}", config.preview_rows));
        lines.push(format!("  로그 레벨: {}", config.log_level));
        lines.push(format!("  파일: {}", Config::config_path()?.display()));
    }

    Ok(lines.join("\n"))
}
