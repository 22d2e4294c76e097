//! 감사용 엑셀 생성
//!
//! - `요약` 시트: 키워드, 합계, 건수
//! - `모델코드` 시트: 모델코드로만 추가된 행 전체 (표시 상한 없음)
//! - `전체` 시트: 매칭된 모든 행과 이유

use crate::error::{Error, Result};
use crate::types::{Calculation, ClassifiedRow};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

const ROW_HEADERS: &[&str] = &["행", "상품명", "금액(원본)", "금액(숫자)", "이유"];
const ROW_COLUMN_WIDTHS: &[f64] = &[8.0, 60.0, 16.0, 14.0, 14.0];

fn xlsx_err(context: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> Error + '_ {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// 감사용 엑셀을 버퍼로 생성
pub fn generate_audit_buffer(calculation: &Calculation) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));
    let number_format = Format::new().set_num_format("#,##0");

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("요약").map_err(xlsx_err("시트 이름 설정"))?;
        write_summary(sheet, calculation, &header_format, &number_format)?;
    }

    let model_only: Vec<&ClassifiedRow> = calculation.model_code_only().collect();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("모델코드").map_err(xlsx_err("시트 이름 설정"))?;
        write_rows(sheet, &model_only, &header_format, &number_format)?;
    }

    let all: Vec<&ClassifiedRow> = calculation.matched.iter().collect();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("전체").map_err(xlsx_err("시트 이름 설정"))?;
        write_rows(sheet, &all, &header_format, &number_format)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err("엑셀 저장"))
}

/// 감사용 엑셀을 파일로 저장
pub fn write_audit_workbook(calculation: &Calculation, output_path: &Path) -> Result<()> {
    let buffer = generate_audit_buffer(calculation)?;
    std::fs::write(output_path, buffer)?;
    tracing::debug!(path = %output_path.display(), "감사용 엑셀 저장");
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    calculation: &Calculation,
    header_format: &Format,
    number_format: &Format,
) -> Result<()> {
    let summary = &calculation.summary;
    let category = summary
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| "-".to_string());

    let labels = ["키워드", "카테고리", "합계(원)", "매칭된 항목 수", "표기/키워드", "모델코드"];
    for (row, label) in labels.iter().enumerate() {
        sheet
            .write_string_with_format(row as u32, 0, *label, header_format)
            .map_err(xlsx_err("요약 쓰기"))?;
    }

    sheet.write_string(0, 1, &summary.keyword).map_err(xlsx_err("요약 쓰기"))?;
    sheet.write_string(1, 1, &category).map_err(xlsx_err("요약 쓰기"))?;
    sheet
        .write_number_with_format(2, 1, summary.total, number_format)
        .map_err(xlsx_err("요약 쓰기"))?;
    sheet
        .write_number(3, 1, summary.matched_count as f64)
        .map_err(xlsx_err("요약 쓰기"))?;
    sheet
        .write_number(4, 1, summary.primary_count as f64)
        .map_err(xlsx_err("요약 쓰기"))?;
    sheet
        .write_number(5, 1, summary.model_code_only_count as f64)
        .map_err(xlsx_err("요약 쓰기"))?;

    sheet.set_column_width(0, 16.0).map_err(xlsx_err("열 너비 설정"))?;
    sheet.set_column_width(1, 24.0).map_err(xlsx_err("열 너비 설정"))?;
    Ok(())
}

fn write_rows(
    sheet: &mut Worksheet,
    rows: &[&ClassifiedRow],
    header_format: &Format,
    number_format: &Format,
) -> Result<()> {
    for (col, (title, width)) in ROW_HEADERS.iter().zip(ROW_COLUMN_WIDTHS).enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, header_format)
            .map_err(xlsx_err("헤더 쓰기"))?;
        sheet
            .set_column_width(col as u16, *width)
            .map_err(xlsx_err("열 너비 설정"))?;
    }

    for (i, item) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet
            .write_number(row, 0, item.row.row_index as f64)
            .map_err(xlsx_err("행 쓰기"))?;
        sheet
            .write_string(row, 1, &item.row.name)
            .map_err(xlsx_err("행 쓰기"))?;
        sheet
            .write_string(row, 2, &item.row.cost_raw)
            .map_err(xlsx_err("행 쓰기"))?;
        let written = match item.row.cost {
            Some(cost) => sheet.write_number_with_format(row, 3, cost, number_format),
            None => sheet.write_string(row, 3, "-"),
        };
        written.map_err(xlsx_err("행 쓰기"))?;
        sheet
            .write_string(row, 4, item.reason.to_string())
            .map_err(xlsx_err("행 쓰기"))?;
    }

    Ok(())
}
