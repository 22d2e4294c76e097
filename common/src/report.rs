//! 결과 표시용 텍스트 생성
//!
//! 합계 요약, 모델코드 감사 표, 시트 미리보기를 고정폭 텍스트로 만든다.

use crate::types::{Calculation, ClassifiedRow, RawGrid, ResultSummary};

/// 감사 표에 표시하는 최대 건수
pub const AUDIT_LIMIT: usize = 300;

/// 감사 표 제목
pub const AUDIT_TITLE: &str = "모델코드로만 추가된 항목들";

const NAME_WIDTH: usize = 60;
const COST_RAW_WIDTH: usize = 15;
const PREVIEW_CELL_WIDTH: usize = 20;

/// 원 단위 반올림 + 천 단위 구분
///
/// ```
/// use excel_sum_common::report::format_won;
///
/// assert_eq!(format_won(215000.0), "215,000");
/// assert_eq!(format_won(1234.6), "1,235");
/// ```
pub fn format_won(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// 결과 요약 (두 줄)
pub fn summary_text(summary: &ResultSummary) -> String {
    let total = format!("결과: {} 원", format_won(summary.total));
    match summary.category {
        Some(category) => format!(
            "{}\n(매칭된 항목 수: {}개 = {}표기 {}개 + 모델코드 {}개)",
            total,
            summary.matched_count,
            category.label(),
            summary.primary_count,
            summary.model_code_only_count
        ),
        None => format!("{}\n(매칭된 항목 수: {}개)", total, summary.matched_count),
    }
}

/// 모델코드 감사 표
///
/// # Arguments
/// * `rows` - 표시할 행 (호출 측에서 상한 적용)
/// * `total` - 상한 적용 전 전체 건수
/// * `title` - 표 제목
pub fn audit_table(rows: &[&ClassifiedRow], total: usize, title: &str) -> String {
    if total == 0 {
        return format!("[{}]\n(모델코드로만 추가된 항목 없음)\n", title);
    }

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if total > rows.len() {
        lines.push(format!("[{}] (총 {}건, 상위 {}건 표시)\n", title, total, rows.len()));
    } else {
        lines.push(format!("[{}] (총 {}건)\n", title, total));
    }
    lines.push(format!(
        "{:>6} | {:<60} | {:<15} | {:>12}",
        "행", "상품명", "금액(원본)", "금액(숫자)"
    ));
    lines.push("-".repeat(110));

    for item in rows {
        let cost_display = item
            .row
            .cost
            .map(format_won)
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:>6} | {:<60} | {:<15} | {:>12}",
            item.row.row_index,
            truncate_chars(&item.row.name, NAME_WIDTH),
            truncate_chars(&item.row.cost_raw, COST_RAW_WIDTH),
            cost_display
        ));
    }

    lines.join("\n") + "\n\n"
}

/// 계산 결과에서 바로 감사 표 생성
pub fn render_audit(calculation: &Calculation, limit: usize) -> String {
    let rows = calculation.audit_rows(limit);
    audit_table(&rows, calculation.summary.model_code_only_count, AUDIT_TITLE)
}

/// 시트 상단 미리보기 (행 번호 + 열 번호 헤더)
pub fn grid_preview(grid: &RawGrid, max_rows: usize) -> String {
    let shown = &grid.rows()[..max_rows.min(grid.row_count())];
    if shown.is_empty() {
        return "(빈 시트)".to_string();
    }

    let columns = shown.iter().map(Vec::len).max().unwrap_or(0);
    let cells: Vec<Vec<String>> = shown
        .iter()
        .map(|row| {
            (0..columns)
                .map(|col| truncate_chars(row.get(col).map(String::as_str).unwrap_or(""), PREVIEW_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(col.to_string().len()))
                .max()
                .unwrap_or(1)
        })
        .collect();
    let index_width = (shown.len() - 1).to_string().len();

    let mut lines = Vec::with_capacity(shown.len() + 1);
    let mut header = " ".repeat(index_width);
    for (col, width) in widths.iter().enumerate() {
        header.push_str(&format!("  {:>w$}", col, w = width));
    }
    lines.push(header.trim_end().to_string());

    for (index, row) in cells.iter().enumerate() {
        let mut line = format!("{:<w$}", index, w = index_width);
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str(&format!("  {:>w$}", cell, w = width));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
