use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excel-sum")]
#[command(about = "엑셀 등록상품명 키워드 합계 계산기", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 키워드로 상품을 찾아 할인적용가 합계를 계산
    Sum {
        /// 엑셀 파일 (xlsx/xls)
        #[arg(required = true)]
        file: PathBuf,

        /// 검색 키워드 (생략 시 입력 프롬프트, hdd/ssd는 모델코드 포함)
        keyword: Option<String>,

        /// 모델코드로만 추가된 항목 표 출력
        #[arg(short, long)]
        audit: bool,

        /// 결과 전체를 JSON으로 출력
        #[arg(long)]
        json: bool,

        /// 감사용 엑셀 저장 경로
        #[arg(short, long)]
        export_audit: Option<PathBuf>,

        /// 감사 표 최대 건수 (기본: 설정값, 300)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 시트 상단 미리보기와 헤더 탐지 결과 출력
    Preview {
        /// 엑셀 파일 (xlsx/xls)
        #[arg(required = true)]
        file: PathBuf,

        /// 표시할 행 수 (기본: 설정값, 12)
        #[arg(short, long)]
        rows: Option<usize>,
    },

    /// 설정을 표시/초기화
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 기본 설정 파일 생성
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sum_with_keyword() {
        let cli = Cli::parse_from(["excel-sum", "sum", "data.xlsx", "hdd", "--audit"]);
        match cli.command {
            Commands::Sum { file, keyword, audit, json, .. } => {
                assert_eq!(file, PathBuf::from("data.xlsx"));
                assert_eq!(keyword.as_deref(), Some("hdd"));
                assert!(audit);
                assert!(!json);
            }
            _ => panic!("sum 명령이어야 함"),
        }
    }

    #[test]
    fn test_parse_sum_without_keyword() {
        let cli = Cli::parse_from(["excel-sum", "-v", "sum", "data.xls"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Sum { keyword: None, .. }));
    }

    #[test]
    fn test_parse_preview_rows() {
        let cli = Cli::parse_from(["excel-sum", "preview", "a.xlsx", "--rows", "5"]);
        assert!(matches!(cli.command, Commands::Preview { rows: Some(5), .. }));
    }

    #[test]
    fn test_sum_requires_file() {
        assert!(Cli::try_parse_from(["excel-sum", "sum"]).is_err());
    }
}
