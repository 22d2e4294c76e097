use clap::Parser;
use excel_sum_rust::{cli, commands, config, error, logging};
use cli::{Cli, Commands};
use commands::SumOptions;
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // config 명령은 깨진 설정 파일도 덮어쓸 수 있어야 하므로 읽지 않는다
    let config = match cli.command {
        Commands::Config { .. } => Config::default(),
        _ => Config::load()?,
    };
    logging::init_tracing(cli.verbose, &config.log_level);

    match cli.command {
        Commands::Sum { file, keyword, audit, json, export_audit, limit } => {
            let keyword = match keyword {
                Some(keyword) => keyword,
                None => commands::prompt_keyword()?,
            };

            let options = SumOptions {
                audit,
                json,
                export_audit,
                limit: limit.unwrap_or(config.audit_limit),
            };
            let output = commands::run_sum(&file, &keyword, &options)?;
            println!("{}", output);
        }

        Commands::Preview { file, rows } => {
            let output = commands::run_preview(&file, rows.unwrap_or(config.preview_rows))?;
            println!("{}", output);
        }

        Commands::Config { show, init } => {
            println!("{}", commands::run_config(show, init)?);
        }
    }

    Ok(())
}
