//! tracing 초기화
//!
//! 우선순위: RUST_LOG → --verbose(debug) → 설정 파일의 log_level

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool, default_level: &str) {
    let fallback = if verbose { "debug" } else { default_level };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
