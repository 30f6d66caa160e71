use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVE: &str = "simple_calc=warn";
const VERBOSE_DIRECTIVE: &str = "simple_calc=debug,warn";

/// `RUST_LOG` 優先，否則依 `--verbose` 決定
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        QUIET_DIRECTIVE
    }
}

/// 日誌寫到 stderr 且不帶時間戳，stdout 只保留計算器的對話內容
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    // 重複初始化（例如測試中）時保留既有的 subscriber
    if tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set, keeping it");
    }
}
