use clap::Parser;
use simple_calc::adapters::signal::install_interrupt_handler;
use simple_calc::utils::logger;
use simple_calc::{CalculatorSession, CliConfig, TerminalReader};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting simple-calc");
    tracing::debug!("CLI config: {:?}", config);

    install_interrupt_handler()?;
    let reader = TerminalReader::new()?;
    let mut session = CalculatorSession::new(reader, std::io::stdout());

    // 無效輸入與中斷都屬正常結束，退出碼為 0
    let outcome = session.run().map_err(|e| {
        tracing::error!("❌ Session failed: {}", e);
        anyhow::anyhow!(e.user_friendly_message())
    })?;
    tracing::info!("Session finished: {:?}", outcome);

    Ok(())
}
