use crate::utils::error::{Result, EXIT_MESSAGE};
use std::io::Write;

/// 捕捉 SIGINT：印出退出訊息後以退出碼 0 結束。
///
/// 終端模式下 rustyline 會直接把 Ctrl-C 當成按鍵處理，此處理器只在
/// stdin 為管道、重導向或訊號由外部送來時觸發。
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{}", EXIT_MESSAGE);
        let _ = stdout.flush();
        std::process::exit(0);
    })?;

    tracing::debug!("Interrupt handler installed");
    Ok(())
}
