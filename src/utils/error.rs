use rustyline::error::ReadlineError;
use thiserror::Error;

pub const INVALID_INPUT: &str = "请输入有效的数字!";
pub const EXIT_MESSAGE: &str = "\n程序已退出!";

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("Input interrupted by user")]
    Interrupted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    ReadlineError(#[from] ReadlineError),

    #[error("Signal handler error: {0}")]
    SignalError(#[from] ctrlc::Error),
}

impl CalcError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidNumber { .. } => INVALID_INPUT.to_string(),
            CalcError::Interrupted => EXIT_MESSAGE.to_string(),
            CalcError::IoError(e) => format!("終端讀寫失敗: {}", e),
            CalcError::ReadlineError(e) => format!("無法讀取輸入: {}", e),
            CalcError::SignalError(e) => format!("無法註冊中斷處理: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
