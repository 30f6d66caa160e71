use crate::utils::error::{CalcError, Result};

/// 將使用者輸入解析為浮點數，前後空白會先去掉
pub fn parse_operand(input: &str) -> Result<f64> {
    let trimmed = input.trim();

    trimmed.parse::<f64>().map_err(|e| {
        tracing::debug!("Rejected operand {:?}: {}", trimmed, e);
        CalcError::InvalidNumber {
            input: trimmed.to_string(),
        }
    })
}
