use crate::core::{Calculation, LineReader, ReadOutcome, SessionOutcome};
use crate::utils::error::{CalcError, Result};
pub use crate::utils::error::{EXIT_MESSAGE, INVALID_INPUT};
use crate::utils::validation::parse_operand;
use std::io::Write;

pub const WELCOME: &str = "欢迎使用测试计算器!";
pub const FIRST_PROMPT: &str = "请输入第一个数字: ";
pub const SECOND_PROMPT: &str = "请输入第二个数字: ";

/// 示例計算的運算元
pub const DEMO_OPERANDS: (i64, i64) = (5, 3);

/// 互動式計算流程：歡迎、示例計算、讀取兩個數字、輸出結果。
///
/// 無效輸入與中斷都以 [`CalcError`] 回傳並在 [`run`](Self::run) 內分支處理，
/// 只有真正的 I/O 錯誤會向上傳遞。
pub struct CalculatorSession<R: LineReader, W: Write> {
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> CalculatorSession<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        writeln!(self.out, "{}", WELCOME)?;

        // 示例計算
        let (a, b) = DEMO_OPERANDS;
        writeln!(self.out, "{}", Calculation::new(a, b))?;

        // 交互式計算
        let outcome = match self.calculate() {
            Ok(calculation) => {
                tracing::debug!("Calculated {:?}", calculation);
                writeln!(self.out, "{}", calculation)?;
                SessionOutcome::Completed(calculation)
            }
            Err(e @ CalcError::InvalidNumber { .. }) => {
                tracing::warn!("{}", e);
                writeln!(self.out, "{}", e.user_friendly_message())?;
                SessionOutcome::InvalidInput
            }
            Err(e @ CalcError::Interrupted) => {
                tracing::debug!("{}", e);
                writeln!(self.out, "{}", e.user_friendly_message())?;
                SessionOutcome::Interrupted
            }
            Err(e) => return Err(e),
        };

        self.out.flush()?;
        Ok(outcome)
    }

    fn calculate(&mut self) -> Result<Calculation<f64>> {
        let num1 = self.read_operand(FIRST_PROMPT)?;
        let num2 = self.read_operand(SECOND_PROMPT)?;
        Ok(Calculation::new(num1, num2))
    }

    fn read_operand(&mut self, prompt: &str) -> Result<f64> {
        // 提示出現前先送出已寫入的內容
        self.out.flush()?;

        match self.reader.read_line(prompt)? {
            ReadOutcome::Line(line) => parse_operand(&line),
            ReadOutcome::Interrupted => Err(CalcError::Interrupted),
            ReadOutcome::Eof => {
                tracing::debug!("Input closed at prompt {:?}", prompt.trim_end());
                Err(CalcError::Interrupted)
            }
        }
    }
}
