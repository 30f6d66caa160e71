use crate::domain::model::ReadOutcome;
use crate::utils::error::Result;

/// 互動輸入來源：顯示提示並讀取一行
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        (**self).read_line(prompt)
    }
}
