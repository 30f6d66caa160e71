use crate::core::{LineReader, ReadOutcome};
use crate::utils::error::Result;
use rustyline::error::ReadlineError;
use rustyline::{history::DefaultHistory, Config, Editor};
use std::io::{BufRead, IsTerminal, Stdin, StdinLock, Stdout, Write};

/// 終端輸入來源。
///
/// stdin 是終端時交給 rustyline（Ctrl-C 回報為 [`ReadOutcome::Interrupted`]）；
/// 管道或重導向時自行輸出提示再逐行讀取。
pub enum TerminalReader {
    Interactive(Editor<(), DefaultHistory>),
    Piped(StreamReader<StdinLock<'static>, Stdout>),
}

impl TerminalReader {
    pub fn new() -> Result<Self> {
        Self::for_stdin(std::io::stdin())
    }

    fn for_stdin(stdin: Stdin) -> Result<Self> {
        if stdin.is_terminal() {
            let config = Config::builder().auto_add_history(false).build();
            Ok(Self::Interactive(Editor::with_config(config)?))
        } else {
            tracing::debug!("stdin is not a terminal, reading lines directly");
            Ok(Self::Piped(StreamReader::new(stdin.lock(), std::io::stdout())))
        }
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self {
            Self::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(ReadOutcome::Line(line)),
                Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                Err(err) => Err(err.into()),
            },
            Self::Piped(reader) => reader.read_line(prompt),
        }
    }
}

/// 從任意 `BufRead` 讀行，提示寫到 `out`
pub struct StreamReader<I: BufRead, O: Write> {
    input: I,
    out: O,
}

impl<I: BufRead, O: Write> StreamReader<I, O> {
    pub fn new(input: I, out: O) -> Self {
        Self { input, out }
    }
}

impl<I: BufRead, O: Write> LineReader for StreamReader<I, O> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(ReadOutcome::Eof);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(ReadOutcome::Line(line))
    }
}
