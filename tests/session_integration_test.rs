use simple_calc::core::session::{EXIT_MESSAGE, FIRST_PROMPT, INVALID_INPUT, SECOND_PROMPT, WELCOME};
use simple_calc::{
    add_numbers, CalcError, Calculation, CalculatorSession, LineReader, ReadOutcome, Result,
    SessionOutcome,
};
use std::collections::VecDeque;

/// 依序回傳預先設定的輸入，並記錄顯示過的提示
struct ScriptedReader {
    script: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
}

impl ScriptedReader {
    fn lines(lines: &[&str]) -> Self {
        Self::from_outcomes(
            lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
        )
    }

    fn from_outcomes(script: Vec<ReadOutcome>) -> Self {
        Self {
            script: script.into(),
            prompts: Vec::new(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

/// 讀取時總是失敗的輸入來源
struct BrokenReader;

impl LineReader for BrokenReader {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "terminal gone").into())
    }
}

fn run_session(reader: &mut ScriptedReader) -> (SessionOutcome, String) {
    let mut out = Vec::new();
    let outcome = CalculatorSession::new(reader, &mut out)
        .run()
        .expect("session should not fail");
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_session_output() {
    let mut reader = ScriptedReader::lines(&["2.5", "4.5"]);
    let (outcome, output) = run_session(&mut reader);

    let expected = format!("{}\n5 + 3 = 8\n2.5 + 4.5 = 7\n", WELCOME);
    assert_eq!(output, expected);
    assert_eq!(
        outcome,
        SessionOutcome::Completed(Calculation {
            lhs: 2.5,
            rhs: 4.5,
            sum: 7.0
        })
    );
    assert_eq!(reader.prompts, vec![FIRST_PROMPT, SECOND_PROMPT]);
}

#[test]
fn test_demonstration_line_is_always_printed() {
    let mut reader = ScriptedReader::lines(&[]);
    let (_, output) = run_session(&mut reader);

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(WELCOME));
    assert_eq!(lines.next(), Some("5 + 3 = 8"));
}

#[test]
fn test_whitespace_and_negative_operands() {
    let mut reader = ScriptedReader::lines(&["  -1.25 ", "\t10\r"]);
    let (outcome, output) = run_session(&mut reader);

    assert_eq!(outcome, SessionOutcome::Completed(Calculation::new(-1.25, 10.0)));
    assert!(output.ends_with("-1.25 + 10 = 8.75\n"));
}

#[test]
fn test_invalid_first_operand() {
    let mut reader = ScriptedReader::lines(&["abc", "4.5"]);
    let (outcome, output) = run_session(&mut reader);

    assert_eq!(outcome, SessionOutcome::InvalidInput);
    assert!(output.ends_with(&format!("{}\n", INVALID_INPUT)));
    assert!(!output.contains("4.5"));
    // 第一個輸入無效時不再顯示第二個提示
    assert_eq!(reader.prompts, vec![FIRST_PROMPT]);
}

#[test]
fn test_invalid_second_operand() {
    let mut reader = ScriptedReader::lines(&["1", "one"]);
    let (outcome, output) = run_session(&mut reader);

    assert_eq!(outcome, SessionOutcome::InvalidInput);
    assert_eq!(output.matches(INVALID_INPUT).count(), 1);
    assert_eq!(reader.prompts.len(), 2);
}

#[test]
fn test_interrupt_at_first_prompt() {
    let mut reader = ScriptedReader::from_outcomes(vec![ReadOutcome::Interrupted]);
    let (outcome, output) = run_session(&mut reader);

    assert_eq!(outcome, SessionOutcome::Interrupted);
    assert_eq!(output, format!("{}\n5 + 3 = 8\n{}\n", WELCOME, EXIT_MESSAGE));
    assert_eq!(reader.prompts, vec![FIRST_PROMPT]);
}

#[test]
fn test_interrupt_at_second_prompt_prints_no_result() {
    let mut reader = ScriptedReader::from_outcomes(vec![
        ReadOutcome::Line("3".to_string()),
        ReadOutcome::Interrupted,
    ]);
    let (outcome, output) = run_session(&mut reader);

    assert_eq!(outcome, SessionOutcome::Interrupted);
    assert!(output.ends_with(&format!("{}\n", EXIT_MESSAGE)));
    assert_eq!(output.matches(" = ").count(), 1);
}

#[test]
fn test_io_failure_propagates() {
    let mut out = Vec::new();
    let result = CalculatorSession::new(BrokenReader, &mut out).run();

    assert!(matches!(result, Err(CalcError::IoError(_))));
}

#[test]
fn test_add_numbers_matches_native_addition() {
    let values = [0.0, -0.0, 1.5, -2.75, 1e-300, 1e300, 123456.789];
    for &a in &values {
        for &b in &values {
            assert_eq!(add_numbers(a, b), a + b);
            assert_eq!(add_numbers(a, b), add_numbers(b, a));
        }
    }
}
