use crate::error::QuizError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const NOT_A_NUMBER: &str = "\n\n Not a valid option. Please, choose a number.";
pub const NOT_POSITIVE: &str = "\n\n Not a valid number. It should be positive.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid option.";
pub const TOO_LARGE: &str = "\n\n Not a valid number. It is too large.";

/// Obtains positive integer answers from the player
pub trait AnswerProvider {
    /// Block until a positive integer is available for `prompt`.
    /// Errors only when the player aborts or input fails.
    fn ask_int(&mut self, prompt: &str) -> Result<u64, QuizError>;
}

/// Outcome of parsing one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInt {
    Positive(u64),
    NotPositive,
}

/// Parse a trimmed line as an integer, separating non-positive values
/// from unparseable input.
pub fn parse_int(line: &str) -> Result<ParsedInt, QuizError> {
    let value: i64 = line
        .trim()
        .parse()
        .map_err(|_| QuizError::ParseFailure(line.trim().to_string()))?;
    Ok(match u64::try_from(value) {
        Ok(v) if v > 0 => ParsedInt::Positive(v),
        _ => ParsedInt::NotPositive,
    })
}

/// Line-oriented console provider over any reader/writer pair
pub struct ConsolePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a line to the player.
    pub fn say(&mut self, text: &str) -> Result<(), QuizError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one line. End of input counts as an abort.
    fn read_line(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(QuizError::UserInterrupt),
            Ok(_) => Ok(line),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(QuizError::UserInterrupt),
            Err(e) => Err(e.into()),
        }
    }

    /// Numbered menu; re-prompts until the choice is one of `options`.
    pub fn choose_option(&mut self, message: &str, options: &[&str]) -> Result<i64, QuizError> {
        loop {
            writeln!(self.writer, "{message}:")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.writer, " {}. {}", i + 1, option)?;
            }
            let choice = self.ask_int("Choose an option: ")?;
            if (1..=options.len() as u64).contains(&choice) {
                return Ok(choice as i64);
            }
            self.say(INVALID_CHOICE)?;
        }
    }

    /// Like `ask_int`, but re-prompts until the value is at most `max`.
    pub fn ask_int_at_most(&mut self, prompt: &str, max: u64) -> Result<u64, QuizError> {
        loop {
            let value = self.ask_int(prompt)?;
            if value <= max {
                return Ok(value);
            }
            self.say(TOO_LARGE)?;
        }
    }

    /// Readiness gate. `Ok(true)` on `y`, `Ok(false)` on `n`.
    pub fn confirm_ready(&mut self) -> Result<bool, QuizError> {
        loop {
            let answer = self.read_line("\n Are you ready to start? y/n: ")?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Choose y or n")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerProvider for ConsolePrompter<R, W> {
    fn ask_int(&mut self, prompt: &str) -> Result<u64, QuizError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_int(&line) {
                Ok(ParsedInt::Positive(v)) => return Ok(v),
                Ok(ParsedInt::NotPositive) => self.say(NOT_POSITIVE)?,
                Err(e) => {
                    debug!(error = %e, "re-prompting");
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }
}

/// Replays queued answers; an empty queue behaves like the player quitting.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<u64>,
    prompts: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I: IntoIterator<Item = u64>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl AnswerProvider for ScriptedAnswers {
    fn ask_int(&mut self, prompt: &str) -> Result<u64, QuizError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(QuizError::UserInterrupt)
    }
}
