use crate::error::QuizError;
use crate::input::AnswerProvider;
use crate::level::{Level, NumberRangeGenerator, OperandSource};
use crate::operation::{round_to, Operation};
use crate::question::Question;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Validated, fixed parameters of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub operation: Operation,
    pub level: Level,
    pub num_questions: u32,
}

impl SessionSettings {
    pub fn new(operation: Operation, level: Level, num_questions: i64) -> Result<Self, QuizError> {
        let num_questions = match u32::try_from(num_questions) {
            Ok(n) if n > 0 => n,
            _ => return Err(QuizError::InvalidQuestionCount(num_questions)),
        };
        Ok(Self {
            operation,
            level,
            num_questions,
        })
    }

    /// Validate raw menu numbers.
    pub fn from_choices(operation: i64, level: i64, num_questions: i64) -> Result<Self, QuizError> {
        Self::new(
            Operation::from_choice(operation)?,
            Level::new(level)?,
            num_questions,
        )
    }
}

/// Final, immutable outcome of a completed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResult {
    operation: Operation,
    level: Level,
    num_questions: u32,
    num_correct: u32,
    num_incorrect: u32,
    elapsed_seconds: f64,
}

impl SessionResult {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    pub fn num_incorrect(&self) -> u32 {
        self.num_incorrect
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn is_perfect(&self) -> bool {
        self.num_correct == self.num_questions
    }

    /// Everything except the wall-clock time.
    pub fn score(&self) -> (Operation, Level, u32, u32, u32) {
        (
            self.operation,
            self.level,
            self.num_questions,
            self.num_correct,
            self.num_incorrect,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    NotStarted,
    Running { started_at: Instant },
    Completed,
}

/// Runs one drill: generates questions, scores answers and times the session
#[derive(Debug)]
pub struct QuizSession<S: OperandSource> {
    settings: SessionSettings,
    generator: NumberRangeGenerator<S>,
    phase: SessionPhase,
    num_correct: u32,
    num_incorrect: u32,
}

impl<S: OperandSource> QuizSession<S> {
    pub fn new(settings: SessionSettings, source: S) -> Self {
        Self {
            settings,
            generator: NumberRangeGenerator::new(source),
            phase: SessionPhase::NotStarted,
            num_correct: 0,
            num_incorrect: 0,
        }
    }

    pub fn from_choices(
        operation: i64,
        level: i64,
        num_questions: i64,
        source: S,
    ) -> Result<Self, QuizError> {
        let settings = SessionSettings::from_choices(operation, level, num_questions)?;
        Ok(Self::new(settings, source))
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    pub fn num_incorrect(&self) -> u32 {
        self.num_incorrect
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        match self.phase {
            SessionPhase::NotStarted => {
                self.phase = SessionPhase::Running {
                    started_at: Instant::now(),
                };
                info!(
                    operation = %self.settings.operation,
                    level = self.settings.level.ordinal(),
                    questions = self.settings.num_questions,
                    "session started"
                );
                Ok(())
            }
            _ => Err(QuizError::AlreadyStarted),
        }
    }

    fn next_question(&mut self, index: u32) -> Result<Question, QuizError> {
        let level = i64::from(self.settings.level.ordinal());
        let x = self.generator.random_operand(level)?;
        let y = self.generator.random_operand(level)?;
        Ok(Question::new(index, self.settings.operation, x, y))
    }

    /// Ask every question in order and produce the result.
    /// A provider error aborts the session without a result.
    pub fn run<P: AnswerProvider>(&mut self, provider: &mut P) -> Result<SessionResult, QuizError> {
        let started_at = match self.phase {
            SessionPhase::Running { started_at } => started_at,
            SessionPhase::NotStarted => return Err(QuizError::NotStarted),
            SessionPhase::Completed => return Err(QuizError::AlreadyStarted),
        };

        let total = self.settings.num_questions;
        for index in 1..=total {
            let question = self.next_question(index)?;
            let answer = provider.ask_int(&question.prompt(total))?;
            let correct = question.is_correct(answer);
            if correct {
                self.num_correct += 1;
            } else {
                self.num_incorrect += 1;
            }
            debug!(
                index,
                a = question.operand_a,
                b = question.operand_b,
                expected = question.expected,
                answer,
                correct,
                "question answered"
            );
        }

        let result = SessionResult {
            operation: self.settings.operation,
            level: self.settings.level,
            num_questions: total,
            num_correct: self.num_correct,
            num_incorrect: self.num_incorrect,
            elapsed_seconds: round_to(started_at.elapsed().as_secs_f64(), 2),
        };
        self.phase = SessionPhase::Completed;
        info!(
            correct = result.num_correct,
            incorrect = result.num_incorrect,
            elapsed = result.elapsed_seconds,
            "session completed"
        );
        Ok(result)
    }

    /// `start` followed by `run`.
    pub fn play<P: AnswerProvider>(&mut self, provider: &mut P) -> Result<SessionResult, QuizError> {
        self.start()?;
        self.run(provider)
    }
}
