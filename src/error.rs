use thiserror::Error;

/// Errors raised by the quiz engine and its input boundary.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Level below 1, or too large for its operand range to fit in a `u64`.
    #[error("invalid level {0}: must be at least 1 and small enough for 10^level to fit in 64 bits")]
    InvalidLevel(i64),

    /// A menu choice outside the offered options.
    #[error("invalid {what} selection {value}: expected 1..={max}")]
    InvalidSelection {
        what: &'static str,
        value: i64,
        max: i64,
    },

    #[error("invalid question count {0}: must be positive")]
    InvalidQuestionCount(i64),

    /// Input that is not a number. Handled by re-prompting at the console.
    #[error("not a number: {0:?}")]
    ParseFailure(String),

    /// The user aborted the game (end of input or interrupted read).
    #[error("game interrupted")]
    UserInterrupt,

    #[error("session already started")]
    AlreadyStarted,

    #[error("session not started")]
    NotStarted,

    #[error("invalid config {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` for errors that must end the process without a result.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, QuizError::UserInterrupt)
    }
}
