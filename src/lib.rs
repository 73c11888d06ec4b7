//! Arithmetic drill engine: operand ranges per level, question generation,
//! answer scoring and session timing. The console front end lives in `main.rs`.

pub mod config;
pub mod error;
pub mod input;
pub mod level;
pub mod operation;
pub mod question;
pub mod report;
pub mod session;

pub use error::QuizError;
pub use level::NumberRangeGenerator;
pub use session::{QuizSession, SessionResult};
