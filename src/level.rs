use crate::error::QuizError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::ops::RangeInclusive;

const LEVEL_LABELS: [&str; 5] = ["Easy", "Medium", "Hard", "Super Hard", "Difficult"];

/// Difficulty ordinal (1..=5) controlling the digit count of operands
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    pub const MAX: u8 = LEVEL_LABELS.len() as u8;

    /// Validate a 1-based menu choice.
    pub fn new(choice: i64) -> Result<Self, QuizError> {
        match u8::try_from(choice) {
            Ok(l) if (1..=Self::MAX).contains(&l) => Ok(Self(l)),
            _ => Err(QuizError::InvalidSelection {
                what: "level",
                value: choice,
                max: Self::MAX as i64,
            }),
        }
    }

    pub fn ordinal(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        LEVEL_LABELS[usize::from(self.0 - 1)]
    }

    pub fn labels() -> &'static [&'static str] {
        &LEVEL_LABELS
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Level {
    type Error = QuizError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        i64::from(level.0)
    }
}

/// Source of operand values; injected so sessions can be replayed.
pub trait OperandSource {
    /// Draw one value. Real sources stay inside `range`.
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64;
}

/// Uniform draws from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomOperands<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOperands<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OperandSource for RandomOperands<R> {
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.rng.gen_range(range)
    }
}

/// Replays a fixed list of operands, cycling when exhausted.
/// Values are returned as-is, even outside the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedOperands {
    values: VecDeque<u64>,
}

impl ScriptedOperands {
    pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl OperandSource for ScriptedOperands {
    fn draw(&mut self, range: RangeInclusive<u64>) -> u64 {
        match self.values.pop_front() {
            Some(v) => {
                self.values.push_back(v);
                v
            }
            None => *range.start(),
        }
    }
}

/// Maps difficulty levels to operand ranges and draws operands from them
#[derive(Debug, Clone)]
pub struct NumberRangeGenerator<S: OperandSource> {
    source: S,
}

impl<S: OperandSource> NumberRangeGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Inclusive operand range for `level`: `(10^(level-1), 10^level - 1)`.
    ///
    /// ```text
    /// 1 => [1, 9]
    /// 2 => [10, 99]
    /// 3 => [100, 999]
    /// ```
    pub fn range_for(level: i64) -> Result<(u64, u64), QuizError> {
        if level < 1 {
            return Err(QuizError::InvalidLevel(level));
        }
        let exp = u32::try_from(level).map_err(|_| QuizError::InvalidLevel(level))?;
        let max = 10_u64
            .checked_pow(exp)
            .ok_or(QuizError::InvalidLevel(level))?
            - 1;
        Ok((10_u64.pow(exp - 1), max))
    }

    pub fn random_operand(&mut self, level: i64) -> Result<u64, QuizError> {
        let (min, max) = Self::range_for(level)?;
        Ok(self.source.draw(min..=max))
    }
}
