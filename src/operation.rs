use crate::error::QuizError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The arithmetic operation drilled in a session
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    #[strum(serialize = "Division [1 decimal]")]
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Map a 1-based menu choice to an operation.
    pub fn from_choice(choice: i64) -> Result<Self, QuizError> {
        usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(QuizError::InvalidSelection {
                what: "operation",
                value: choice,
                max: Self::ALL.len() as i64,
            })
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }

    /// Apply the operation and round the result to one decimal place.
    pub fn apply(&self, a: u64, b: u64) -> f64 {
        let (a, b) = (a as f64, b as f64);
        let raw = match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => a / b,
        };
        round_to(raw, 1)
    }
}

/// Round the exact binary value of `value` to `places` decimals.
///
/// `1.95` is stored as `1.9499999...`, so it rounds to `1.9`; scaling by ten
/// first would give `19.5` and round up.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_choice_maps_menu_order() {
        assert_eq!(Operation::from_choice(1).unwrap(), Operation::Addition);
        assert_eq!(Operation::from_choice(2).unwrap(), Operation::Subtraction);
        assert_eq!(Operation::from_choice(3).unwrap(), Operation::Multiplication);
        assert_eq!(Operation::from_choice(4).unwrap(), Operation::Division);
    }

    #[test]
    fn test_from_choice_out_of_range() {
        for bad in [0, 5, -1, i64::MAX] {
            assert_matches!(
                Operation::from_choice(bad),
                Err(QuizError::InvalidSelection { what: "operation", .. })
            );
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Operation::Addition.to_string(), "Addition");
        assert_eq!(Operation::Division.to_string(), "Division [1 decimal]");
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Addition.apply(7, 3), 10.0);
        assert_eq!(Operation::Subtraction.apply(70, 30), 40.0);
        assert_eq!(Operation::Multiplication.apply(12, 11), 132.0);
        assert_eq!(Operation::Division.apply(900, 300), 3.0);
        assert_eq!(Operation::Division.apply(10, 3), 3.3);
        assert_eq!(Operation::Division.apply(99, 10), 9.9);
        assert_eq!(Operation::Division.apply(87, 11), 7.9);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.26, 1), 1.3);
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(4.0, 1), 4.0);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_division_near_tie_rounds_down() {
        // 39 / 20 is just below 1.95 in binary
        assert_eq!(Operation::Division.apply(39, 20), 1.9);
        assert_eq!(Operation::Division.apply(78, 40), 1.9);
    }
}
