use crate::operation::Operation;

/// A single drill question. `operand_a` is always the larger operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub index: u32,
    pub operand_a: u64,
    pub operand_b: u64,
    pub operation: Operation,
    pub expected: f64,
}

impl Question {
    /// Build a question, putting the larger operand first.
    pub fn new(index: u32, operation: Operation, x: u64, y: u64) -> Self {
        let (operand_a, operand_b) = if x >= y { (x, y) } else { (y, x) };
        Self {
            index,
            operand_a,
            operand_b,
            operation,
            expected: operation.apply(operand_a, operand_b),
        }
    }

    /// Prompt shown to the player, e.g. ` 2/10:  57 + 12 = `.
    pub fn prompt(&self, total: u32) -> String {
        format!(
            " {}/{}:  {} {} {} = ",
            self.index,
            total,
            self.operand_a,
            self.operation.symbol(),
            self.operand_b
        )
    }

    /// Numeric comparison, so `3` matches `3.0`.
    pub fn is_correct(&self, answer: u64) -> bool {
        answer as f64 == self.expected
    }
}
