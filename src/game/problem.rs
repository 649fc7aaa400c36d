//! Problem generation.

use crate::game::modes::{Operation, OperationMode};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Operand range for both sides of an addition.
pub const ADDITION_OPERANDS: RangeInclusive<i32> = 1..=10;
/// Range of the minuend in a subtraction. The subtrahend is drawn from `1..=minuend`.
pub const SUBTRACTION_MINUEND: RangeInclusive<i32> = 5..=15;

/// A single arithmetic problem with its expected answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    lhs: i32,
    rhs: i32,
    operation: Operation,
}

impl Problem {
    /// Build a problem from explicit operands.
    ///
    /// Used for replaying a known problem; generated problems go through
    /// [`Problem::generate`].
    pub fn new(lhs: i32, rhs: i32, operation: Operation) -> Self {
        Self { lhs, rhs, operation }
    }

    /// Draw a fresh problem for `mode`.
    ///
    /// Mixed mode flips a coin per problem; the stored mode is not touched.
    pub fn generate(mode: OperationMode, rng: &mut dyn RandomSource) -> Self {
        let operation = match mode {
            OperationMode::Addition => Operation::Addition,
            OperationMode::Subtraction => Operation::Subtraction,
            OperationMode::Mixed => {
                if rng.coin() {
                    Operation::Subtraction
                } else {
                    Operation::Addition
                }
            }
        };

        match operation {
            Operation::Addition => {
                let lhs = rng.range(*ADDITION_OPERANDS.start(), *ADDITION_OPERANDS.end());
                let rhs = rng.range(*ADDITION_OPERANDS.start(), *ADDITION_OPERANDS.end());
                Self::new(lhs, rhs, operation)
            }
            Operation::Subtraction => {
                let lhs = rng.range(*SUBTRACTION_MINUEND.start(), *SUBTRACTION_MINUEND.end());
                // dependent draw keeps the difference non-negative
                let rhs = rng.range(1, lhs);
                Self::new(lhs, rhs, operation)
            }
        }
    }

    pub fn lhs(&self) -> i32 {
        self.lhs
    }

    pub fn rhs(&self) -> i32 {
        self.rhs
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn answer(&self) -> i32 {
        match self.operation {
            Operation::Addition => self.lhs + self.rhs,
            Operation::Subtraction => self.lhs - self.rhs,
        }
    }

    /// Prompt text, e.g. `"3 + 4 = ?"`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.lhs, self.operation.symbol(), self.rhs)
    }
}
