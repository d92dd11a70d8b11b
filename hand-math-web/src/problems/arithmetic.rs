//! Finger-count addition problems

use rand::Rng;
use serde::Serialize;

/// Largest addend; two hands can show at most 10
pub const MAX_ADDEND: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ArithmeticProblem {
    pub num1: u32,
    pub num2: u32,
    pub answer: u32,
}

impl ArithmeticProblem {
    pub fn new(num1: u32, num2: u32) -> Self {
        Self { num1, num2, answer: num1 + num2 }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(1..=MAX_ADDEND), rng.gen_range(1..=MAX_ADDEND))
    }

    pub fn question(&self) -> String {
        format!("{} + {} = ?", self.num1, self.num2)
    }
}
