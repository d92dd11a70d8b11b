//! Number predicates used by the generators

use rand::Rng;
use serde::Serialize;

pub fn is_even(n: u32) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: u32) -> bool {
    !is_even(n)
}

/// Trial division up to √n
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn is_perfect_square(n: u128) -> bool {
    let root = (n as f64).sqrt() as u128;
    // Float sqrt can land one off for large n
    (root.saturating_sub(1)..=root + 1).any(|r| r * r == n)
}

/// n is Fibonacci iff 5n² + 4 or 5n² − 4 is a perfect square
pub fn is_fibonacci(n: u32) -> bool {
    let sq = 5 * u128::from(n) * u128::from(n);
    is_perfect_square(sq + 4) || (sq >= 4 && is_perfect_square(sq - 4))
}

/// What the NumberPicker asks the player to find
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Even,
    Odd,
    Prime,
    Fibonacci,
}

impl NumberType {
    pub const ALL: [NumberType; 4] = [
        NumberType::Even,
        NumberType::Odd,
        NumberType::Prime,
        NumberType::Fibonacci,
    ];

    pub fn matches(&self, n: u32) -> bool {
        match self {
            NumberType::Even => is_even(n),
            NumberType::Odd => is_odd(n),
            NumberType::Prime => is_prime(n),
            NumberType::Fibonacci => is_fibonacci(n),
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            NumberType::Even => "Find the even number",
            NumberType::Odd => "Find the odd number",
            NumberType::Prime => "Find the prime number",
            NumberType::Fibonacci => "Find the Fibonacci number",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// RightBox target: which numbers belong in the box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn matches(&self, n: u32) -> bool {
        match self {
            Parity::Even => is_even(n),
            Parity::Odd => is_odd(n),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) { Parity::Even } else { Parity::Odd }
    }
}
