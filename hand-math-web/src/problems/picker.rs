//! NumberPicker problems: five numbers, exactly one of the asked type

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::numbers::NumberType;

pub const PICK_MIN: u32 = 1;
pub const PICK_MAX: u32 = 20;
pub const PICK_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NumberPickerProblem {
    pub numbers: [u32; PICK_COUNT],
    pub number_type: NumberType,
    pub correct_answer: u32,
}

impl NumberPickerProblem {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ty = NumberType::random(rng);
        Self::generate_of_type(rng, ty)
    }

    /// One number matching `ty` and four distinct non-matching ones, shuffled
    pub fn generate_of_type<R: Rng + ?Sized>(rng: &mut R, ty: NumberType) -> Self {
        let (matching, others): (Vec<u32>, Vec<u32>) =
            (PICK_MIN..=PICK_MAX).partition(|&n| ty.matches(n));

        // Every type has ≥1 match and ≥4 non-matches in 1..=20
        let correct_answer = matching.choose(rng).copied().unwrap_or(PICK_MIN);
        let mut numbers = [correct_answer; PICK_COUNT];
        for (slot, n) in numbers[1..].iter_mut().zip(others.choose_multiple(rng, PICK_COUNT - 1)) {
            *slot = *n;
        }
        numbers.shuffle(rng);

        Self { numbers, number_type: ty, correct_answer }
    }
}
