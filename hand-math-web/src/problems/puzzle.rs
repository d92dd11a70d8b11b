//! Multiple-choice puzzles: a question and four options

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const OPTION_COUNT: usize = 4;

/// Distractors are drawn from answer ± this
const DISTRACTOR_SPREAD: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PuzzleKind {
    Sum,
    Difference,
    Product,
    MissingAddend,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MathPuzzleProblem {
    pub question: String,
    pub options: [u32; OPTION_COUNT],
    pub correct_answer: u32,
}

impl MathPuzzleProblem {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = [
            PuzzleKind::Sum,
            PuzzleKind::Difference,
            PuzzleKind::Product,
            PuzzleKind::MissingAddend,
        ][rng.gen_range(0..4)];

        let (question, answer) = match kind {
            PuzzleKind::Sum => {
                let (a, b) = (rng.gen_range(1..=20), rng.gen_range(1..=20));
                (format!("{} + {} = ?", a, b), a + b)
            }
            PuzzleKind::Difference => {
                let a = rng.gen_range(5..=20);
                let b = rng.gen_range(1..=a);
                (format!("{} - {} = ?", a, b), a - b)
            }
            PuzzleKind::Product => {
                let (a, b) = (rng.gen_range(1..=10), rng.gen_range(1..=10));
                (format!("{} × {} = ?", a, b), a * b)
            }
            PuzzleKind::MissingAddend => {
                let (missing, b) = (rng.gen_range(1..=10), rng.gen_range(1..=10));
                (format!("? + {} = {}", b, missing + b), missing)
            }
        };

        Self::with_answer(rng, question, answer)
    }

    /// Build the options for a known answer: three distinct, non-negative
    /// distractors near it, shuffled with the answer
    pub fn with_answer<R: Rng + ?Sized>(rng: &mut R, question: String, answer: u32) -> Self {
        let mut options = [answer; OPTION_COUNT];
        let mut filled = 1;
        while filled < OPTION_COUNT {
            let offset = rng.gen_range(-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD);
            let candidate = i64::from(answer) + offset;
            if offset == 0 || candidate < 0 {
                continue;
            }
            let candidate = candidate as u32;
            if !options[..filled].contains(&candidate) {
                options[filled] = candidate;
                filled += 1;
            }
        }
        options.shuffle(rng);

        Self { question, options, correct_answer: answer }
    }
}
