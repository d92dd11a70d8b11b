//! Math puzzle - pinch the right answer among four options

use rand::rngs::StdRng;

use crate::problems::MathPuzzleProblem;

use super::display::ProblemView;
use super::selection::{SelectionGame, SelectionProblem};
use super::GameKind;

pub type MathPuzzleGame = SelectionGame<MathPuzzleProblem>;

impl SelectionProblem for MathPuzzleProblem {
    const KIND: GameKind = GameKind::MathPuzzle;

    fn generate(rng: &mut StdRng) -> Self {
        MathPuzzleProblem::generate(rng)
    }

    fn options(&self) -> &[u32] {
        &self.options
    }

    fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    fn view(&self) -> ProblemView {
        ProblemView::MathPuzzle { problem: self.clone() }
    }
}
