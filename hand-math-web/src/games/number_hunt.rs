//! Number hunt - pinch the one number of the asked type

use rand::rngs::StdRng;

use crate::problems::NumberPickerProblem;

use super::display::ProblemView;
use super::selection::{SelectionGame, SelectionProblem};
use super::GameKind;

pub type NumberHuntGame = SelectionGame<NumberPickerProblem>;

impl SelectionProblem for NumberPickerProblem {
    const KIND: GameKind = GameKind::NumberHunt;

    fn generate(rng: &mut StdRng) -> Self {
        NumberPickerProblem::generate(rng)
    }

    fn options(&self) -> &[u32] {
        &self.numbers
    }

    fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    fn view(&self) -> ProblemView {
        ProblemView::NumberPicker {
            prompt: self.number_type.prompt(),
            problem: *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::games::{Game, GameEvent, Tone};
    use crate::hand::fixtures::{pinching_at, pointing_at};
    use crate::hand::FrameResult;
    use crate::problems::NumberType;
    use rand::SeedableRng;

    fn game() -> NumberHuntGame {
        let problem = NumberPickerProblem {
            numbers: [4, 9, 7, 15, 1],
            number_type: NumberType::Prime,
            correct_answer: 7,
        };
        NumberHuntGame::with_problem(Tuning::default(), StdRng::seed_from_u64(2), problem)
    }

    fn option_center(g: &NumberHuntGame, index: usize) -> (f32, f32) {
        g.regions()[index].center()
    }

    fn pinch_over(g: &mut NumberHuntGame, at: (f32, f32), now: f64) -> Vec<GameEvent> {
        g.update(&FrameResult::new(vec![pointing_at(at.0, at.1)]), now);
        g.update(&FrameResult::new(vec![pinching_at(at.0, at.1)]), now + 33.0)
    }

    #[test]
    fn test_correct_pick_scores_then_advances() {
        let mut g = game();
        let at = option_center(&g, 2);
        let events = pinch_over(&mut g, at, 0.0);
        assert!(events.contains(&GameEvent::ScoreChanged { delta: 10, score: 10 }));
        assert_eq!(g.problem().correct_answer, 7);

        let events = g.tick(33.0 + 1500.0);
        assert_eq!(events, vec![GameEvent::ProblemAdvanced]);
    }

    #[test]
    fn test_wrong_pick_keeps_problem_and_score() {
        let mut g = game();
        let at = option_center(&g, 0);
        let events = pinch_over(&mut g, at, 0.0);
        assert_eq!(g.score(), 0);
        assert!(events.iter().any(|e| matches!(e, GameEvent::FeedbackShown { tone: Tone::Wrong, .. })));
        assert!(g.tick(10_000.0).is_empty());
        assert_eq!(g.problem().numbers, [4, 9, 7, 15, 1]);
    }

    #[test]
    fn test_feedback_locks_out_answers() {
        let mut g = game();
        let (wrong, right) = (option_center(&g, 0), option_center(&g, 2));
        pinch_over(&mut g, wrong, 0.0);
        // Still inside the wrong-answer window
        let events = pinch_over(&mut g, right, 200.0);
        assert!(events.is_empty());
        // After it expires the same gesture counts
        let events = pinch_over(&mut g, right, 2000.0);
        assert!(events.contains(&GameEvent::ScoreChanged { delta: 10, score: 10 }));
    }

    #[test]
    fn test_held_pinch_selects_once() {
        let mut g = game();
        let at = option_center(&g, 0);
        pinch_over(&mut g, at, 0.0);
        // Keep pinching past the feedback window: no new rising edge
        let held = FrameResult::new(vec![pinching_at(at.0, at.1)]);
        assert!(g.update(&held, 1500.0).is_empty());
    }

    #[test]
    fn test_pinch_outside_options_does_nothing() {
        let mut g = game();
        assert!(pinch_over(&mut g, (0.5, 0.05), 0.0).is_empty());
    }

    #[test]
    fn test_renderer_regions_override_layout() {
        use crate::geometry::Rect;
        let mut g = game();
        let boxes: Vec<Rect> = (0..5).map(|i| Rect::new(0.1, 0.1 * i as f32, 0.2, 0.08)).collect();
        g.set_target_regions(boxes.clone());
        assert_eq!(g.regions(), boxes.as_slice());
        let events = pinch_over(&mut g, boxes[2].center(), 0.0);
        assert!(events.contains(&GameEvent::ScoreChanged { delta: 10, score: 10 }));
    }
}
