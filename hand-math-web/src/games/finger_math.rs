//! Finger math - show the answer to an addition with your fingers
//!
//! Every frame with a hand sums the extended fingers of all hands. After
//! any evaluation, right or wrong, answers are ignored for a fixed cooldown.

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::Tuning;
use crate::gesture::count_fingers;
use crate::hand::FrameResult;
use crate::problems::ArithmeticProblem;

use super::display::{DisplayModel, ProblemView};
use super::feedback::Tone;
use super::state::{Advance, GameCore};
use super::{Game, GameEvent, GameKind};

pub struct FingerMathGame {
    core: GameCore,
    problem: ArithmeticProblem,
    cooldown_until_ms: f64,
    finger_total: u32,
}

impl FingerMathGame {
    pub fn new(tuning: Tuning, mut rng: StdRng) -> Self {
        let problem = ArithmeticProblem::generate(&mut rng);
        Self::with_problem(tuning, rng, problem)
    }

    pub fn with_problem(tuning: Tuning, rng: StdRng, problem: ArithmeticProblem) -> Self {
        Self {
            core: GameCore::new(tuning, rng),
            problem,
            cooldown_until_ms: f64::NEG_INFINITY,
            finger_total: 0,
        }
    }

    pub fn problem(&self) -> &ArithmeticProblem {
        &self.problem
    }

    pub fn finger_total(&self) -> u32 {
        self.finger_total
    }

    fn next_problem(&mut self) {
        self.problem = ArithmeticProblem::generate(&mut self.core.rng);
        self.core.bump_generation();
        debug!(problem = ?self.problem, "new arithmetic problem");
    }

    fn evaluate(&mut self, total: u32, now_ms: f64, events: &mut Vec<GameEvent>) {
        let cooldown = self.core.tuning.arithmetic_cooldown_ms;
        if total == self.problem.answer {
            let points = self.core.tuning.correct_points;
            events.push(self.core.add_score(points));
            let message = format!(
                "Correct! {} + {} = {}",
                self.problem.num1, self.problem.num2, self.problem.answer
            );
            events.push(self.core.show_feedback(message, Tone::Success, now_ms, cooldown));
            self.core.schedule(now_ms, cooldown, Advance::NextProblem);
        } else {
            let message = format!("Wrong count! You showed {}", total);
            events.push(self.core.show_feedback(message, Tone::Wrong, now_ms, cooldown));
        }
        self.cooldown_until_ms = now_ms + cooldown;
    }
}

impl Game for FingerMathGame {
    fn kind(&self) -> GameKind {
        GameKind::FingerMath
    }

    fn update(&mut self, frame: &FrameResult, now_ms: f64) -> Vec<GameEvent> {
        let mut events = self.tick(now_ms);
        self.core.observe(frame, now_ms);

        if frame.is_empty() {
            self.finger_total = 0;
            return events;
        }

        let total: u32 = frame.hands.iter().map(|h| u32::from(count_fingers(h))).sum();
        self.finger_total = total;

        if now_ms < self.cooldown_until_ms || total == 0 {
            return events;
        }
        self.evaluate(total, now_ms, &mut events);
        events
    }

    fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for action in self.core.due(now_ms) {
            if action == Advance::NextProblem {
                self.next_problem();
                events.push(GameEvent::ProblemAdvanced);
            }
        }
        events
    }

    fn display(&self, now_ms: f64) -> DisplayModel {
        let mut model = DisplayModel::base(self.kind(), &self.core, now_ms);
        model.problem = Some(ProblemView::Arithmetic {
            question: self.problem.question(),
            problem: self.problem,
        });
        model.finger_total = Some(self.finger_total);
        model
    }

    fn reset(&mut self, _now_ms: f64) {
        self.core.reset();
        self.cooldown_until_ms = f64::NEG_INFINITY;
        self.finger_total = 0;
        self.next_problem();
    }

    fn score(&self) -> u32 {
        self.core.score
    }
}
