//! Pinch-to-select games: a row of options, pinch over one to answer
//!
//! A selection happens on the rising pinch edge, only while no feedback is
//! showing. The cursor square is hit-tested against the option boxes in
//! display order and the first overlap wins.

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::Tuning;
use crate::geometry::{first_hit, row_layout, Rect};
use crate::gesture::PinchTransition;
use crate::hand::FrameResult;

use super::display::{DisplayModel, ProblemView};
use super::feedback::Tone;
use super::state::{Advance, GameCore};
use super::{Game, GameEvent, GameKind};

/// A problem answered by picking one of several numbers
pub trait SelectionProblem: Clone + std::fmt::Debug {
    const KIND: GameKind;

    fn generate(rng: &mut StdRng) -> Self;

    /// Options in display order
    fn options(&self) -> &[u32];

    fn correct_answer(&self) -> u32;

    fn view(&self) -> ProblemView;
}

pub struct SelectionGame<P: SelectionProblem> {
    core: GameCore,
    problem: P,
    regions: Vec<Rect>,
    custom_regions: bool,
}

impl<P: SelectionProblem> SelectionGame<P> {
    pub fn new(tuning: Tuning, mut rng: StdRng) -> Self {
        let problem = P::generate(&mut rng);
        Self::with_problem(tuning, rng, problem)
    }

    pub fn with_problem(tuning: Tuning, rng: StdRng, problem: P) -> Self {
        let mut game = Self {
            core: GameCore::new(tuning, rng),
            problem,
            regions: Vec::new(),
            custom_regions: false,
        };
        game.layout();
        game
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    fn layout(&mut self) {
        if self.custom_regions {
            return;
        }
        let t = &self.core.tuning;
        self.regions = row_layout(self.problem.options().len(), t.option_row_y, t.option_width, t.option_height);
    }

    fn next_problem(&mut self) {
        self.problem = P::generate(&mut self.core.rng);
        self.core.bump_generation();
        self.layout();
        debug!(problem = ?self.problem, "new {} problem", P::KIND);
    }

    /// Option value under the cursor, if any
    fn pick(&self, cursor: (f32, f32)) -> Option<u32> {
        let probe = Rect::around(cursor, self.core.tuning.cursor_half_extent);
        let index = first_hit(&probe, &self.regions)?;
        self.problem.options().get(index).copied()
    }

    fn answer(&mut self, value: u32, now_ms: f64, events: &mut Vec<GameEvent>) {
        let t = &self.core.tuning;
        let (points, correct_ms, wrong_ms) = (t.correct_points, t.selection_correct_ms, t.selection_wrong_ms);

        if value == self.problem.correct_answer() {
            events.push(self.core.add_score(points));
            events.push(self.core.show_feedback(format!("Correct! {}", value), Tone::Success, now_ms, correct_ms));
            self.core.schedule(now_ms, correct_ms, Advance::NextProblem);
        } else {
            events.push(self.core.show_feedback("Not quite, try again", Tone::Wrong, now_ms, wrong_ms));
        }
    }
}

impl<P: SelectionProblem> Game for SelectionGame<P> {
    fn kind(&self) -> GameKind {
        P::KIND
    }

    fn update(&mut self, frame: &FrameResult, now_ms: f64) -> Vec<GameEvent> {
        let mut events = self.tick(now_ms);
        let obs = self.core.observe(frame, now_ms);

        if obs.transition != PinchTransition::Pressed || self.core.feedback_active(now_ms) {
            return events;
        }
        if let Some(value) = obs.cursor.and_then(|c| self.pick(c)) {
            self.answer(value, now_ms, &mut events);
        }
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
        model.problem = Some(self.problem.view());
        model.target_regions = self.regions.clone();
        model
    }

    fn reset(&mut self, _now_ms: f64) {
        self.core.reset();
        self.next_problem();
    }

    fn score(&self) -> u32 {
        self.core.score
    }

    fn set_target_regions(&mut self, regions: Vec<Rect>) {
        self.custom_regions = !regions.is_empty();
        if self.custom_regions {
            self.regions = regions;
        } else {
            self.layout();
        }
    }
}
