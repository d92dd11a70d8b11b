//! Angle explorer - live readout of the angle made by one or two hands
//!
//! No score, no cooldown: every frame replaces the reading.

use rand::rngs::StdRng;

use crate::config::Tuning;
use crate::geometry::{measure, AngleMeasurement, FrameSize};
use crate::hand::FrameResult;

use super::display::DisplayModel;
use super::state::GameCore;
use super::{Game, GameEvent, GameKind};

pub struct AngleExplorerGame {
    core: GameCore,
    reading: Option<AngleMeasurement>,
}

impl AngleExplorerGame {
    pub fn new(tuning: Tuning, rng: StdRng) -> Self {
        Self { core: GameCore::new(tuning, rng), reading: None }
    }

    pub fn reading(&self) -> Option<&AngleMeasurement> {
        self.reading.as_ref()
    }

    fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.core.tuning.frame_width, self.core.tuning.frame_height)
    }
}

impl Game for AngleExplorerGame {
    fn kind(&self) -> GameKind {
        GameKind::AngleExplorer
    }

    fn update(&mut self, frame: &FrameResult, now_ms: f64) -> Vec<GameEvent> {
        self.core.observe(frame, now_ms);
        self.reading = measure(frame, self.frame_size());
        Vec::new()
    }

    fn tick(&mut self, _now_ms: f64) -> Vec<GameEvent> {
        Vec::new()
    }

    fn display(&self, now_ms: f64) -> DisplayModel {
        let mut model = DisplayModel::base(self.kind(), &self.core, now_ms);
        model.angle = self.reading.map(Into::into);
        model
    }

    fn reset(&mut self, _now_ms: f64) {
        self.core.reset();
        self.reading = None;
    }

    fn score(&self) -> u32 {
        0
    }
}
