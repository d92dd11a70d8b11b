//! Games module - per-game interaction state machines
//!
//! Each game consumes interpreted frames and emits score, feedback and
//! display changes. Games never share state.

mod state;
mod timer;
mod feedback;
mod display;
mod finger_math;
mod selection;
mod number_hunt;
mod math_puzzle;
mod right_box;
mod angle_explorer;

pub use state::{Advance, GameCore, Observation};
pub use timer::Deferred;
pub use feedback::{Feedback, FeedbackView, Tone};
pub use display::{AngleView, DisplayModel, ProblemView};
pub use finger_math::FingerMathGame;
pub use selection::{SelectionGame, SelectionProblem};
pub use number_hunt::NumberHuntGame;
pub use math_puzzle::MathPuzzleGame;
pub use right_box::RightBoxGame;
pub use angle_explorer::AngleExplorerGame;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::Tuning;
use crate::error::Error;
use crate::geometry::Rect;
use crate::hand::FrameResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    FingerMath,
    NumberHunt,
    MathPuzzle,
    RightBox,
    AngleExplorer,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::FingerMath,
        GameKind::NumberHunt,
        GameKind::MathPuzzle,
        GameKind::RightBox,
        GameKind::AngleExplorer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::FingerMath => "finger-math",
            GameKind::NumberHunt => "number-hunt",
            GameKind::MathPuzzle => "math-puzzle",
            GameKind::RightBox => "right-box",
            GameKind::AngleExplorer => "angle-explorer",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::UnknownGame(s.to_string()))
    }
}

/// Things that happened during one update
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum GameEvent {
    ScoreChanged { delta: i32, score: u32 },
    FeedbackShown { message: String, tone: Tone },
    ProblemAdvanced,
    DragStarted(u32),
    DragEnded(u32),
    ItemRemoved(u32),
    ItemRelocated(u32),
}

/// Common shape of the five games.
///
/// `update` runs once per tracker frame and completes before the next
/// one; `tick` only fires due timers, for when no frame arrived.
pub trait Game {
    fn kind(&self) -> GameKind;

    fn update(&mut self, frame: &FrameResult, now_ms: f64) -> Vec<GameEvent>;

    fn tick(&mut self, now_ms: f64) -> Vec<GameEvent>;

    fn display(&self, now_ms: f64) -> DisplayModel;

    /// Score to zero, fresh problem, any drag ended
    fn reset(&mut self, now_ms: f64);

    fn score(&self) -> u32;

    /// Renderer-measured option boxes, in display order
    fn set_target_regions(&mut self, _regions: Vec<Rect>) {}
}

/// Build a game. `seed` pins the problem sequence (tests); None uses entropy.
pub fn create(kind: GameKind, tuning: Tuning, seed: Option<u64>) -> Box<dyn Game> {
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    match kind {
        GameKind::FingerMath => Box::new(FingerMathGame::new(tuning, rng)),
        GameKind::NumberHunt => Box::new(NumberHuntGame::new(tuning, rng)),
        GameKind::MathPuzzle => Box::new(MathPuzzleGame::new(tuning, rng)),
        GameKind::RightBox => Box::new(RightBoxGame::new(tuning, rng)),
        GameKind::AngleExplorer => Box::new(AngleExplorerGame::new(tuning, rng)),
    }
}
