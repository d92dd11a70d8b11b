//! Display model handed to the external renderer each frame

use serde::Serialize;

use crate::geometry::{AngleMeasurement, Rect};
use crate::hand::Hand;
use crate::problems::{ArithmeticProblem, DraggableNumber, MathPuzzleProblem, NumberPickerProblem, Parity};

use super::state::GameCore;
use super::feedback::FeedbackView;
use super::GameKind;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProblemView {
    Arithmetic {
        question: String,
        problem: ArithmeticProblem,
    },
    NumberPicker {
        prompt: &'static str,
        problem: NumberPickerProblem,
    },
    MathPuzzle {
        problem: MathPuzzleProblem,
    },
    RightBox {
        target_type: Parity,
        prompt: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AngleView {
    #[serde(flatten)]
    pub measurement: AngleMeasurement,
    pub label: &'static str,
}

impl From<AngleMeasurement> for AngleView {
    fn from(measurement: AngleMeasurement) -> Self {
        Self { label: measurement.category.label(), measurement }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayModel {
    pub game: GameKind,
    pub score: u32,
    pub feedback: Option<FeedbackView>,
    pub cursor: Option<(f32, f32)>,
    pub pinching: bool,
    pub problem: Option<ProblemView>,
    pub finger_total: Option<u32>,
    pub items: Vec<DraggableNumber>,
    pub target_regions: Vec<Rect>,
    pub drop_zone_x: Option<f32>,
    pub angle: Option<AngleView>,
    pub hands: Vec<Hand>,
}

impl DisplayModel {
    /// Fields every game fills the same way; the game adds the rest
    pub(crate) fn base(game: GameKind, core: &GameCore, now_ms: f64) -> Self {
        Self {
            game,
            score: core.score,
            feedback: core.feedback_view(now_ms),
            cursor: core.cursor(),
            pinching: core.pinching(),
            problem: None,
            finger_total: None,
            items: Vec::new(),
            target_regions: Vec::new(),
            drop_zone_x: None,
            angle: None,
            hands: core.hands().to_vec(),
        }
    }

    pub fn to_json(&self) -> String {
        // Only plain data and finite floats; serde_json turns NaN into null
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}
