//! Tuning - every threshold, duration and score value the games use.
//!
//! Defaults match the shipped games. The page may override any subset
//! with a JSON object before starting a game.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rectangle (normalized) where RightBox items spawn and respawn
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self { x_min: 0.05, x_max: 0.65, y_min: 0.1, y_max: 0.9 }
    }
}

/// One Euro parameters for cursor smoothing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    pub min_cutoff: f32,
    pub beta: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Thumb-tip/index-tip distance below which a hand is pinching
    pub pinch_threshold: f32,
    /// Squared cursor-to-item distance that grabs a RightBox item
    pub drag_hit_radius_sq: f32,
    /// Items released right of this x are evaluated
    pub drop_zone_x: f32,
    pub spawn: SpawnRegion,
    pub right_box_items: usize,

    /// Half-size of the square cursor used for option hit-testing
    pub cursor_half_extent: f32,
    /// Default option row layout (renderer may override)
    pub option_row_y: f32,
    pub option_width: f32,
    pub option_height: f32,

    pub correct_points: u32,
    pub wrong_penalty: u32,

    pub arithmetic_cooldown_ms: f64,
    pub selection_correct_ms: f64,
    pub selection_wrong_ms: f64,
    pub sort_feedback_ms: f64,
    pub level_delay_ms: f64,

    /// Camera frame size in pixels, used by the angle game
    pub frame_width: f32,
    pub frame_height: f32,

    pub cursor_smoothing: Option<SmoothingParams>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.05,
            drag_hit_radius_sq: 0.005,
            drop_zone_x: 0.75,
            spawn: SpawnRegion::default(),
            right_box_items: 6,
            cursor_half_extent: 0.02,
            option_row_y: 0.55,
            option_width: 0.14,
            option_height: 0.16,
            correct_points: 10,
            wrong_penalty: 5,
            arithmetic_cooldown_ms: 2000.0,
            selection_correct_ms: 1500.0,
            selection_wrong_ms: 1000.0,
            sort_feedback_ms: 800.0,
            level_delay_ms: 1500.0,
            frame_width: 640.0,
            frame_height: 480.0,
            cursor_smoothing: None,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(|e| Error::Config(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pinch_threshold", self.pinch_threshold),
            ("drag_hit_radius_sq", self.drag_hit_radius_sq),
            ("cursor_half_extent", self.cursor_half_extent),
            ("option_width", self.option_width),
            ("option_height", self.option_height),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(Error::Config(format!("{} must be > 0, got {}", name, value)));
            }
        }

        let s = &self.spawn;
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !(in_unit(s.x_min) && in_unit(s.x_max) && in_unit(s.y_min) && in_unit(s.y_max))
            || s.x_min > s.x_max
            || s.y_min > s.y_max
        {
            return Err(Error::Config(format!("spawn region {:?} must be an ordered box inside [0,1]", s)));
        }
        if !in_unit(self.drop_zone_x) {
            return Err(Error::Config(format!("drop_zone_x must be in [0,1], got {}", self.drop_zone_x)));
        }
        if self.right_box_items == 0 {
            return Err(Error::Config("right_box_items must be at least 1".into()));
        }

        let durations = [
            self.arithmetic_cooldown_ms,
            self.selection_correct_ms,
            self.selection_wrong_ms,
            self.sort_feedback_ms,
            self.level_delay_ms,
        ];
        if durations.iter().any(|d| !(*d >= 0.0)) {
            return Err(Error::Config("durations must be >= 0 ms".into()));
        }
        Ok(())
    }
}
