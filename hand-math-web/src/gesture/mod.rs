//! Gesture module - landmark list to discrete gestures
//!
//! Re-exports only, plus the per-hand GestureState snapshot.

mod fingers;
mod pinch;
mod cursor;
mod one_euro;

pub use fingers::count_fingers;
pub use pinch::{is_pinching, is_pinching_within, PinchEdge, PinchTransition, PINCH_THRESHOLD};
pub use cursor::{index_fingertip, CursorTracker};
pub use one_euro::{OneEuroFilter, OneEuroFilter2D};

use crate::hand::Hand;

/// Gestures read from one hand in one frame. Recomputed every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub finger_count: u8,
    pub is_pinching: bool,
    pub index_tip: Option<(f32, f32)>,
}

impl GestureState {
    pub fn interpret(hand: &Hand, pinch_threshold: f32) -> Self {
        Self {
            finger_count: count_fingers(hand),
            is_pinching: is_pinching_within(hand, pinch_threshold),
            index_tip: index_fingertip(hand),
        }
    }
}
