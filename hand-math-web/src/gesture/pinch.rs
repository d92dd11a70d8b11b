//! Pinch detection and rising/falling edge tracking

use crate::hand::{Hand, INDEX_TIP, THUMB_TIP};

/// Thumb-tip to index-tip distance (normalized) that counts as a pinch
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Pinch test with the default threshold
pub fn is_pinching(hand: &Hand) -> bool {
    is_pinching_within(hand, PINCH_THRESHOLD)
}

/// True iff the 2D thumb-tip/index-tip distance is strictly below `threshold`
pub fn is_pinching_within(hand: &Hand, threshold: f32) -> bool {
    match (hand.point(THUMB_TIP), hand.point(INDEX_TIP)) {
        (Some(thumb), Some(index)) => {
            let dx = thumb.0 - index.0;
            let dy = thumb.1 - index.1;
            (dx * dx + dy * dy).sqrt() < threshold
        }
        _ => false,
    }
}

/// What happened to the pinch between the previous frame and this one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchTransition {
    /// Not pinching before or now
    Idle,
    /// Rising edge - fires once per physical pinch
    Pressed,
    Held,
    /// Falling edge
    Released,
}

/// Remembers the previous frame's pinch state
#[derive(Clone, Debug, Default)]
pub struct PinchEdge {
    was_pinching: bool,
}

impl PinchEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, pinching: bool) -> PinchTransition {
        let transition = match (self.was_pinching, pinching) {
            (false, true) => PinchTransition::Pressed,
            (true, true) => PinchTransition::Held,
            (true, false) => PinchTransition::Released,
            (false, false) => PinchTransition::Idle,
        };
        self.was_pinching = pinching;
        transition
    }

    pub fn is_pinching(&self) -> bool {
        self.was_pinching
    }

    /// Forget the previous state (hand lost or game reset)
    pub fn reset(&mut self) {
        self.was_pinching = false;
    }
}
