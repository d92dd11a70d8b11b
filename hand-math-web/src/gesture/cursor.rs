//! Fingertip cursor

use crate::config::SmoothingParams;
use crate::hand::{Hand, INDEX_TIP};

use super::one_euro::OneEuroFilter2D;

/// Index fingertip (x, y), or None for an incomplete hand
pub fn index_fingertip(hand: &Hand) -> Option<(f32, f32)> {
    hand.point(INDEX_TIP)
}

/// Per-game cursor. Without smoothing it is exactly the fingertip.
#[derive(Clone, Debug, Default)]
pub struct CursorTracker {
    filter: Option<OneEuroFilter2D>,
    position: Option<(f32, f32)>,
}

impl CursorTracker {
    pub fn new(smoothing: Option<SmoothingParams>) -> Self {
        Self {
            filter: smoothing.map(OneEuroFilter2D::new),
            position: None,
        }
    }

    /// Feed this frame's fingertip. None clears the cursor and the filter.
    pub fn update(&mut self, now_ms: f64, tip: Option<(f32, f32)>) -> Option<(f32, f32)> {
        self.position = match (tip, self.filter.as_mut()) {
            (Some(p), Some(filter)) => Some(filter.filter(now_ms / 1000.0, p)),
            (Some(p), None) => Some(p),
            (None, filter) => {
                if let Some(f) = filter {
                    f.reset();
                }
                None
            }
        };
        self.position
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    pub fn clear(&mut self) {
        self.update(0.0, None);
    }
}
