//! Hand landmark data as produced by the tracker, one frame at a time.
//!
//! Coordinates are normalized to the camera frame (x, y in 0-1, y grows
//! downward). Nothing here is mutated after a frame is decoded.

use serde::Serialize;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Hand skeleton connections for the overlay renderer
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D hand joint (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized, grows downward
    pub z: f32,  // Relative depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None }
    }

    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Which hand the tracker believes it saw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

/// One detected hand: up to 21 landmarks, label and detection score.
///
/// A hand with fewer than 21 landmarks is legal input and reads as
/// "no gesture" everywhere.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hand {
    pub landmarks: Vec<Landmark>,
    pub handedness: Handedness,
    pub score: f32,
}

impl Hand {
    pub fn new(landmarks: Vec<Landmark>, handedness: Handedness, score: f32) -> Self {
        Self { landmarks, handedness, score }
    }

    /// True when every anatomical index can be read
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
    }

    /// Landmark at `index`, or None for an incomplete hand
    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        if self.is_complete() {
            self.landmarks.get(index).copied()
        } else {
            None
        }
    }

    pub fn point(&self, index: usize) -> Option<(f32, f32)> {
        self.landmark(index).map(|lm| lm.xy())
    }
}

/// Hands detected in the current camera frame (0-2, arbitrary order)
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameResult {
    pub hands: Vec<Hand>,
}

impl FrameResult {
    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Hand that drives the cursor: highest detection score, first wins ties
    pub fn primary_hand(&self) -> Option<&Hand> {
        self.hands.iter().fold(None, |best: Option<&Hand>, hand| match best {
            Some(b) if b.score >= hand.score => Some(b),
            _ => Some(hand),
        })
    }

    /// Split a two-hand frame into (right, left).
    ///
    /// Uses the tracker labels when they differ. When both hands carry the
    /// same label the one further left in the raw image (smaller x wrist)
    /// is taken as the right hand.
    pub fn right_and_left(&self) -> Option<(&Hand, &Hand)> {
        if self.hands.len() < 2 {
            return None;
        }
        let (a, b) = (&self.hands[0], &self.hands[1]);
        match (a.handedness, b.handedness) {
            (Handedness::Right, Handedness::Left) => Some((a, b)),
            (Handedness::Left, Handedness::Right) => Some((b, a)),
            _ => {
                let ax = a.landmark(WRIST).map_or(f32::MAX, |w| w.x);
                let bx = b.landmark(WRIST).map_or(f32::MAX, |w| w.x);
                if ax <= bx { Some((a, b)) } else { Some((b, a)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::fixtures::{open_hand, shifted};

    #[test]
    fn test_incomplete_hand_has_no_landmarks() {
        let hand = Hand::new(vec![Landmark::new(0.5, 0.5, 0.0); 5], Handedness::Right, 0.9);
        assert!(!hand.is_complete());
        assert_eq!(hand.landmark(WRIST), None);
        assert_eq!(hand.point(INDEX_TIP), None);
    }

    #[test]
    fn test_primary_hand_prefers_score() {
        let mut low = open_hand(Handedness::Left);
        low.score = 0.4;
        let mut high = open_hand(Handedness::Right);
        high.score = 0.8;
        let frame = FrameResult::new(vec![low, high]);
        assert_eq!(frame.primary_hand().map(|h| h.handedness), Some(Handedness::Right));
    }

    #[test]
    fn test_primary_hand_first_wins_ties() {
        let frame = FrameResult::new(vec![open_hand(Handedness::Left), open_hand(Handedness::Right)]);
        assert_eq!(frame.primary_hand().map(|h| h.handedness), Some(Handedness::Left));
        assert!(FrameResult::empty().primary_hand().is_none());
    }

    #[test]
    fn test_right_and_left_ignores_array_order() {
        let frame = FrameResult::new(vec![open_hand(Handedness::Left), open_hand(Handedness::Right)]);
        let (right, left) = frame.right_and_left().unwrap();
        assert_eq!(right.handedness, Handedness::Right);
        assert_eq!(left.handedness, Handedness::Left);
    }

    #[test]
    fn test_right_and_left_falls_back_to_x_order() {
        let a = shifted(&open_hand(Handedness::Right), 0.3, 0.0);
        let b = open_hand(Handedness::Right);
        let frame = FrameResult::new(vec![a.clone(), b.clone()]);
        let (right, left) = frame.right_and_left().unwrap();
        assert_eq!(right, &b);
        assert_eq!(left, &a);
    }
}
