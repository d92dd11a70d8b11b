//! Angle measurement from one or two hands
//!
//! Works in pixel space so the parallel-ray threshold (determinant ≤ 1)
//! and the on-screen angle are not skewed by the frame's aspect ratio.

use nalgebra::{Matrix2, Vector2};
use serde::Serialize;

use crate::hand::{FrameResult, Hand, INDEX_TIP, THUMB_TIP, WRIST};

use super::angles::{angle_difference, classify_angle, vector_angle, AngleCategory};

/// Rays whose direction determinant is at most this (px²) count as parallel
pub const PARALLEL_DETERMINANT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    /// Vertex at the wrist, thumb is the base ray, index the target ray
    OneHand,
    /// Index-finger rays of both hands, right hand is the base
    TwoHands,
}

/// One live angle reading. Points are in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AngleMeasurement {
    pub mode: MeasureMode,
    pub vertex: (f32, f32),
    pub base_end: (f32, f32),
    pub target_end: (f32, f32),
    pub degrees: f32,
    pub category: AngleCategory,
}

/// Frame dimensions used to scale normalized landmarks to pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl FrameSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn to_pixels(&self, p: (f32, f32)) -> (f32, f32) {
        (p.0 * self.width, p.1 * self.height)
    }

    fn point(&self, hand: &Hand, index: usize) -> Option<(f32, f32)> {
        hand.point(index).map(|p| self.to_pixels(p))
    }
}

/// Measure whatever the frame allows: two hands, one hand, or nothing
pub fn measure(frame: &FrameResult, size: FrameSize) -> Option<AngleMeasurement> {
    match frame.hands.len() {
        0 => None,
        1 => measure_one_hand(&frame.hands[0], size),
        _ => {
            let (right, left) = frame.right_and_left()?;
            measure_two_hands(right, left, size)
        }
    }
}

pub fn measure_one_hand(hand: &Hand, size: FrameSize) -> Option<AngleMeasurement> {
    let wrist = size.point(hand, WRIST)?;
    let thumb = size.point(hand, THUMB_TIP)?;
    let index = size.point(hand, INDEX_TIP)?;

    let degrees = angle_difference(vector_angle(wrist, thumb), vector_angle(wrist, index));
    Some(AngleMeasurement {
        mode: MeasureMode::OneHand,
        vertex: wrist,
        base_end: thumb,
        target_end: index,
        degrees,
        category: classify_angle(degrees),
    })
}

pub fn measure_two_hands(right: &Hand, left: &Hand, size: FrameSize) -> Option<AngleMeasurement> {
    let right_wrist = size.point(right, WRIST)?;
    let right_tip = size.point(right, INDEX_TIP)?;
    let left_wrist = size.point(left, WRIST)?;
    let left_tip = size.point(left, INDEX_TIP)?;

    let base = vector_angle(right_wrist, right_tip);
    let target = vector_angle(left_wrist, left_tip);
    let degrees = angle_difference(base, target);

    let vertex = ray_intersection(right_wrist, right_tip, left_wrist, left_tip)
        .unwrap_or_else(|| midpoint(right_wrist, left_wrist));

    Some(AngleMeasurement {
        mode: MeasureMode::TwoHands,
        vertex,
        base_end: right_tip,
        target_end: left_tip,
        degrees,
        category: classify_angle(degrees),
    })
}

/// Intersection of the lines a0→a1 and b0→b1, None when near-parallel
pub fn ray_intersection(
    a0: (f32, f32),
    a1: (f32, f32),
    b0: (f32, f32),
    b1: (f32, f32),
) -> Option<(f32, f32)> {
    let p = Vector2::new(a0.0, a0.1);
    let d1 = Vector2::new(a1.0 - a0.0, a1.1 - a0.1);
    let d2 = Vector2::new(b1.0 - b0.0, b1.1 - b0.1);

    // Solve p + t·d1 = q + s·d2  ⇒  [d1  -d2] [t s]ᵀ = q - p
    let m = Matrix2::new(d1.x, -d2.x, d1.y, -d2.y);
    if m.determinant().abs() <= PARALLEL_DETERMINANT {
        return None;
    }
    let rhs = Vector2::new(b0.0 - a0.0, b0.1 - a0.1);
    let ts = m.try_inverse()? * rhs;
    let hit = p + d1 * ts.x;
    Some((hit.x, hit.y))
}

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}
