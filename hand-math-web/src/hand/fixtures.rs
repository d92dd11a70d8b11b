//! Synthetic hands for tests. Built for unit tests and, behind the
//! `test-utils` feature, for the integration suite.
//!
//! Upright hand, palm toward the camera, raw (non-mirrored) image space.

use super::landmarks::*;

const OPEN: [(f32, f32); LANDMARK_COUNT] = [
    (0.50, 0.80),                                               // wrist
    (0.44, 0.75), (0.40, 0.70), (0.37, 0.65), (0.33, 0.60),     // thumb
    (0.45, 0.55), (0.45, 0.45), (0.45, 0.40), (0.45, 0.35),     // index
    (0.50, 0.54), (0.50, 0.44), (0.50, 0.39), (0.50, 0.34),     // middle
    (0.55, 0.55), (0.55, 0.46), (0.55, 0.41), (0.55, 0.37),     // ring
    (0.60, 0.58), (0.60, 0.50), (0.60, 0.46), (0.60, 0.42),     // pinky
];

/// Tip positions that put a finger below its PIP joint
const CURLED_TIPS: [(usize, (f32, f32)); 4] = [
    (INDEX_TIP, (0.46, 0.52)),
    (MIDDLE_TIP, (0.51, 0.51)),
    (RING_TIP, (0.56, 0.52)),
    (PINKY_TIP, (0.60, 0.55)),
];

/// Thumb tip tucked toward the palm (past the IP joint)
const TUCKED_THUMB: (f32, f32) = (0.44, 0.62);

fn build(points: &[(f32, f32); LANDMARK_COUNT], handedness: Handedness) -> Hand {
    let landmarks = points.iter().map(|&(x, y)| Landmark::new(x, y, 0.0)).collect();
    Hand::new(landmarks, handedness, 0.95)
}

/// All five fingers extended
pub fn open_hand(handedness: Handedness) -> Hand {
    build(&OPEN, handedness)
}

/// Every finger curled, thumb on the palm side
pub fn fist(handedness: Handedness) -> Hand {
    showing(0, handedness)
}

/// Hand with `count` fingers extended: index, middle, ring, pinky, then thumb
pub fn showing(count: u8, handedness: Handedness) -> Hand {
    let mut points = OPEN;
    for (i, (tip, pos)) in CURLED_TIPS.iter().enumerate() {
        if (i as u8) >= count {
            points[*tip] = *pos;
        }
    }
    if count < 5 {
        points[THUMB_TIP] = TUCKED_THUMB;
    }
    build(&points, handedness)
}

pub fn with_point(hand: &Hand, index: usize, x: f32, y: f32) -> Hand {
    let mut out = hand.clone();
    out.landmarks[index].x = x;
    out.landmarks[index].y = y;
    out
}

pub fn shifted(hand: &Hand, dx: f32, dy: f32) -> Hand {
    let mut out = hand.clone();
    for lm in out.landmarks.iter_mut() {
        lm.x += dx;
        lm.y += dy;
    }
    out
}

/// Open hand moved so the index tip sits at (x, y), thumb well away
pub fn pointing_at(x: f32, y: f32) -> Hand {
    let open = open_hand(Handedness::Right);
    let tip = open.landmarks[INDEX_TIP];
    shifted(&open, x - tip.x, y - tip.y)
}

/// Index tip at (x, y) with the thumb tip 0.01 away
pub fn pinching_at(x: f32, y: f32) -> Hand {
    with_point(&pointing_at(x, y), THUMB_TIP, x + 0.01, y)
}
