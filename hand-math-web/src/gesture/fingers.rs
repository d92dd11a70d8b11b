//! Extended-finger counting
//!
//! Assumes an upright hand. No rotation correction: a finger counts as
//! extended when its tip is above (smaller y than) its PIP joint.

use crate::hand::{
    Hand, Landmark, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP, PINKY_PIP,
    PINKY_TIP, RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP,
};

/// (tip, pip) pairs for the four non-thumb fingers
const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Number of extended fingers (0-5). Incomplete hands count as 0.
pub fn count_fingers(hand: &Hand) -> u8 {
    if !hand.is_complete() {
        return 0;
    }
    let lm = &hand.landmarks;

    let thumb = u8::from(thumb_extended(lm));
    let others = FINGERS
        .iter()
        .filter(|(tip, pip)| lm[*tip].y < lm[*pip].y)
        .count() as u8;

    thumb + others
}

/// Thumb tip past the IP joint, on the side away from the palm.
///
/// Orientation comes from where the thumb tip sits relative to the pinky
/// MCP: left of it reads as a right hand facing the camera, so the thumb
/// extends further left; otherwise the comparison is mirrored.
fn thumb_extended(lm: &[Landmark]) -> bool {
    let tip = lm[THUMB_TIP];
    let ip = lm[THUMB_IP];
    let right_oriented = tip.x < lm[PINKY_MCP].x;
    if right_oriented {
        tip.x < ip.x
    } else {
        tip.x > ip.x
    }
}
