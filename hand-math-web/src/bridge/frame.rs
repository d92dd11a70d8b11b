//! Flat landmark buffers from JavaScript → FrameResult
//!
//! The page sends one Float32Array holding every hand back to back
//! (21 landmarks × x, y, z, optionally visibility), a Uint8Array of
//! handedness codes and a Float32Array of detection scores.

use crate::error::{Error, Result};
use crate::hand::{FrameResult, Hand, Handedness, Landmark, LANDMARK_COUNT};

pub const MAX_HANDS: usize = 2;

/// Score used when the page sends fewer scores than hands
const DEFAULT_SCORE: f32 = 1.0;

pub fn handedness_from_code(code: u8) -> Result<Handedness> {
    match code {
        0 => Ok(Handedness::Left),
        1 => Ok(Handedness::Right),
        other => Err(Error::HandednessCode(other)),
    }
}

/// Decode one frame. The number of hands is the number of handedness codes;
/// the per-landmark stride (3 or 4) is inferred from the buffer length.
pub fn decode_frame(flat: &[f32], handedness: &[u8], scores: &[f32]) -> Result<FrameResult> {
    let hands = handedness.len();
    if hands > MAX_HANDS {
        return Err(Error::TooManyHands(hands));
    }
    if hands == 0 {
        return if flat.is_empty() {
            Ok(FrameResult::empty())
        } else {
            Err(Error::FrameLength { len: flat.len(), hands })
        };
    }

    let per_hand = flat.len() / hands;
    let stride = per_hand / LANDMARK_COUNT;
    if flat.len() % hands != 0 || per_hand % LANDMARK_COUNT != 0 || !(stride == 3 || stride == 4) {
        return Err(Error::FrameLength { len: flat.len(), hands });
    }

    let decoded = flat
        .chunks_exact(per_hand)
        .zip(handedness)
        .enumerate()
        .map(|(h, (chunk, &code))| {
            let landmarks = chunk
                .chunks_exact(stride)
                .map(|v| Landmark {
                    x: v[0],
                    y: v[1],
                    z: v[2],
                    visibility: v.get(3).copied(),
                })
                .collect();
            let score = scores.get(h).copied().unwrap_or(DEFAULT_SCORE);
            Ok(Hand::new(landmarks, handedness_from_code(code)?, score))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FrameResult::new(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame() {
        assert_eq!(decode_frame(&[], &[], &[]), Ok(FrameResult::empty()));
        assert_eq!(decode_frame(&[0.5; 63], &[], &[]), Err(Error::FrameLength { len: 63, hands: 0 }));
    }

    #[test]
    fn test_two_hands_xyz() {
        let mut flat = vec![0.25; 63];
        flat.extend(vec![0.75; 63]);
        let frame = decode_frame(&flat, &[1, 0], &[0.9, 0.8]).unwrap();
        assert_eq!(frame.hands.len(), 2);
        assert_eq!(frame.hands[0].handedness, Handedness::Right);
        assert_eq!(frame.hands[1].handedness, Handedness::Left);
        assert_eq!(frame.hands[1].landmarks[20].x, 0.75);
        assert_eq!(frame.hands[0].score, 0.9);
        assert!(frame.hands.iter().all(|h| h.is_complete()));
    }

    #[test]
    fn test_visibility_stride() {
        let flat: Vec<f32> = (0..84).map(|i| i as f32).collect();
        let frame = decode_frame(&flat, &[0], &[]).unwrap();
        let hand = &frame.hands[0];
        assert_eq!(hand.landmarks.len(), 21);
        assert_eq!(hand.landmarks[1], Landmark { x: 4.0, y: 5.0, z: 6.0, visibility: Some(7.0) });
        assert_eq!(hand.score, 1.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(decode_frame(&[0.0; 62], &[0], &[]), Err(Error::FrameLength { len: 62, hands: 1 }));
        assert_eq!(decode_frame(&[0.0; 105], &[0], &[]), Err(Error::FrameLength { len: 105, hands: 1 }));
        assert_eq!(decode_frame(&[0.0; 189], &[0, 1, 0], &[]), Err(Error::TooManyHands(3)));
        assert_eq!(decode_frame(&[0.0; 63], &[7], &[]), Err(Error::HandednessCode(7)));
    }
}
