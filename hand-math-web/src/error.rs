//! Error types for the hand-math bridge.
//!
//! Gesture, geometry and game code is total and never returns these.
//! Only frame decoding, configuration and session lookups do.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid landmark data length: {len} values for {hands} hand(s)")]
    FrameLength { len: usize, hands: usize },

    #[error("Too many hands in one frame: {0} (at most 2)")]
    TooManyHands(usize),

    #[error("Unknown handedness code: {0} (expected 0 = Left, 1 = Right)")]
    HandednessCode(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Target region data must be x, y, width, height quadruples, got {0} values")]
    RegionLength(usize),

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("No game is running")]
    NoActiveGame,

    #[error("Hand tracker unavailable: {0}")]
    TrackerUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
