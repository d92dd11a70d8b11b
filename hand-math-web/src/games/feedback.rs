//! Transient feedback messages
//!
//! A message is visible until its expiry. There is no clearing timer:
//! a newer message simply replaces the old one.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Wrong,
    Info,
}

impl Tone {
    /// CSS color for the renderer
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Success => "#22c55e",
            Tone::Wrong => "#ef4444",
            Tone::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
    pub expires_at_ms: f64,
}

impl Feedback {
    pub fn new(message: impl Into<String>, tone: Tone, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            message: message.into(),
            tone,
            expires_at_ms: now_ms + duration_ms,
        }
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        now_ms < self.expires_at_ms
    }
}

/// What the renderer gets
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackView {
    pub message: String,
    pub tone: Tone,
    pub color: &'static str,
}

impl From<&Feedback> for FeedbackView {
    fn from(f: &Feedback) -> Self {
        Self {
            message: f.message.clone(),
            tone: f.tone,
            color: f.tone.color(),
        }
    }
}
