//! State every game shares: score, feedback, timers, cursor and pinch edge

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::Tuning;
use crate::gesture::{index_fingertip, is_pinching_within, CursorTracker, PinchEdge, PinchTransition};
use crate::hand::{FrameResult, Hand, Handedness};

use super::feedback::{Feedback, FeedbackView, Tone};
use super::timer::Deferred;
use super::GameEvent;

/// Deferred state changes a game can schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextProblem,
    NextLevel,
}

/// What the tracked hand did this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub cursor: Option<(f32, f32)>,
    pub transition: PinchTransition,
    /// False when the frame has no hands
    pub tracking: bool,
    /// The tracked hand left and another hand took over this frame
    pub hand_changed: bool,
}

pub struct GameCore {
    pub tuning: Tuning,
    pub rng: StdRng,
    pub score: u32,
    pub feedback: Option<Feedback>,
    pub generation: u64,
    deferred: Deferred<Advance>,
    cursor: CursorTracker,
    pinch: PinchEdge,
    /// Label of the hand driving cursor and pinch, kept while it stays in view
    tracked: Option<Handedness>,
    hands: Vec<Hand>,
}

impl GameCore {
    pub fn new(tuning: Tuning, rng: StdRng) -> Self {
        let cursor = CursorTracker::new(tuning.cursor_smoothing);
        Self {
            tuning,
            rng,
            score: 0,
            feedback: None,
            generation: 0,
            deferred: Deferred::new(),
            cursor,
            pinch: PinchEdge::new(),
            tracked: None,
            hands: Vec::new(),
        }
    }

    /// Read cursor and pinch edge from the tracked hand.
    ///
    /// The first hand seen (highest score) stays tracked by its label while
    /// a hand with that label is in the frame. When it disappears the primary hand
    /// takes over with a fresh cursor and pinch state. An empty frame clears
    /// both.
    pub fn observe(&mut self, frame: &FrameResult, now_ms: f64) -> Observation {
        self.hands = frame.hands.clone();
        let hand = self
            .tracked
            .and_then(|label| frame.hands.iter().find(|h| h.handedness == label))
            .or_else(|| frame.primary_hand());

        let Some(hand) = hand else {
            self.clear_interaction();
            return Observation { cursor: None, transition: PinchTransition::Idle, tracking: false, hand_changed: false };
        };

        let hand_changed = self.tracked.is_some_and(|label| label != hand.handedness);
        if self.tracked != Some(hand.handedness) {
            self.cursor.clear();
            self.pinch.reset();
            if hand_changed {
                debug!(hand = hand.handedness.as_str(), "tracked hand switched");
            }
            self.tracked = Some(hand.handedness);
        }

        let pinching = is_pinching_within(hand, self.tuning.pinch_threshold);
        let cursor = self.cursor.update(now_ms, index_fingertip(hand));
        Observation {
            cursor,
            transition: self.pinch.update(pinching),
            tracking: true,
            hand_changed,
        }
    }

    pub fn clear_interaction(&mut self) {
        self.cursor.clear();
        self.pinch.reset();
        self.tracked = None;
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor.position()
    }

    pub fn pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    // ========================================================================
    // TIMERS
    // ========================================================================

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: Advance) {
        debug!(?action, delay_ms, generation = self.generation, "scheduled");
        self.deferred.schedule(now_ms + delay_ms, self.generation, action);
    }

    pub fn due(&mut self, now_ms: f64) -> Vec<Advance> {
        self.deferred.drain_due(now_ms, self.generation)
    }

    /// Call on every problem/level replacement
    pub fn bump_generation(&mut self) {
        self.generation += 1;
    }

    /// Back to a fresh game: score, feedback, timers and interaction cleared
    pub fn reset(&mut self) {
        self.score = 0;
        self.feedback = None;
        self.deferred.clear();
        self.clear_interaction();
        self.hands.clear();
        self.bump_generation();
    }

    // ========================================================================
    // SCORE + FEEDBACK
    // ========================================================================

    pub fn add_score(&mut self, points: u32) -> GameEvent {
        self.score += points;
        info!(points, score = self.score, "score");
        GameEvent::ScoreChanged { delta: points as i32, score: self.score }
    }

    /// Subtract, never going below zero
    pub fn deduct_score(&mut self, points: u32) -> GameEvent {
        let before = self.score;
        self.score = self.score.saturating_sub(points);
        info!(points, score = self.score, "penalty");
        GameEvent::ScoreChanged { delta: self.score as i32 - before as i32, score: self.score }
    }

    pub fn show_feedback(&mut self, message: impl Into<String>, tone: Tone, now_ms: f64, duration_ms: f64) -> GameEvent {
        let feedback = Feedback::new(message, tone, now_ms, duration_ms);
        let event = GameEvent::FeedbackShown { message: feedback.message.clone(), tone };
        self.feedback = Some(feedback);
        event
    }

    /// While true, answers for the current problem are not accepted
    pub fn feedback_active(&self, now_ms: f64) -> bool {
        self.feedback.as_ref().is_some_and(|f| f.is_active(now_ms))
    }

    pub fn feedback_view(&self, now_ms: f64) -> Option<FeedbackView> {
        self.feedback
            .as_ref()
            .filter(|f| f.is_active(now_ms))
            .map(FeedbackView::from)
    }
}
