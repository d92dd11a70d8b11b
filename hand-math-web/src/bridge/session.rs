//! Active game session and its JS entry points
//!
//! The screen shell starts one game at a time, feeds it tracker frames and
//! reads back a JSON display model. Tearing the game down is the shell's
//! cue to release the camera and tracker.

use std::cell::RefCell;

use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::config::Tuning;
use crate::error::{Error, Result};
use crate::games::{self, DisplayModel, Game, GameEvent, GameKind};
use crate::geometry::Rect;
use crate::hand::{FrameResult, HAND_SKELETON};

use super::frame::decode_frame;

/// Tuning plus the one running game, if any
pub struct Session {
    tuning: Tuning,
    game: Option<Box<dyn Game>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning, game: None }
    }

    /// Replace the tuning used by the next game started
    pub fn configure(&mut self, json: &str) -> Result<()> {
        self.tuning = Tuning::from_json(json)?;
        info!("⚙️ tuning updated");
        Ok(())
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn start(&mut self, kind: GameKind, seed: Option<u64>) {
        if let Some(old) = self.stop() {
            info!(%old, "replacing running game");
        }
        self.game = Some(games::create(kind, self.tuning.clone(), seed));
        info!(%kind, "🎮 game started");
    }

    /// Tear down the running game, returning which one it was
    pub fn stop(&mut self) -> Option<GameKind> {
        let kind = self.game.take().map(|g| g.kind());
        if let Some(kind) = kind {
            info!(%kind, "game stopped");
        }
        kind
    }

    pub fn active(&self) -> Option<GameKind> {
        self.game.as_ref().map(|g| g.kind())
    }

    fn game_mut(&mut self) -> Result<&mut Box<dyn Game>> {
        self.game.as_mut().ok_or(Error::NoActiveGame)
    }

    pub fn process(&mut self, frame: &FrameResult, now_ms: f64) -> Result<Vec<GameEvent>> {
        Ok(self.game_mut()?.update(frame, now_ms))
    }

    pub fn tick(&mut self, now_ms: f64) -> Result<Vec<GameEvent>> {
        Ok(self.game_mut()?.tick(now_ms))
    }

    pub fn display(&self, now_ms: f64) -> Result<DisplayModel> {
        self.game
            .as_ref()
            .map(|g| g.display(now_ms))
            .ok_or(Error::NoActiveGame)
    }

    pub fn reset(&mut self, now_ms: f64) -> Result<()> {
        self.game_mut()?.reset(now_ms);
        Ok(())
    }

    /// Flat [x, y, width, height, ...] boxes measured by the renderer
    pub fn set_target_regions(&mut self, flat: &[f32]) -> Result<()> {
        if flat.len() % 4 != 0 {
            return Err(Error::RegionLength(flat.len()));
        }
        let regions = flat
            .chunks_exact(4)
            .map(|r| Rect::new(r[0], r[1], r[2], r[3]))
            .collect();
        self.game_mut()?.set_target_regions(regions);
        Ok(())
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

fn events_json(events: &[GameEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

// ============================================================================
// WASM API
// ============================================================================

/// Override tuning with a (partial) JSON object; applies to the next game
#[wasm_bindgen]
pub fn configure(json: &str) -> std::result::Result<(), JsValue> {
    SESSION.with(|s| s.borrow_mut().configure(json))?;
    Ok(())
}

#[wasm_bindgen]
pub fn start_game(kind: &str) -> std::result::Result<(), JsValue> {
    let kind: GameKind = kind.parse()?;
    SESSION.with(|s| s.borrow_mut().start(kind, None));
    Ok(())
}

/// Called once per tracker result. Returns the frame's events as JSON.
#[wasm_bindgen]
pub fn process_frame(flat: &[f32], handedness: &[u8], scores: &[f32]) -> std::result::Result<String, JsValue> {
    let now = js_sys::Date::now();
    let frame = decode_frame(flat, handedness, scores).map_err(|e| {
        warn!("rejected frame: {}", e);
        e
    })?;
    let events = SESSION.with(|s| s.borrow_mut().process(&frame, now))?;
    Ok(events_json(&events))
}

/// Fire due timers between tracker frames
#[wasm_bindgen]
pub fn tick() -> std::result::Result<String, JsValue> {
    let now = js_sys::Date::now();
    let events = SESSION.with(|s| s.borrow_mut().tick(now))?;
    Ok(events_json(&events))
}

#[wasm_bindgen]
pub fn display_model_json() -> std::result::Result<String, JsValue> {
    let now = js_sys::Date::now();
    let model = SESSION.with(|s| s.borrow().display(now))?;
    Ok(model.to_json())
}

#[wasm_bindgen]
pub fn reset_game() -> std::result::Result<(), JsValue> {
    let now = js_sys::Date::now();
    SESSION.with(|s| s.borrow_mut().reset(now))?;
    Ok(())
}

#[wasm_bindgen]
pub fn set_target_regions(flat: &[f32]) -> std::result::Result<(), JsValue> {
    SESSION.with(|s| s.borrow_mut().set_target_regions(flat))?;
    Ok(())
}

/// Leave the game; the shell should stop the camera and tracker next
#[wasm_bindgen]
pub fn return_to_menu() {
    SESSION.with(|s| s.borrow_mut().stop());
}

/// The shell could not start the tracker: stop any game and surface the
/// failure as an initialization error
#[wasm_bindgen]
pub fn report_tracker_failure(message: &str) -> std::result::Result<(), JsValue> {
    SESSION.with(|s| s.borrow_mut().stop());
    error!("❌ hand tracker unavailable: {}", message);
    Err(Error::TrackerUnavailable(message.to_string()).into())
}

/// Flat (from, to) landmark index pairs for the skeleton overlay
#[wasm_bindgen]
pub fn hand_skeleton() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}
