//! Hand Math Web - Gesture-Driven Math Games
//! 
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
pub mod config;
pub mod error;
pub mod games;
pub mod geometry;
pub mod gesture;
pub mod hand;
pub mod problems;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure, display_model_json, hand_skeleton, process_frame, report_tracker_failure,
    reset_game, return_to_menu, set_target_regions, start_game, tick,
};
pub use bridge::{decode_frame, handedness_from_code, Session, MAX_HANDS};
pub use config::Tuning;
pub use error::{Error, Result};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_runtime() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("✅ hand-math-web loaded");
}
