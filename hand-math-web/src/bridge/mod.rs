//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frame;
mod session;

pub use frame::{decode_frame, handedness_from_code, MAX_HANDS};

pub use session::{
    // WASM entry points
    configure,
    start_game,
    process_frame,
    tick,
    display_model_json,
    reset_game,
    set_target_regions,
    return_to_menu,
    report_tracker_failure,
    hand_skeleton,
    // Internal API
    Session,
};
