//! Geometry module - angles, angle measurement and hit testing
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod measure;

pub use angles::{angle_difference, classify_angle, vector_angle, AngleCategory};
pub use measure::{
    measure, measure_one_hand, measure_two_hands, ray_intersection, AngleMeasurement,
    FrameSize, MeasureMode, PARALLEL_DETERMINANT,
};
pub use hit_test::{distance_sq, first_hit, row_layout, Rect};
