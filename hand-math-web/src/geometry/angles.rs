//! Vector angles and angle classification
//!
//! Inputs are screen-space points (y grows downward). Angles are reported
//! in degrees, counter-clockwise, in a y-up convention.

use serde::Serialize;

/// Angle of the vector p1 → p2 in [0, 360)
pub fn vector_angle(p1: (f32, f32), p2: (f32, f32)) -> f32 {
    let dx = p2.0 - p1.0;
    // Screen y points down; flip it so counter-clockwise is positive
    let dy = -(p2.1 - p1.1);
    let raw = dy.atan2(dx).to_degrees();
    normalize(if raw < 0.0 { raw + 360.0 } else { raw })
}

/// Counter-clockwise sweep from a1 to a2, in [0, 360)
pub fn angle_difference(a1: f32, a2: f32) -> f32 {
    normalize((a2 - a1).rem_euclid(360.0))
}

/// rem_euclid and +360 can round up to exactly 360 for tiny negatives
fn normalize(deg: f32) -> f32 {
    if deg >= 360.0 { 0.0 } else { deg }
}

/// Named angle categories, with a few degrees of jitter tolerance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleCategory {
    Complete,
    Acute,
    Right,
    Obtuse,
    Straight,
    Reflex,
}

impl AngleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AngleCategory::Complete => "Complete (360°)",
            AngleCategory::Acute => "Acute",
            AngleCategory::Right => "Right (90°)",
            AngleCategory::Obtuse => "Obtuse",
            AngleCategory::Straight => "Straight (180°)",
            AngleCategory::Reflex => "Reflex",
        }
    }
}

pub fn classify_angle(degrees: f32) -> AngleCategory {
    if degrees < 5.0 || degrees > 355.0 {
        AngleCategory::Complete
    } else if degrees < 85.0 {
        AngleCategory::Acute
    } else if degrees <= 95.0 {
        AngleCategory::Right
    } else if degrees < 175.0 {
        AngleCategory::Obtuse
    } else if degrees <= 185.0 {
        AngleCategory::Straight
    } else {
        AngleCategory::Reflex
    }
}
