//! RightBox levels: numbers to drag into the box if they match the parity

use rand::Rng;
use serde::Serialize;

use crate::config::SpawnRegion;

use super::numbers::Parity;

pub const VALUE_MIN: u32 = 1;
pub const VALUE_MAX: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DraggableNumber {
    pub id: u32,
    pub value: u32,
    pub x: f32,
    pub y: f32,
    pub is_dragging: bool,
}

impl DraggableNumber {
    pub fn new(id: u32, value: u32, x: f32, y: f32) -> Self {
        Self { id, value, x, y, is_dragging: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RightBoxLevel {
    pub target_type: Parity,
    pub numbers: Vec<DraggableNumber>,
}

impl RightBoxLevel {
    /// `count` items in the spawn region, at least one matching the target
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, spawn: &SpawnRegion, count: usize) -> Self {
        let target_type = Parity::random(rng);
        let mut numbers: Vec<DraggableNumber> = (0..count as u32)
            .map(|id| {
                let (x, y) = random_position(rng, spawn);
                DraggableNumber::new(id, rng.gen_range(VALUE_MIN..=VALUE_MAX), x, y)
            })
            .collect();

        if !numbers.iter().any(|n| target_type.matches(n.value)) {
            if let Some(first) = numbers.first_mut() {
                // Neighbouring value always has the other parity
                first.value = if first.value < VALUE_MAX { first.value + 1 } else { first.value - 1 };
            }
        }

        Self { target_type, numbers }
    }

    /// Items still waiting to be sorted into the box
    pub fn remaining_targets(&self) -> usize {
        self.numbers.iter().filter(|n| self.target_type.matches(n.value)).count()
    }
}

/// Uniform point in the spawn region
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, spawn: &SpawnRegion) -> (f32, f32) {
    let x = if spawn.x_max > spawn.x_min { rng.gen_range(spawn.x_min..=spawn.x_max) } else { spawn.x_min };
    let y = if spawn.y_max > spawn.y_min { rng.gen_range(spawn.y_min..=spawn.y_max) } else { spawn.y_min };
    (x, y)
}
