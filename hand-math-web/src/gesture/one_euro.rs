//! One Euro Filter - adaptive low-pass filter for cursor jitter
//!
//! Smooth when the fingertip is still, responsive when it moves fast.

use std::f32::consts::PI;

use crate::config::SmoothingParams;

/// Derivative cutoff (Hz)
const D_CUTOFF: f32 = 1.0;

/// Last filtered sample: value, derivative, timestamp (s)
#[derive(Clone, Copy, Debug)]
struct Sample {
    value: f32,
    slope: f32,
    t: f64,
}

/// Adaptive low-pass filter over one fingertip coordinate
#[derive(Clone, Debug)]
pub struct OneEuroFilter {
    params: SmoothingParams,
    last: Option<Sample>,
}

fn alpha(dt: f32, cutoff: f32) -> f32 {
    let r = 2.0 * PI * cutoff * dt;
    r / (r + 1.0)
}

impl OneEuroFilter {
    pub fn new(params: SmoothingParams) -> Self {
        Self { params, last: None }
    }

    /// Filter one sample. `t` is in seconds.
    pub fn filter(&mut self, t: f64, x: f32) -> f32 {
        let Some(last) = self.last else {
            self.last = Some(Sample { value: x, slope: 0.0, t });
            return x;
        };

        let dt = (t - last.t) as f32;
        if dt <= 0.0 {
            return last.value;
        }

        let a_d = alpha(dt, D_CUTOFF);
        let slope = a_d * (x - last.value) / dt + (1.0 - a_d) * last.slope;
        let cutoff = self.params.min_cutoff + self.params.beta * slope.abs();
        let a = alpha(dt, cutoff);
        let value = a * x + (1.0 - a) * last.value;

        self.last = Some(Sample { value, slope, t });
        value
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Cursor filter: one channel per axis
#[derive(Clone, Debug)]
pub struct OneEuroFilter2D {
    x: OneEuroFilter,
    y: OneEuroFilter,
}

impl OneEuroFilter2D {
    pub fn new(params: SmoothingParams) -> Self {
        Self { x: OneEuroFilter::new(params), y: OneEuroFilter::new(params) }
    }

    pub fn filter(&mut self, t: f64, pos: (f32, f32)) -> (f32, f32) {
        (self.x.filter(t, pos.0), self.y.filter(t, pos.1))
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
