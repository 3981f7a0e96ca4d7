//! Nebulae: large soft radial glows that slowly pulse in radius and opacity.

use glam::Vec2;
use rand::Rng;

/// Fixed nebula palette in linear RGB: violet, cyan, amber.
///
/// Assigned by cycling the index rather than sampling, so the three default
/// nebulae always cover all three colors.
pub const NEBULA_PALETTE: [[f32; 3]; 3] = [
    [0.545, 0.361, 0.965],
    [0.024, 0.714, 0.831],
    [0.961, 0.620, 0.043],
];

/// A single nebula. Same lifecycle as stars: recreated wholesale on resize.
#[derive(Clone, Debug)]
pub struct Nebula {
    /// Center position in surface pixels.
    pub pos: Vec2,
    /// Base radius in pixels, in `[100, 300)`.
    pub radius: f32,
    /// Color cycled from [`NEBULA_PALETTE`] by creation index.
    pub color: [f32; 3],
    /// Base opacity in `[0.05, 0.15)`. Kept low so stars show through.
    pub opacity: f32,
    /// Pulse angular speed in radians per millisecond.
    pub pulse_speed: f32,
    /// Pulse phase offset in `[0, 2π)`.
    pub pulse_phase: f32,
}

/// Time-evaluated pulse state of a nebula.
#[derive(Clone, Copy, Debug)]
pub struct NebulaPulse {
    /// Current radius in pixels.
    pub radius: f32,
    /// Current peak opacity at the gradient center.
    pub opacity: f32,
}

impl Nebula {
    /// Evaluate the pulse oscillation at `time_ms` of simulated time.
    ///
    /// Radius swings ±20 px around the base; opacity swings ±0.02 around the
    /// base, which the base range keeps strictly positive.
    pub fn pulse(&self, time_ms: f64) -> NebulaPulse {
        let p = (time_ms as f32 * self.pulse_speed + self.pulse_phase).sin();
        NebulaPulse {
            radius: self.radius + p * 20.0,
            opacity: self.opacity + p * 0.02,
        }
    }
}

/// Generate a fresh nebula population uniformly over a `width` x `height`
/// surface, cycling colors through the palette by index.
pub fn generate(rng: &mut impl Rng, count: usize, width: f32, height: f32) -> Vec<Nebula> {
    let mut nebulae = Vec::with_capacity(count);
    for i in 0..count {
        nebulae.push(Nebula {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            radius: rng.random::<f32>() * 200.0 + 100.0,
            color: NEBULA_PALETTE[i % NEBULA_PALETTE.len()],
            opacity: rng.random::<f32>() * 0.1 + 0.05,
            pulse_speed: rng.random::<f32>() * 0.001 + 0.0005,
            pulse_phase: rng.random::<f32>() * std::f32::consts::TAU,
        });
    }
    nebulae
}
