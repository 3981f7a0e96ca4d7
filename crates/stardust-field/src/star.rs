//! Background stars: static points with a per-star twinkle oscillation and a
//! parallax factor that shifts their apparent position with the pointer.

use glam::Vec2;
use rand::Rng;

/// Fixed star palette in linear RGB: white, violet, cyan, amber, pink.
pub const STAR_PALETTE: [[f32; 3]; 5] = [
    [1.0, 1.0, 1.0],
    [0.545, 0.361, 0.965],
    [0.024, 0.714, 0.831],
    [0.961, 0.620, 0.043],
    [0.925, 0.282, 0.600],
];

/// A single background star.
///
/// Immutable after creation; only the time-dependent twinkle evaluation
/// changes how it is rendered. Recreated wholesale on resize.
#[derive(Clone, Debug)]
pub struct Star {
    /// Position in surface pixels.
    pub pos: Vec2,
    /// Base radius in pixels. Always positive.
    pub size: f32,
    /// Color drawn from [`STAR_PALETTE`] at creation.
    pub color: [f32; 3],
    /// Twinkle angular speed in radians per millisecond.
    pub twinkle_speed: f32,
    /// Twinkle phase offset in `[0, 2π)`.
    pub twinkle_phase: f32,
    /// How strongly pointer movement shifts this star, in `[0.1, 0.6)`.
    /// Higher factors read as closer to the viewer.
    pub parallax: f32,
}

/// Time-evaluated twinkle state of a star.
#[derive(Clone, Copy, Debug)]
pub struct Twinkle {
    /// Current opacity in `[0, 1]`.
    pub opacity: f32,
    /// Current radius in pixels, strictly positive.
    pub size: f32,
}

impl Star {
    /// Evaluate the twinkle oscillation at `time_ms` of simulated time.
    ///
    /// Opacity swings over the full `[0, 1]` range; size oscillates between
    /// 60% and 100% of the base size so it never collapses to zero.
    pub fn twinkle(&self, time_ms: f64) -> Twinkle {
        let t = (time_ms as f32 * self.twinkle_speed + self.twinkle_phase).sin();
        Twinkle {
            opacity: 0.5 + t * 0.5,
            size: self.size * (0.8 + t * 0.2),
        }
    }

    /// Parallax offset for a pointer position on a surface centered at
    /// `center`. Scaled by a small constant so even the strongest factor
    /// moves a star by a fraction of the pointer excursion.
    pub fn parallax_offset(&self, pointer: Vec2, center: Vec2) -> Vec2 {
        (pointer - center) * self.parallax * 0.01
    }
}

/// Generate a fresh star population uniformly over a `width` x `height`
/// surface. Base sizes land in `[0.5, 0.5 + max_size)`.
pub fn generate(rng: &mut impl Rng, count: usize, width: f32, height: f32, max_size: f32) -> Vec<Star> {
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        stars.push(Star {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            size: rng.random::<f32>() * max_size + 0.5,
            color: STAR_PALETTE[rng.random_range(0..STAR_PALETTE.len())],
            twinkle_speed: rng.random::<f32>() * 0.02 + 0.005,
            twinkle_phase: rng.random::<f32>() * std::f32::consts::TAU,
            parallax: rng.random::<f32>() * 0.5 + 0.1,
        });
    }
    stars
}
