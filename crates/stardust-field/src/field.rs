//! The owning particle field: populations, pointer state, spawn gating, and
//! the per-frame advance step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::nebula::{self, Nebula};
use crate::shooting::ShootingStar;
use crate::star::{self, Star};

/// Tunable parameters of the particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of background stars.
    pub star_count: usize,
    /// Number of nebulae.
    pub nebula_count: usize,
    /// Upper bound on the random part of a star's base size, in pixels.
    pub max_star_size: f32,
    /// Simulated milliseconds between shooting-star spawn rolls.
    pub spawn_interval_ms: f64,
    /// Probability that a spawn roll produces a shooting star.
    pub spawn_chance: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: 200,
            nebula_count: 3,
            max_star_size: 2.5,
            spawn_interval_ms: 5000.0,
            spawn_chance: 0.5,
        }
    }
}

/// The animated particle field.
///
/// Owns all mutable state: entity populations, the pointer position, the
/// simulated clock, and the RNG. Input notifications and the frame step go
/// through methods on this struct; there are no ambient globals. Everything
/// is deterministic for a given seed and call sequence.
pub struct ParticleField {
    config: FieldConfig,
    rng: ChaCha8Rng,
    width: f32,
    height: f32,
    stars: Vec<Star>,
    nebulae: Vec<Nebula>,
    shooting_stars: Vec<ShootingStar>,
    pointer: Vec2,
    clock_ms: f64,
    spawn_accumulator_ms: f64,
    spawn_count: u64,
}

impl ParticleField {
    /// Construct a field for a `width` x `height` surface and generate the
    /// initial star and nebula populations from `seed`.
    pub fn new(config: FieldConfig, seed: u64, width: f32, height: f32) -> Self {
        let mut field = Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            width,
            height,
            stars: Vec::new(),
            nebulae: Vec::new(),
            shooting_stars: Vec::new(),
            pointer: Vec2::new(width * 0.5, height * 0.5),
            clock_ms: 0.0,
            spawn_accumulator_ms: 0.0,
            spawn_count: 0,
        };
        field.regenerate();
        field
    }

    /// Adopt new surface dimensions and rebuild stars and nebulae from
    /// scratch. Discarding the old populations is the simplest policy that
    /// keeps counts exact; visual continuity across a resize is not a goal.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug!(width, height, "particle field resized, regenerating populations");
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.stars = star::generate(
            &mut self.rng,
            self.config.star_count,
            self.width,
            self.height,
            self.config.max_star_size,
        );
        self.nebulae = nebula::generate(
            &mut self.rng,
            self.config.nebula_count,
            self.width,
            self.height,
        );
    }

    /// Record the latest pointer position, in surface pixels. Called from
    /// input handling; read by the painter for parallax.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance one frame covering `dt_ms` of simulated time.
    ///
    /// Runs the spawn gate for every interval boundary the frame crosses,
    /// steps each live shooting star once, and drops the expired ones. Stars
    /// and nebulae need no stepping; their oscillations are pure functions of
    /// [`time_ms`](Self::time_ms).
    pub fn advance(&mut self, dt_ms: f64) {
        self.clock_ms += dt_ms;

        self.spawn_accumulator_ms += dt_ms;
        while self.spawn_accumulator_ms >= self.config.spawn_interval_ms {
            self.spawn_accumulator_ms -= self.config.spawn_interval_ms;
            if self.rng.random::<f32>() < self.config.spawn_chance {
                self.spawn_shooting_star();
            }
        }

        for star in &mut self.shooting_stars {
            star.advance();
        }
        let (width, height) = (self.width, self.height);
        self.shooting_stars.retain(|s| !s.expired(width, height));
    }

    /// Create one shooting star immediately, bypassing the interval gate.
    pub fn spawn_shooting_star(&mut self) {
        let star = ShootingStar::spawn(&mut self.rng, self.width, self.height);
        trace!(pos = %star.pos(), speed = star.speed(), "shooting star spawned");
        self.shooting_stars.push(star);
        self.spawn_count += 1;
    }

    /// Total shooting stars spawned since construction.
    pub fn spawn_count(&self) -> u64 {
        self.spawn_count
    }

    /// Simulated milliseconds since construction; the time base for twinkle
    /// and pulse evaluation.
    pub fn time_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Last known pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Current star population.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Current nebula population.
    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    /// Live shooting stars.
    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }
}
