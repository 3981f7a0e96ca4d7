//! Shooting stars: transient streaks that fly down-right, fade out, and drag
//! a bounded trail of recent positions behind them.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

/// Maximum number of trail positions retained; oldest evicted first.
pub const TRAIL_CAPACITY: usize = 20;

/// Opacity lost per frame. At 1.0 starting opacity a shooting star survives
/// at most 67 frames before it fades out.
pub const OPACITY_DECAY: f32 = 0.015;

/// A transient shooting star.
///
/// Lifecycle: spawned, advanced once per frame, removed by the owning field
/// once [`expired`](Self::expired) reports true.
#[derive(Clone, Debug)]
pub struct ShootingStar {
    pos: Vec2,
    length: f32,
    speed: f32,
    angle: f32,
    opacity: f32,
    trail: VecDeque<Vec2>,
}

impl ShootingStar {
    /// Create a shooting star with explicit parameters.
    pub fn new(pos: Vec2, length: f32, speed: f32, angle: f32) -> Self {
        Self {
            pos,
            length,
            speed,
            angle,
            opacity: 1.0,
            trail: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    /// Create a randomized shooting star: origin anywhere along the width but
    /// only in the top half of the surface, heading roughly 45° down-right
    /// with a small angle jitter.
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * width,
            rng.random::<f32>() * (height * 0.5),
        );
        let length = rng.random::<f32>() * 80.0 + 40.0;
        let speed = rng.random::<f32>() * 15.0 + 10.0;
        let angle = std::f32::consts::FRAC_PI_4 + (rng.random::<f32>() - 0.5) * 0.5;
        Self::new(pos, length, speed, angle)
    }

    /// Advance one frame: move along the heading, decay opacity, and record
    /// the new position in the trail (evicting beyond [`TRAIL_CAPACITY`]).
    pub fn advance(&mut self) {
        self.pos += Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;
        self.opacity -= OPACITY_DECAY;
        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(self.pos);
    }

    /// Whether this star is done: fully faded, or past the right or bottom
    /// edge of the surface. Pure function of current state.
    pub fn expired(&self, width: f32, height: f32) -> bool {
        self.opacity <= 0.0 || self.pos.x > width || self.pos.y > height
    }

    /// Current head position in surface pixels.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Nominal streak length in pixels.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Speed in pixels per frame.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Heading in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current opacity; starts at 1.0, decays to and below zero.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Recent positions, oldest first. Never longer than [`TRAIL_CAPACITY`].
    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }
}
