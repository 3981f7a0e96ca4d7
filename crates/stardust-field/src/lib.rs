//! Particle field simulation for the Stardust background.
//!
//! Owns three populations of visual entities (stars, nebulae, transient
//! shooting stars), advances them one frame at a time, and exposes read-only
//! views for a painter. All randomness flows through a seeded ChaCha8 RNG so
//! whole runs are reproducible.

mod field;
mod nebula;
mod shooting;
mod star;

pub use field::{FieldConfig, ParticleField};
pub use nebula::{NEBULA_PALETTE, Nebula, NebulaPulse};
pub use shooting::{OPACITY_DECAY, ShootingStar, TRAIL_CAPACITY};
pub use star::{STAR_PALETTE, Star, Twinkle};
