//! Stardust application framework.
//!
//! Drives the particle field with a fixed-timestep frame loop, paints each
//! frame onto the CPU canvas, and optionally writes PNG snapshots. Unlike a
//! browser animation loop, the runner has an explicit stop handle so it can
//! be torn down deterministically.

mod error;
pub mod frame_loop;
pub mod runner;
pub mod snapshot;

pub use error::AppError;
pub use runner::{FieldRunner, RunHandle};
