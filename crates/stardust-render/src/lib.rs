//! CPU 2D raster surface and the frame painter for the Stardust particle
//! field.
//!
//! [`Canvas`] stores RGBA f32 pixels and exposes the handful of drawing
//! operations the field needs: alpha-blended rect fill, radial and linear
//! gradient fills, and circle fills. [`painter`] draws one frame of a
//! [`stardust_field::ParticleField`] in the fixed layer order: fade overlay,
//! nebulae, stars, shooting stars.

mod canvas;
mod color;
pub mod painter;

pub use canvas::Canvas;
pub use color::Rgba;
