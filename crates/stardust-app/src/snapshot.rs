//! PNG export of rendered frames.

use std::io::BufWriter;
use std::path::Path;

use stardust_render::Canvas;

use crate::error::AppError;

/// Encode a canvas as an RGBA8 PNG at `path`, creating parent directories as
/// needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.to_rgba8())?;
    Ok(())
}
