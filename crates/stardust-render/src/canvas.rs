//! A CPU raster drawing surface: RGBA f32 pixels with alpha-blended fills,
//! gradient fills, and thick-line strokes.

use glam::Vec2;

use crate::color::Rgba;

/// A 2D raster surface. Pixels are stored row-major as RGBA f32.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a surface of the given size, cleared to opaque black.
    ///
    /// Returns `None` for a zero-area surface; callers treat that as the
    /// surface being absent and skip rendering entirely.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![Rgba::new(0.0, 0.0, 0.0, 1.0); (width * height) as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read a pixel. Panics outside the surface; callers clip first.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y * self.width + x) as usize;
        self.pixels[idx] = color.over(self.pixels[idx]);
    }

    /// Blend a color over the whole surface. With a low-alpha color this is
    /// the motion-trail fade; with an opaque one it is a hard clear.
    pub fn fill(&mut self, color: Rgba) {
        for pixel in &mut self.pixels {
            *pixel = color.over(*pixel);
        }
    }

    /// Blend a color over an axis-aligned rect, clipped to the surface.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((y + h).ceil().max(0.0) as u32).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Fill a solid disc, clipped to the surface.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        self.for_each_in_disc(center, radius, |canvas, px, py, _| {
            canvas.blend_pixel(px, py, color);
        });
    }

    /// Fill a disc with a radial gradient given as `(offset, color)` stops,
    /// offsets ascending in `[0, 1]`. Colors are interpolated linearly
    /// between adjacent stops; beyond the last stop the final color applies.
    pub fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba)]) {
        if radius <= 0.0 || stops.is_empty() {
            return;
        }
        self.for_each_in_disc(center, radius, |canvas, px, py, t| {
            canvas.blend_pixel(px, py, sample_stops(stops, t));
        });
    }

    /// Stroke a polyline of the given width, with the color interpolated from
    /// `from` at the first point to `to` at the last, by arc length.
    pub fn stroke_polyline_gradient(
        &mut self,
        points: &[Vec2],
        width: f32,
        from: Rgba,
        to: Rgba,
    ) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let total: f32 = points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).length())
            .sum();
        if total <= 0.0 {
            return;
        }
        let mut travelled = 0.0_f32;
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let seg_len = (b - a).length();
            let color_a = from.lerp(to, travelled / total);
            let color_b = from.lerp(to, (travelled + seg_len) / total);
            self.stroke_segment(a, b, width, color_a, color_b);
            travelled += seg_len;
        }
    }

    /// Convert to packed RGBA8 bytes for PNG export, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.push((pixel.r.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((pixel.g.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((pixel.b.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((pixel.a.clamp(0.0, 1.0) * 255.0) as u8);
        }
        bytes
    }

    /// Visit pixels inside a disc, passing the normalized distance from the
    /// center in `[0, 1]`.
    fn for_each_in_disc(
        &mut self,
        center: Vec2,
        radius: f32,
        mut visit: impl FnMut(&mut Self, u32, u32, f32),
    ) {
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = (((center.x + radius).ceil() + 1.0).max(0.0) as u32).min(self.width);
        let y1 = (((center.y + radius).ceil() + 1.0).max(0.0) as u32).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = (p - center).length();
                if dist <= radius {
                    visit(self, px, py, dist / radius);
                }
            }
        }
    }

    /// Rasterize one thick segment with a color ramp along it.
    fn stroke_segment(&mut self, a: Vec2, b: Vec2, width: f32, color_a: Rgba, color_b: Rgba) {
        let half = width * 0.5;
        let x0 = (a.x.min(b.x) - half).floor().max(0.0) as u32;
        let y0 = (a.y.min(b.y) - half).floor().max(0.0) as u32;
        let x1 = (((a.x.max(b.x) + half).ceil() + 1.0).max(0.0) as u32).min(self.width);
        let y1 = (((a.y.max(b.y) + half).ceil() + 1.0).max(0.0) as u32).min(self.height);
        let ab = b - a;
        let len_sq = ab.length_squared();
        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                // Project onto the segment to find the closest point.
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let closest = a + ab * t;
                if (p - closest).length() <= half {
                    self.blend_pixel(px, py, color_a.lerp(color_b, t));
                }
            }
        }
    }
}

/// Sample a stop list at parameter `t`.
fn sample_stops(stops: &[(f32, Rgba)], t: f32) -> Rgba {
    let mut prev = stops[0];
    if t <= prev.0 {
        return prev.1;
    }
    for &stop in &stops[1..] {
        if t <= stop.0 {
            let span = stop.0 - prev.0;
            let local = if span > 0.0 { (t - prev.0) / span } else { 1.0 };
            return prev.1.lerp(stop.1, local);
        }
        prev = stop;
    }
    prev.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_surface_is_absent() {
        assert!(Canvas::new(0, 100).is_none());
        assert!(Canvas::new(100, 0).is_none());
        assert!(Canvas::new(1, 1).is_some());
    }

    #[test]
    fn test_new_canvas_is_opaque_black() {
        let canvas = Canvas::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Rgba::new(0.0, 0.0, 0.0, 1.0));
            }
        }
    }

    #[test]
    fn test_low_alpha_fill_fades_rather_than_clears() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.fill_circle(Vec2::new(1.0, 1.0), 2.0, Rgba::WHITE);
        let before = canvas.pixel(0, 0);
        canvas.fill(Rgba::new(0.043, 0.063, 0.125, 0.1));
        let after = canvas.pixel(0, 0);
        assert!(
            after.r > 0.5,
            "A 10% overlay must not wipe the white pixel, got r={}",
            after.r
        );
        assert!(after.r < before.r, "Overlay should dim the pixel slightly");
    }

    #[test]
    fn test_fill_rect_clips_to_surface() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        // Way out of bounds, must not panic.
        canvas.fill_rect(-10.0, -10.0, 100.0, 100.0, Rgba::WHITE);
        assert_eq!(canvas.pixel(3, 3).r, 1.0);
    }

    #[test]
    fn test_fill_circle_hits_center_not_corners() {
        let mut canvas = Canvas::new(9, 9).unwrap();
        canvas.fill_circle(Vec2::new(4.5, 4.5), 2.0, Rgba::WHITE);
        assert_eq!(canvas.pixel(4, 4).r, 1.0);
        assert_eq!(canvas.pixel(0, 0).r, 0.0);
        assert_eq!(canvas.pixel(8, 8).r, 0.0);
    }

    #[test]
    fn test_radial_gradient_fades_outward() {
        let mut canvas = Canvas::new(21, 21).unwrap();
        let center = Vec2::new(10.5, 10.5);
        let white = Rgba::WHITE;
        canvas.fill_radial_gradient(
            center,
            10.0,
            &[
                (0.0, white),
                (0.5, white.with_alpha(0.5)),
                (1.0, white.with_alpha(0.0)),
            ],
        );
        let middle = canvas.pixel(10, 10).r;
        let edge = canvas.pixel(10, 2).r;
        assert!(
            middle > edge,
            "Gradient center ({middle}) should be brighter than its edge ({edge})"
        );
        assert_eq!(
            canvas.pixel(0, 0).r,
            0.0,
            "Pixels outside the gradient radius must stay untouched"
        );
    }

    #[test]
    fn test_polyline_gradient_brightens_toward_head() {
        let mut canvas = Canvas::new(40, 8).unwrap();
        let points: Vec<Vec2> = (0..8).map(|i| Vec2::new(2.0 + i as f32 * 5.0, 4.0)).collect();
        canvas.stroke_polyline_gradient(
            &points,
            2.0,
            Rgba::WHITE.with_alpha(0.0),
            Rgba::WHITE.with_alpha(1.0),
        );
        let tail = canvas.pixel(2, 4).r;
        let head = canvas.pixel(36, 4).r;
        assert!(
            head > tail,
            "Stroke head ({head}) should be brighter than its tail ({tail})"
        );
    }

    #[test]
    fn test_degenerate_strokes_are_ignored() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.stroke_polyline_gradient(&[Vec2::ZERO], 2.0, Rgba::WHITE, Rgba::WHITE);
        canvas.stroke_polyline_gradient(
            &[Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)],
            2.0,
            Rgba::WHITE,
            Rgba::WHITE,
        );
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y).r, 0.0);
            }
        }
    }

    #[test]
    fn test_sample_stops_interpolates_between_stops() {
        let stops = [
            (0.0, Rgba::new(1.0, 0.0, 0.0, 1.0)),
            (1.0, Rgba::new(0.0, 0.0, 1.0, 1.0)),
        ];
        let mid = sample_stops(&stops, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sample_stops_clamps_past_last_stop() {
        let stops = [(0.0, Rgba::WHITE), (0.5, Rgba::TRANSPARENT)];
        assert_eq!(sample_stops(&stops, 0.9), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_to_rgba8_size_and_range() {
        let mut canvas = Canvas::new(8, 6).unwrap();
        canvas.fill_circle(Vec2::new(4.0, 3.0), 2.0, Rgba::new(0.5, 0.25, 1.0, 1.0));
        let bytes = canvas.to_rgba8();
        assert_eq!(bytes.len(), 8 * 6 * 4);
    }
}
