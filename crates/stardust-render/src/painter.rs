//! Draws one frame of a particle field onto a [`Canvas`].
//!
//! Layer order is fixed: fade overlay, nebulae, stars, shooting stars. The
//! painter only reads the field; advancing it is the simulation's job.

use glam::Vec2;
use stardust_field::ParticleField;

use crate::canvas::Canvas;
use crate::color::Rgba;

/// The low-opacity overlay blended over the whole surface each frame instead
/// of a hard clear. Residual brightness from previous frames is what turns
/// shooting-star motion into streaks.
pub const FADE_OVERLAY: Rgba = Rgba::new(0.043, 0.063, 0.125, 0.1);

/// Stroke width of a shooting-star trail, in pixels.
const TRAIL_WIDTH: f32 = 2.0;

/// Radius of a shooting-star head, in pixels.
const HEAD_RADIUS: f32 = 2.0;

/// Paint one frame of `field` onto `canvas`.
pub fn paint(field: &ParticleField, canvas: &mut Canvas) {
    canvas.fill(FADE_OVERLAY);
    paint_nebulae(field, canvas);
    paint_stars(field, canvas);
    paint_shooting_stars(field, canvas);
}

fn paint_nebulae(field: &ParticleField, canvas: &mut Canvas) {
    let time = field.time_ms();
    for nebula in field.nebulae() {
        let pulse = nebula.pulse(time);
        let color = Rgba::from_rgb(nebula.color, pulse.opacity);
        canvas.fill_radial_gradient(
            nebula.pos,
            pulse.radius,
            &[
                (0.0, color),
                (0.5, color.with_alpha(pulse.opacity * 0.5)),
                (1.0, color.with_alpha(0.0)),
            ],
        );
    }
}

fn paint_stars(field: &ParticleField, canvas: &mut Canvas) {
    let time = field.time_ms();
    let center = Vec2::new(field.width() * 0.5, field.height() * 0.5);
    for star in field.stars() {
        let twinkle = star.twinkle(time);
        let pos = star.pos + star.parallax_offset(field.pointer(), center);
        let color = Rgba::from_rgb(star.color, 1.0);

        // Soft glow at twice the twinkle size, then the solid core.
        canvas.fill_radial_gradient(
            pos,
            twinkle.size * 2.0,
            &[
                (0.0, color),
                (0.5, color.with_alpha(twinkle.opacity * 0.5)),
                (1.0, color.with_alpha(0.0)),
            ],
        );
        canvas.fill_circle(pos, twinkle.size, color.with_alpha(twinkle.opacity));
    }
}

fn paint_shooting_stars(field: &ParticleField, canvas: &mut Canvas) {
    for star in field.shooting_stars() {
        let trail: Vec<Vec2> = star.trail().iter().copied().collect();
        if trail.len() > 1 {
            canvas.stroke_polyline_gradient(
                &trail,
                TRAIL_WIDTH,
                Rgba::WHITE.with_alpha(0.0),
                Rgba::WHITE.with_alpha(star.opacity()),
            );
        }
        canvas.fill_circle(star.pos(), HEAD_RADIUS, Rgba::WHITE.with_alpha(star.opacity()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardust_field::FieldConfig;

    fn paint_frame(field: &ParticleField, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height).unwrap();
        paint(field, &mut canvas);
        canvas
    }

    #[test]
    fn test_painted_frame_is_not_blank() {
        let field = ParticleField::new(FieldConfig::default(), 42, 200.0, 150.0);
        let canvas = paint_frame(&field, 200, 150);
        let lit = (0..150)
            .flat_map(|y| (0..200).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let p = canvas.pixel(x, y);
                p.r > FADE_OVERLAY.r || p.g > FADE_OVERLAY.g
            })
            .count();
        assert!(
            lit > 100,
            "200 stars and 3 nebulae should light up many pixels, got {lit}"
        );
    }

    #[test]
    fn test_every_pixel_stays_finite_and_in_range() {
        let mut field = ParticleField::new(FieldConfig::default(), 7, 120.0, 90.0);
        let mut canvas = Canvas::new(120, 90).unwrap();
        for _ in 0..10 {
            field.advance(1000.0 / 60.0);
            paint(&field, &mut canvas);
        }
        for y in 0..90 {
            for x in 0..120 {
                let p = canvas.pixel(x, y);
                for (name, v) in [("r", p.r), ("g", p.g), ("b", p.b), ("a", p.a)] {
                    assert!(
                        v.is_finite() && (0.0..=1.0).contains(&v),
                        "Channel {name} = {v} out of range at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_overlay_fades_previous_frame_instead_of_clearing() {
        let field = ParticleField::new(
            FieldConfig {
                star_count: 0,
                nebula_count: 0,
                ..FieldConfig::default()
            },
            1,
            40.0,
            40.0,
        );
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.fill_circle(Vec2::new(20.0, 20.0), 5.0, Rgba::WHITE);
        paint(&field, &mut canvas);
        let p = canvas.pixel(20, 20);
        assert!(
            p.r > 0.8,
            "One overlay pass must leave most of the white pixel, got r={}",
            p.r
        );
    }

    #[test]
    fn test_shooting_star_head_is_drawn_at_current_opacity() {
        let mut field = ParticleField::new(
            FieldConfig {
                star_count: 0,
                nebula_count: 0,
                ..FieldConfig::default()
            },
            1,
            400.0,
            300.0,
        );
        field.spawn_shooting_star();
        field.advance(1000.0 / 60.0);
        let head = field.shooting_stars()[0].pos();
        let canvas = paint_frame(&field, 400, 300);
        let px = (head.x as u32).min(399);
        let py = (head.y as u32).min(299);
        assert!(
            canvas.pixel(px, py).r > FADE_OVERLAY.r,
            "Head pixel at ({px}, {py}) should be brighter than the overlay"
        );
    }
}
