//! Drives a particle field against a canvas until stopped.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use stardust_config::{Config, OutputConfig};
use stardust_field::{FieldConfig, ParticleField};
use stardust_render::{Canvas, painter};
use tracing::{debug, info};

use crate::error::AppError;
use crate::frame_loop::{FIXED_DT, FrameLoop};
use crate::snapshot;

/// Cloneable stop handle for a running field.
///
/// The runner checks the flag between frames, so stopping takes effect within
/// one frame. This replaces the original design's unbounded loop that only
/// ended with the hosting page.
#[derive(Clone, Debug)]
pub struct RunHandle {
    stop: Arc<AtomicBool>,
}

impl RunHandle {
    fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request the runner to stop after the current frame.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Owns the field, the canvas, and the frame loop, and runs them together.
pub struct FieldRunner {
    field: ParticleField,
    canvas: Canvas,
    frame_loop: FrameLoop,
    output: OutputConfig,
    handle: RunHandle,
}

impl FieldRunner {
    /// Build a runner from configuration and a resolved RNG seed.
    ///
    /// Returns `None` when the configured surface has zero area: the
    /// decorative background simply does not run in that case (fail-open, no
    /// error).
    pub fn new(config: &Config, seed: u64) -> Option<Self> {
        let canvas = Canvas::new(config.surface.width, config.surface.height)?;
        let field_config = FieldConfig {
            star_count: config.field.star_count,
            nebula_count: config.field.nebula_count,
            max_star_size: config.field.max_star_size,
            spawn_interval_ms: config.field.spawn_interval_ms,
            spawn_chance: config.field.spawn_chance,
        };
        let field = ParticleField::new(
            field_config,
            seed,
            config.surface.width as f32,
            config.surface.height as f32,
        );
        Some(Self {
            field,
            canvas,
            frame_loop: FrameLoop::new(),
            output: config.output.clone(),
            handle: RunHandle::new(),
        })
    }

    /// A stop handle for this runner. Clones share the same flag.
    pub fn handle(&self) -> RunHandle {
        self.handle.clone()
    }

    /// Forward a pointer position to the field, in surface pixels.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.field.pointer_moved(x, y);
    }

    /// Resize the surface and regenerate the field populations.
    ///
    /// A zero-area size is ignored; the previous surface stays in place.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(canvas) = Canvas::new(width, height) else {
            debug!(width, height, "ignoring resize to zero-area surface");
            return;
        };
        self.canvas = canvas;
        self.field.resize(width as f32, height as f32);
    }

    /// Run one frame: advance simulation by the elapsed wall-clock time,
    /// paint, and write a snapshot if this frame is due for one.
    pub fn render_frame(&mut self) -> Result<(), AppError> {
        let Self {
            field, frame_loop, ..
        } = self;
        frame_loop.tick(|dt| field.advance(dt * 1000.0));
        painter::paint(&self.field, &mut self.canvas);

        if self.output.snapshot_every > 0
            && self.frame_loop.frame_count() % self.output.snapshot_every == 0
        {
            let path = self.snapshot_path(self.frame_loop.frame_count());
            snapshot::write_png(&self.canvas, &path)?;
            debug!(path = %path.display(), "wrote frame snapshot");
        }
        Ok(())
    }

    /// Run until the frame budget is spent or the stop handle fires, pacing
    /// frames at the fixed timestep.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            stars = self.field.stars().len(),
            nebulae = self.field.nebulae().len(),
            "particle field running"
        );
        while !self.handle.is_stopped() {
            if self.output.frames > 0 && self.frame_loop.frame_count() >= self.output.frames {
                break;
            }
            self.render_frame()?;
            std::thread::sleep(Duration::from_secs_f64(FIXED_DT));
        }
        info!(
            frames = self.frame_loop.frame_count(),
            spawned = self.field.spawn_count(),
            "particle field stopped"
        );
        Ok(())
    }

    /// The field being driven.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The canvas frames are painted onto.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn snapshot_path(&self, frame: u64) -> PathBuf {
        self.output.frame_dir.join(format!("frame_{frame:05}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.surface.width = 120;
        config.surface.height = 90;
        config.output.frame_dir = dir.join("frames");
        config.output.frames = 5;
        config.output.snapshot_every = 0;
        config
    }

    #[test]
    fn test_zero_area_surface_yields_no_runner() {
        let mut config = Config::default();
        config.surface.width = 0;
        assert!(FieldRunner::new(&config, 42).is_none());
    }

    #[test]
    fn test_runner_builds_field_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.field.star_count = 25;
        config.field.nebula_count = 2;
        let runner = FieldRunner::new(&config, 42).unwrap();
        assert_eq!(runner.field().stars().len(), 25);
        assert_eq!(runner.field().nebulae().len(), 2);
        assert_eq!(runner.canvas().width(), 120);
    }

    #[test]
    fn test_run_honors_frame_budget() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        runner.run().unwrap();
        assert_eq!(runner.frame_loop.frame_count(), 5);
    }

    #[test]
    fn test_stop_handle_ends_an_unbounded_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.output.frames = 0; // unbounded
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        let handle = runner.handle();

        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            handle.stop();
        });
        runner.run().unwrap();
        stopper.join().unwrap();
        assert!(runner.handle().is_stopped());
        assert!(runner.frame_loop.frame_count() > 0);
    }

    #[test]
    fn test_snapshots_land_in_frame_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.output.snapshot_every = 2;
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        runner.run().unwrap();
        let written = std::fs::read_dir(dir.path().join("frames")).unwrap().count();
        // Frames 2 and 4 out of the 5-frame budget.
        assert_eq!(written, 2);
    }

    #[test]
    fn test_resize_rebuilds_canvas_and_field() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        runner.resize(64, 48);
        assert_eq!(runner.canvas().width(), 64);
        assert_eq!(runner.field().width(), 64.0);
        assert_eq!(runner.field().stars().len(), config.field.star_count);
    }

    #[test]
    fn test_resize_to_zero_area_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        runner.resize(0, 48);
        assert_eq!(runner.canvas().width(), 120);
        assert_eq!(runner.field().width(), 120.0);
    }

    #[test]
    fn test_pointer_forwarded_to_field() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut runner = FieldRunner::new(&config, 42).unwrap();
        runner.pointer_moved(30.0, 40.0);
        assert_eq!(runner.field().pointer().x, 30.0);
        assert_eq!(runner.field().pointer().y, 40.0);
    }
}
