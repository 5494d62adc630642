//! Renderer boundary.
//!
//! The engine never draws; it hands the committed particle arrays and the
//! camera uniform across this seam once per frame. A real backend would
//! upload the flat slices to GPU buffers; the crate ships a log-based sink
//! for headless runs and diagnostics.

use std::fmt;

use glam::Vec3;

use crate::camera::CameraUniform;

/// One frame's worth of draw data, borrowed from the particle store.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Particle positions.
    pub positions: &'a [Vec3],
    /// Particle colors (RGB in [0, 1]).
    pub colors: &'a [Vec3],
    /// Particle point sizes.
    pub sizes: &'a [f32],
    /// Camera state for this frame.
    pub camera: CameraUniform,
}

/// Errors crossing the renderer boundary.
#[derive(Debug)]
pub enum RenderError {
    /// The rendering context could not be created or was lost.
    ContextUnavailable(String),
    /// A draw submission failed.
    Draw(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContextUnavailable(msg) => {
                write!(f, "render context unavailable: {msg}")
            }
            Self::Draw(msg) => write!(f, "draw failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Consumes the particle arrays once per frame and issues a draw call.
pub trait SwarmRenderer {
    /// Recompute viewport-dependent state after a resize.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameData<'_>) -> Result<(), RenderError>;
}

/// Headless renderer that logs a swarm summary at a fixed frame cadence.
pub struct LogRenderer {
    every: u64,
    frame_count: u64,
}

impl LogRenderer {
    /// Log a summary every `every` frames (minimum 1).
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frame_count: 0,
        }
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frame_count
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl SwarmRenderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
    }

    fn render(&mut self, frame: &FrameData<'_>) -> Result<(), RenderError> {
        self.frame_count += 1;
        if self.frame_count % self.every != 0 {
            return Ok(());
        }

        let count = frame.positions.len();
        if count == 0 {
            log::info!("frame {}: empty swarm", self.frame_count);
            return Ok(());
        }

        let sum: Vec3 = frame.positions.iter().copied().sum();
        let centroid = sum / count as f32;
        let spread = frame
            .positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);
        log::info!(
            "frame {}: {count} particles, centroid ({:.2}, {:.2}, {:.2}), spread {spread:.2}",
            self.frame_count,
            centroid.x,
            centroid.y,
            centroid.z,
        );
        Ok(())
    }
}
