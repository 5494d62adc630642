//! Time-driven orbital camera.
//!
//! The eye circles the look-at target slowly as a pure function of elapsed
//! time. There is no input state to track, and any frame can be reproduced
//! from its timestamp alone.

use glam::Vec3;

use super::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Perspective camera whose eye orbits a fixed target.
pub struct OrbitCamera {
    camera: Camera,
    uniform: CameraUniform,
    orbit_radius: f32,
    orbit_height: f32,
    orbit_speed: f32,
}

impl OrbitCamera {
    /// Build from camera options at the given viewport aspect ratio.
    #[must_use]
    pub fn new(opts: &CameraOptions, aspect: f32) -> Self {
        let target = Vec3::from_array(opts.target);
        let camera = Camera {
            eye: target + Vec3::new(0.0, opts.orbit_height, opts.orbit_radius),
            target,
            up: Vec3::Y,
            aspect,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            camera,
            uniform,
            orbit_radius: opts.orbit_radius,
            orbit_height: opts.orbit_height,
            orbit_speed: opts.orbit_speed,
        }
    }

    /// Move the eye to its orbit position for `elapsed` seconds and refresh
    /// the uniform.
    pub fn advance(&mut self, elapsed: f32) {
        let angle = elapsed * self.orbit_speed;
        self.camera.eye = self.camera.target
            + Vec3::new(
                angle.sin() * self.orbit_radius,
                self.orbit_height,
                angle.cos() * self.orbit_radius,
            );
        self.uniform.update_view_proj(&self.camera);
    }

    /// Recompute the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.uniform.update_view_proj(&self.camera);
    }

    /// The current renderer uniform.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        self.uniform
    }

    /// The underlying camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
