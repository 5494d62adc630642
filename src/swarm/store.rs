//! Owned per-particle arrays.
//!
//! The store is the single source of truth for particle state: every other
//! component reads and writes these arrays in place, and nothing retains a
//! private copy.

use glam::Vec3;
use rand::Rng;

use crate::options::{PaletteOptions, SwarmOptions};
use crate::swarm::formation;

/// A read-only snapshot of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// RGB color, components in [0, 1].
    pub color: Vec3,
    /// Point size (> 0).
    pub size: f32,
}

/// Flat per-particle position/color/size arrays.
///
/// Indexing past `len()` is a programming error and panics; gestures and
/// frame ticks never produce out-of-range indices.
pub struct ParticleStore {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    sizes: Vec<f32>,
}

impl ParticleStore {
    /// Create a store with every particle at a uniform-random position
    /// inside the configured bounding box, colored from the floating
    /// palette, at the base size.
    pub fn new(
        swarm: &SwarmOptions,
        palette: &PaletteOptions,
        rng: &mut impl Rng,
    ) -> Self {
        let count = swarm.particle_count;
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(formation::floating_target(swarm.bounds, rng));
            colors.push(formation::palette_color(&palette.floating, rng));
        }

        Self {
            positions,
            colors,
            sizes: vec![swarm.base_size; count],
        }
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the store holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Snapshot of particle `i`. Panics if `i >= len()`.
    #[must_use]
    pub fn get(&self, i: usize) -> Particle {
        assert!(i < self.len(), "particle index {i} out of range");
        Particle {
            position: self.positions[i],
            color: self.colors[i],
            size: self.sizes[i],
        }
    }

    /// Overwrite particle `i`. Panics if `i >= len()`.
    pub fn set(&mut self, i: usize, position: Vec3, color: Vec3, size: f32) {
        assert!(i < self.len(), "particle index {i} out of range");
        self.positions[i] = position;
        self.colors[i] = color;
        self.sizes[i] = size;
    }

    /// Position of particle `i`.
    #[must_use]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    /// Overwrite the position of particle `i`.
    pub fn set_position(&mut self, i: usize, position: Vec3) {
        self.positions[i] = position;
    }

    /// Color of particle `i`.
    #[must_use]
    pub fn color(&self, i: usize) -> Vec3 {
        self.colors[i]
    }

    /// Overwrite the color of particle `i`.
    pub fn set_color(&mut self, i: usize, color: Vec3) {
        self.colors[i] = color;
    }

    /// Size of particle `i`.
    #[must_use]
    pub fn size(&self, i: usize) -> f32 {
        self.sizes[i]
    }

    /// Set every particle to the same size (pinch size-adjust pass).
    pub fn set_uniform_size(&mut self, size: f32) {
        self.sizes.fill(size);
    }

    /// All positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// All colors.
    #[must_use]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// All sizes.
    #[must_use]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Positions as a flat `x y z` float slice for the renderer boundary.
    #[must_use]
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as a flat `r g b` float slice for the renderer boundary.
    #[must_use]
    pub fn colors_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}

impl std::fmt::Debug for ParticleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::options::Options;

    fn small_store(count: usize, seed: u64) -> ParticleStore {
        let opts = Options {
            swarm: SwarmOptions {
                particle_count: count,
                ..SwarmOptions::default()
            },
            ..Options::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleStore::new(&opts.swarm, &opts.palette, &mut rng)
    }

    #[test]
    fn create_fills_every_particle_inside_bounds() {
        let store = small_store(200, 1);
        let bounds = SwarmOptions::default().bounds;
        assert_eq!(store.len(), 200);
        for i in 0..store.len() {
            let p = store.get(i);
            assert!(p.position.x.abs() <= bounds[0]);
            assert!(p.position.y.abs() <= bounds[1]);
            assert!(p.position.z.abs() <= bounds[2]);
            assert!(p.size > 0.0);
            assert!(p.color.min_element() >= 0.0);
            assert!(p.color.max_element() <= 1.0);
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut store = small_store(4, 2);
        store.set(2, Vec3::splat(3.0), Vec3::X, 0.25);
        let p = store.get(2);
        assert_eq!(p.position, Vec3::splat(3.0));
        assert_eq!(p.color, Vec3::X);
        assert_eq!(p.size, 0.25);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_fails_fast() {
        let store = small_store(4, 3);
        let _ = store.get(4);
    }

    #[test]
    fn flat_views_interleave_components() {
        let mut store = small_store(2, 4);
        store.set_position(0, Vec3::new(1.0, 2.0, 3.0));
        let flat = store.positions_f32();
        assert_eq!(flat.len(), 6);
        assert_eq!(&flat[0..3], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn uniform_size_touches_every_particle() {
        let mut store = small_store(16, 5);
        store.set_uniform_size(0.15);
        assert!(store.sizes().iter().all(|&s| s == 0.15));
    }
}
