//! Pure formation samplers.
//!
//! Each function maps a particle index (and an injected random source) to a
//! target position or color for one of the two formations. Nothing here is
//! memoized: the floating formation is "wherever is visually interesting
//! now", and colors are re-dressed on every transition.

use glam::Vec3;
use rand::Rng;

use crate::options::{FormationOptions, PaletteEntry, PaletteOptions};

/// Angular spacing of ~137.5° per index. Spreads points evenly around a
/// circle without radial banding artifacts.
pub const GOLDEN_ANGLE_DEGREES: f32 = 137.5;

/// A target spatial/color arrangement for the whole particle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formation {
    /// Unconstrained random cloud within the bounding box.
    #[default]
    Floating,
    /// Layered conical arrangement narrowing toward the top.
    Tree,
}

impl Formation {
    /// The other formation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Floating => Self::Tree,
            Self::Tree => Self::Floating,
        }
    }

    /// The weighted palette this formation draws colors from.
    #[must_use]
    pub fn palette(self, palette: &PaletteOptions) -> &[PaletteEntry] {
        match self {
            Self::Floating => &palette.floating,
            Self::Tree => &palette.tree,
        }
    }
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floating => f.write_str("floating"),
            Self::Tree => f.write_str("tree"),
        }
    }
}

/// A fresh independent uniform-random point inside the box given by
/// half-extents `bounds`. Deliberately non-idempotent: every call is a new
/// draw.
pub fn floating_target(bounds: [f32; 3], rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-bounds[0]..=bounds[0]),
        rng.random_range(-bounds[1]..=bounds[1]),
        rng.random_range(-bounds[2]..=bounds[2]),
    )
}

/// Tree-cone target for particle `index` of `count`.
///
/// Indices partition into `layer_count` contiguous bands; each band sits at
/// height `layer * layer_spacing` with radius
/// `(layer_count - layer) * radius_step`, so the cone narrows toward the
/// top. Angular placement uses the golden angle, and a bounded jitter
/// factor scales radius and height so the lattice never looks rigid.
/// Results stay within [`FormationOptions::max_tree_radius`] and
/// [`FormationOptions::max_tree_height`].
pub fn tree_target(
    index: usize,
    count: usize,
    opts: &FormationOptions,
    rng: &mut impl Rng,
) -> Vec3 {
    let layers = opts.layer_count.max(1);
    let band = (count / layers).max(1);
    let layer = (index / band).min(layers - 1);

    let radius =
        (layers - layer) as f32 * opts.radius_step * jitter_factor(opts, rng);
    let height =
        layer as f32 * opts.layer_spacing * jitter_factor(opts, rng);
    let angle = index as f32 * GOLDEN_ANGLE_DEGREES.to_radians();

    Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
}

/// Weighted sample from a palette. Zero-weight entries are never drawn;
/// an empty or all-zero palette falls back to white.
pub fn palette_color(entries: &[PaletteEntry], rng: &mut impl Rng) -> Vec3 {
    let total: f32 = entries.iter().map(|e| e.weight.max(0.0)).sum();
    if total <= 0.0 {
        return Vec3::ONE;
    }

    let mut pick = rng.random_range(0.0..total);
    for entry in entries {
        let weight = entry.weight.max(0.0);
        if pick < weight {
            return Vec3::from_array(entry.color);
        }
        pick -= weight;
    }
    // Float accumulation can leave pick a hair past the last band.
    entries
        .last()
        .map_or(Vec3::ONE, |e| Vec3::from_array(e.color))
}

/// Bounded random scale in `[1 - jitter, 1 + jitter]`.
fn jitter_factor(opts: &FormationOptions, rng: &mut impl Rng) -> f32 {
    if opts.jitter <= 0.0 {
        return 1.0;
    }
    rng.random_range(1.0 - opts.jitter..=1.0 + opts.jitter)
}
