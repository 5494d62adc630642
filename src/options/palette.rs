use serde::{Deserialize, Serialize};

/// One weighted color in a palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PaletteEntry {
    /// RGB color, components in [0, 1].
    pub color: [f32; 3],
    /// Relative sampling weight (non-negative; zero excludes the entry).
    pub weight: f32,
}

impl PaletteEntry {
    /// Build an entry from color and weight.
    #[must_use]
    pub fn new(color: [f32; 3], weight: f32) -> Self {
        Self { color, weight }
    }
}

/// Weighted color palettes for the two formations.
///
/// Colors are re-sampled from these tables on every transition, never cached
/// per particle, so each formation change re-dresses the swarm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteOptions {
    /// Palette for the floating cloud: gold and pink with a white sparkle.
    pub floating: Vec<PaletteEntry>,
    /// Narrower pink-dominant palette for the tree.
    pub tree: Vec<PaletteEntry>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            floating: vec![
                PaletteEntry::new([1.0, 0.8, 0.2], 0.45), // gold
                PaletteEntry::new([1.0, 0.4, 0.7], 0.45), // pink
                PaletteEntry::new([1.0, 1.0, 1.0], 0.10), // white
            ],
            tree: vec![
                PaletteEntry::new([1.0, 0.4, 0.7], 0.55),   // pink
                PaletteEntry::new([1.0, 0.55, 0.75], 0.30), // rose
                PaletteEntry::new([1.0, 1.0, 1.0], 0.15),   // white
            ],
        }
    }
}
