//! Terrain: the destructible ground height profile.

use rand::Rng;

use shellshock_core::constants::{CRATER_DEPTH, CRATER_SMOOTHING_PASSES, OFF_MAP_HEIGHT};
use shellshock_core::enums::TerrainKind;

use crate::generator;

/// Ground surface, one normalized height per pixel column.
///
/// The number of columns is fixed at construction, and every stored value
/// stays within the generator's clamp band.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    kind: TerrainKind,
    heights: Vec<f64>,
}

impl Terrain {
    /// Generate a fresh profile with the given strategy.
    pub fn generate<R: Rng + ?Sized>(kind: TerrainKind, width: usize, rng: &mut R) -> Self {
        Self {
            kind,
            heights: generator::generate(kind, width, rng),
        }
    }

    /// Build a terrain from an existing profile. Values are clamped into
    /// the playable band.
    pub fn from_heights(kind: TerrainKind, mut heights: Vec<f64>) -> Self {
        generator::clamp_heights(&mut heights);
        Self { kind, heights }
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    /// Horizontal extent in pixels.
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Ground height at the nearest column, or `OFF_MAP_HEIGHT` outside
    /// the profile.
    pub fn height_at(&self, x: f64) -> f64 {
        self.column(x)
            .map(|i| self.heights[i])
            .unwrap_or(OFF_MAP_HEIGHT)
    }

    /// True if a point at normalized height `y` is at or below the ground.
    pub fn is_collision(&self, x: f64, y: f64) -> bool {
        y >= self.height_at(x)
    }

    /// Carve a crater centered on `x`, then blend its rim into the
    /// surrounding ground.
    pub fn destroy(&mut self, x: f64, radius: f64) {
        if !x.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }

        let center = x.round();
        let reach = radius.ceil();
        let start = (center - reach).max(0.0) as usize;
        let end = (center + reach).min(self.width() as f64 - 1.0);
        if end < 0.0 || start as f64 > end {
            return;
        }

        for i in start..=end as usize {
            let distance = (i as f64 - center).abs();
            if distance <= radius {
                let depth = (1.0 - distance / radius) * CRATER_DEPTH;
                self.heights[i] = (self.heights[i] + depth).min(OFF_MAP_HEIGHT);
            }
        }

        generator::smooth(&mut self.heights, CRATER_SMOOTHING_PASSES);
        generator::clamp_heights(&mut self.heights);
    }

    fn column(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let index = x.round();
        if index < 0.0 || index >= self.width() as f64 {
            return None;
        }
        Some(index as usize)
    }
}
