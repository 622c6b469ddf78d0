//! Procedural height-profile generation.
//!
//! Every strategy only synthesizes a raw profile; the shared pipeline in
//! [`generate`] smooths it a strategy-specific number of times and clamps it
//! into the playable band.

use rand::Rng;

use shellshock_core::constants::{TERRAIN_MAX_HEIGHT, TERRAIN_MIN_HEIGHT};
use shellshock_core::enums::TerrainKind;

/// Ground level of the flat strategy.
const FLAT_LEVEL: f64 = 0.8;
/// Peak-to-peak jitter of the flat strategy.
const FLAT_JITTER: f64 = 0.01;

/// Ground level around the hill.
const HILL_BASE: f64 = 0.85;

/// Mean level the sine layers oscillate around.
const CURVY_LEVEL: f64 = 0.75;
const CURVY_FREQUENCY: f64 = 0.008;
const CURVY_AMPLITUDE: f64 = 0.12;

/// Height of the valley floor at the center.
const VALLEY_FLOOR: f64 = 0.5;
/// Height gained per unit of normalized distance from the center.
const VALLEY_SLOPE: f64 = 0.6;

/// Number of smoothing passes the pipeline applies for a strategy.
pub fn smoothing_passes(kind: TerrainKind) -> usize {
    match kind {
        TerrainKind::Flat => 3,
        TerrainKind::Hill => 5,
        TerrainKind::Curvy => 8,
        // Piecewise-linear already.
        TerrainKind::Valley => 0,
    }
}

/// Pick a strategy for a new battle. Valley is never chosen here.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> TerrainKind {
    let pool = TerrainKind::RANDOM_POOL;
    pool[rng.gen_range(0..pool.len())]
}

/// Generate a finished profile: raw synthesis, smoothing, clamping.
pub fn generate<R: Rng + ?Sized>(kind: TerrainKind, width: usize, rng: &mut R) -> Vec<f64> {
    let mut heights = generate_raw(kind, width, rng);
    smooth(&mut heights, smoothing_passes(kind));
    clamp_heights(&mut heights);
    heights
}

/// Synthesize the unsmoothed, unclamped profile for a strategy.
pub fn generate_raw<R: Rng + ?Sized>(kind: TerrainKind, width: usize, rng: &mut R) -> Vec<f64> {
    match kind {
        TerrainKind::Flat => raw_flat(width, rng),
        TerrainKind::Hill => raw_hill(width, rng),
        TerrainKind::Curvy => raw_curvy(width, rng),
        TerrainKind::Valley => raw_valley(width),
    }
}

fn raw_flat<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Vec<f64> {
    (0..width)
        .map(|_| FLAT_LEVEL + (rng.gen::<f64>() - 0.5) * FLAT_JITTER)
        .collect()
}

fn raw_hill<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Vec<f64> {
    let center = 0.3 + rng.gen::<f64>() * 0.4;
    let height = 0.15 + rng.gen::<f64>() * 0.15;
    let half_width = 0.2 + rng.gen::<f64>() * 0.3;
    let left_slope = 0.5 + rng.gen::<f64>() * 1.5;
    let right_slope = 0.5 + rng.gen::<f64>() * 1.5;

    (0..width)
        .map(|i| {
            let x = i as f64 / width as f64;
            let dist = (x - center).abs();
            if dist < half_width {
                let slope = if x < center { left_slope } else { right_slope };
                let factor = (1.0 - dist / half_width).powf(slope);
                HILL_BASE - height * factor
            } else {
                HILL_BASE
            }
        })
        .collect()
}

fn raw_curvy<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Vec<f64> {
    let phase1 = rng.gen::<f64>() * 10.0;
    let phase2 = rng.gen::<f64>() * 10.0;

    (0..width)
        .map(|i| {
            let i = i as f64;
            let primary = (i * CURVY_FREQUENCY * 2.0 + phase1).sin() * CURVY_AMPLITUDE;
            let ripple = (i * CURVY_FREQUENCY * 4.0 + phase2).sin() * CURVY_AMPLITUDE * 0.4;
            CURVY_LEVEL + primary + ripple
        })
        .collect()
}

fn raw_valley(width: usize) -> Vec<f64> {
    (0..width)
        .map(|i| {
            let x = i as f64 / width as f64;
            VALLEY_FLOOR + (x - 0.5).abs() * VALLEY_SLOPE
        })
        .collect()
}

/// Weighted 3-point moving average, `passes` times.
///
/// Interior columns use `(l + 2c + r) / 4`; the two edge columns use
/// `(2c + n) / 3` with their single neighbor.
pub fn smooth(heights: &mut [f64], passes: usize) {
    let n = heights.len();
    if n < 2 {
        return;
    }

    let mut scratch = vec![0.0; n];
    for _ in 0..passes {
        scratch[0] = (heights[0] * 2.0 + heights[1]) / 3.0;
        scratch[n - 1] = (heights[n - 2] + heights[n - 1] * 2.0) / 3.0;
        for i in 1..n - 1 {
            scratch[i] = (heights[i - 1] + heights[i] * 2.0 + heights[i + 1]) / 4.0;
        }
        heights.copy_from_slice(&scratch);
    }
}

/// Clamp every value into [TERRAIN_MIN_HEIGHT, TERRAIN_MAX_HEIGHT].
pub fn clamp_heights(heights: &mut [f64]) {
    for h in heights.iter_mut() {
        *h = h.clamp(TERRAIN_MIN_HEIGHT, TERRAIN_MAX_HEIGHT);
    }
}
