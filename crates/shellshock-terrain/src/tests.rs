use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shellshock_core::constants::*;
use shellshock_core::enums::TerrainKind;

use crate::generator::{self, generate, generate_raw, random_kind, smooth};
use crate::profile::Terrain;

const ALL_KINDS: [TerrainKind; 4] = [
    TerrainKind::Flat,
    TerrainKind::Hill,
    TerrainKind::Curvy,
    TerrainKind::Valley,
];

fn in_band(h: f64) -> bool {
    (TERRAIN_MIN_HEIGHT..=TERRAIN_MAX_HEIGHT).contains(&h)
}

fn flat(width: usize, level: f64) -> Terrain {
    Terrain::from_heights(TerrainKind::Flat, vec![level; width])
}

// ---- Generation ----

#[test]
fn test_every_kind_fills_width_inside_band() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for kind in ALL_KINDS {
        for width in [1, 2, 3, 10, 800, 1920] {
            let heights = generate(kind, width, &mut rng);
            assert_eq!(heights.len(), width, "{kind:?} width {width}");
            assert!(
                heights.iter().all(|&h| in_band(h)),
                "{kind:?} width {width} left the clamp band"
            );
        }
    }
}

#[test]
fn test_zero_width_is_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for kind in ALL_KINDS {
        assert!(generate(kind, 0, &mut rng).is_empty());
    }
}

#[test]
fn test_same_seed_same_profile() {
    for kind in ALL_KINDS {
        let a = generate(kind, 800, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate(kind, 800, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b, "{kind:?} should be reproducible");
    }
}

#[test]
fn test_flat_stays_near_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let heights = generate(TerrainKind::Flat, 800, &mut rng);
    assert!(heights.iter().all(|&h| (h - 0.8).abs() <= 0.005));
}

#[test]
fn test_hill_rises_above_its_base() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let heights = generate(TerrainKind::Hill, 800, &mut rng);
    let peak = heights.iter().cloned().fold(f64::INFINITY, f64::min);
    // Base is 0.85; the hill is at least 0.15 tall before smoothing.
    assert!(peak < 0.8, "Hill peak should rise well above the base, got {peak}");
    assert!((heights[0] - 0.85).abs() < 0.05 || (heights[799] - 0.85).abs() < 0.05);
}

#[test]
fn test_valley_is_lowest_in_the_middle_and_unsmoothed() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let raw = generate_raw(TerrainKind::Valley, 800, &mut rng);
    let finished = generate(TerrainKind::Valley, 800, &mut rng);
    assert_eq!(generator::smoothing_passes(TerrainKind::Valley), 0);

    // 0.5 at the center, rising 0.3 toward each edge.
    assert!((finished[400] - 0.5).abs() < 1e-9);
    assert!((finished[0] - 0.8).abs() < 1e-9);
    assert!(finished[100] > finished[300]);
    assert!(finished[700] > finished[500]);
    assert_eq!(raw, finished, "Valley raw profile is already inside the band");
}

#[test]
fn test_curvy_has_variation() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let heights = generate(TerrainKind::Curvy, 800, &mut rng);
    let min = heights.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = heights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min > 0.05, "Curvy terrain should roll, spread {}", max - min);
}

#[test]
fn test_smoothing_pass_counts() {
    assert_eq!(generator::smoothing_passes(TerrainKind::Flat), 3);
    assert_eq!(generator::smoothing_passes(TerrainKind::Hill), 5);
    assert_eq!(generator::smoothing_passes(TerrainKind::Curvy), 8);
}

#[test]
fn test_smooth_weights() {
    let mut heights = vec![0.0, 1.0, 0.0, 0.0];
    smooth(&mut heights, 1);
    assert!((heights[0] - 1.0 / 3.0).abs() < 1e-12);
    assert!((heights[1] - 0.5).abs() < 1e-12);
    assert!((heights[2] - 0.25).abs() < 1e-12);
    assert!((heights[3] - 0.0).abs() < 1e-12);
}

#[test]
fn test_smooth_single_column_is_untouched() {
    let mut heights = vec![0.7];
    smooth(&mut heights, 8);
    assert_eq!(heights, vec![0.7]);
}

#[test]
fn test_random_kind_never_picks_valley() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut seen = Vec::new();
    for _ in 0..300 {
        let kind = random_kind(&mut rng);
        assert_ne!(kind, TerrainKind::Valley);
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    assert_eq!(seen.len(), 3, "All three random kinds should appear");
}

// ---- Queries ----

#[test]
fn test_height_at_rounds_to_nearest_column() {
    let terrain = Terrain::from_heights(TerrainKind::Flat, vec![0.6, 0.7, 0.8]);
    assert_eq!(terrain.height_at(0.0), 0.6);
    assert_eq!(terrain.height_at(0.4), 0.6);
    assert_eq!(terrain.height_at(0.6), 0.7);
    assert_eq!(terrain.height_at(2.2), 0.8);
}

#[test]
fn test_height_at_off_map_is_bottom() {
    let terrain = flat(100, 0.8);
    assert_eq!(terrain.height_at(-1.0), OFF_MAP_HEIGHT);
    assert_eq!(terrain.height_at(99.6), OFF_MAP_HEIGHT);
    assert_eq!(terrain.height_at(1e9), OFF_MAP_HEIGHT);
    assert_eq!(terrain.height_at(f64::NAN), OFF_MAP_HEIGHT);
}

#[test]
fn test_is_collision() {
    let terrain = flat(100, 0.8);
    assert!(terrain.is_collision(50.0, 0.8));
    assert!(terrain.is_collision(50.0, 0.95));
    assert!(!terrain.is_collision(50.0, 0.79));
    // Off-map only collides at the very bottom.
    assert!(!terrain.is_collision(-10.0, 0.99));
    assert!(terrain.is_collision(-10.0, 1.0));
}

#[test]
fn test_from_heights_clamps() {
    let terrain = Terrain::from_heights(TerrainKind::Flat, vec![0.1, 0.7, 1.5]);
    assert_eq!(terrain.heights(), &[TERRAIN_MIN_HEIGHT, 0.7, TERRAIN_MAX_HEIGHT]);
    assert_eq!(terrain.width(), 3);
    assert_eq!(terrain.kind(), TerrainKind::Flat);
}

// ---- Destruction ----

#[test]
fn test_destroy_deepens_center_most() {
    let mut terrain = flat(400, 0.8);
    terrain.destroy(200.0, CRATER_RADIUS);

    let center = terrain.height_at(200.0);
    let rim = terrain.height_at(200.0 + CRATER_RADIUS * 0.8);
    assert!(center > 0.85, "Crater center should sink, got {center}");
    assert!(rim > 0.8 && rim < center, "Rim should sink less than center");
    assert!((terrain.height_at(100.0) - 0.8).abs() < 1e-9, "Far ground untouched");
}

#[test]
fn test_destroy_keeps_width() {
    let mut terrain = flat(300, 0.8);
    terrain.destroy(0.0, 40.0);
    terrain.destroy(299.0, 40.0);
    assert_eq!(terrain.width(), 300);
}

#[test]
fn test_destroy_off_map_or_degenerate_is_noop() {
    let mut terrain = flat(100, 0.7);
    let before = terrain.clone();
    terrain.destroy(-200.0, 25.0);
    terrain.destroy(500.0, 25.0);
    terrain.destroy(50.0, 0.0);
    terrain.destroy(50.0, -3.0);
    terrain.destroy(f64::NAN, 25.0);
    assert_eq!(terrain, before);
}

#[test]
fn test_overlapping_craters_stop_at_ceiling() {
    let mut terrain = flat(200, 0.8);
    for _ in 0..50 {
        terrain.destroy(100.0, CRATER_RADIUS);
    }
    assert_eq!(terrain.height_at(100.0), TERRAIN_MAX_HEIGHT);
    assert!(terrain.heights().iter().all(|&h| in_band(h)));
}

proptest! {
    #[test]
    fn prop_generated_profiles_stay_in_band(
        width in 1usize..2000,
        kind_index in 0usize..4,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let heights = generate(ALL_KINDS[kind_index], width, &mut rng);
        prop_assert_eq!(heights.len(), width);
        prop_assert!(heights.iter().all(|&h| in_band(h)));
    }

    #[test]
    fn prop_craters_never_leave_band(
        seed in any::<u64>(),
        craters in prop::collection::vec((-50.0f64..850.0, 0.5f64..120.0), 1..40),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut terrain = Terrain::generate(random_kind(&mut rng), 800, &mut rng);
        for (x, radius) in craters {
            terrain.destroy(x, radius);
            prop_assert_eq!(terrain.width(), 800);
            prop_assert!(terrain.heights().iter().all(|&h| in_band(h)));
        }
    }
}
