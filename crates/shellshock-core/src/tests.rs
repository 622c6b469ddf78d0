use glam::DVec2;

use crate::commands::Action;
use crate::enums::*;
use crate::events::BattleEvent;
use crate::state::{BattlefieldSnapshot, TankView};
use crate::types::{Bounds, Side};

#[test]
fn test_side_opponent_and_index() {
    assert_eq!(Side::A.opponent(), Side::B);
    assert_eq!(Side::B.opponent(), Side::A);
    assert_eq!(Side::A.index(), 0);
    assert_eq!(Side::B.index(), 1);
    for side in Side::BOTH {
        assert_eq!(side.opponent().opponent(), side);
    }
}

#[test]
fn test_bounds_contains_is_inclusive() {
    let b = Bounds::new(90.0, 110.0, 0.77, 0.8);
    assert!(b.contains(DVec2::new(90.0, 0.77)));
    assert!(b.contains(DVec2::new(110.0, 0.8)));
    assert!(b.contains(DVec2::new(100.0, 0.79)));
    assert!(!b.contains(DVec2::new(110.01, 0.79)));
    assert!(!b.contains(DVec2::new(100.0, 0.81)));
    assert!(!b.contains(DVec2::new(100.0, 0.76)));
}

#[test]
fn test_bounds_centered() {
    let b = Bounds::centered(DVec2::new(400.0, 0.3), 15.0, 0.03);
    assert_eq!(b.min_x, 385.0);
    assert_eq!(b.max_x, 415.0);
    assert!((b.min_y - 0.27).abs() < 1e-12);
    assert!((b.max_y - 0.33).abs() < 1e-12);
}

#[test]
fn test_outcome_winner() {
    assert_eq!(Outcome::Ongoing.winner(), None);
    assert_eq!(Outcome::Won(Side::B).winner(), Some(Side::B));
    assert_eq!(Outcome::default(), Outcome::Ongoing);
}

#[test]
fn test_defaults() {
    assert_eq!(Phase::default(), Phase::Setup);
    assert_eq!(Difficulty::default(), Difficulty::Medium);
    assert_eq!(Side::default(), Side::A);
}

#[test]
fn test_random_pool_excludes_valley() {
    assert!(!TerrainKind::RANDOM_POOL.contains(&TerrainKind::Valley));
    assert_eq!(TerrainKind::RANDOM_POOL.len(), 3);
}

#[test]
fn test_action_json_shape() {
    let action = Action::new(Side::B, ActionKind::IncreasePower);
    let json = serde_json::to_value(action).unwrap();
    assert_eq!(json["side"], "B");
    assert_eq!(json["kind"], "IncreasePower");

    let back: Action = serde_json::from_value(json).unwrap();
    assert_eq!(back, action);
    assert_eq!(Action::fire(Side::A).kind, ActionKind::Fire);
    assert_eq!(Action::start(Side::B).kind, ActionKind::StartOrRestart);
}

#[test]
fn test_battle_event_is_tagged() {
    let event = BattleEvent::TankHit {
        side: Side::A,
        damage: 50,
        health: 50,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "TankHit");
    assert_eq!(json["health"], 50);
}

#[test]
fn test_snapshot_serializes_with_positions_as_arrays() {
    let snapshot = BattlefieldSnapshot {
        phase: Phase::Turn,
        tanks: vec![
            TankView {
                side: Side::A,
                x: 100.0,
                y: 0.8,
                ..Default::default()
            },
            TankView {
                side: Side::B,
                x: 700.0,
                y: 0.8,
                ..Default::default()
            },
        ],
        trajectories: vec![vec![DVec2::new(1.0, 0.5)], Vec::new()],
        ..Default::default()
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("[1.0,0.5]"), "DVec2 should serialize as array: {json}");

    let back: BattlefieldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
    assert_eq!(back.tank(Side::B).map(|t| t.x), Some(700.0));
}
