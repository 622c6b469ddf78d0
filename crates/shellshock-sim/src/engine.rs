//! Turn engine: the core of the duel.
//!
//! `CombatRules` owns the battlefield, validates actions against the current
//! phase, runs the flight systems each tick and produces
//! `BattlefieldSnapshot`s. Completely headless, enabling deterministic testing.

use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use shellshock_ai::TargetingContext;
use shellshock_core::commands::Action;
use shellshock_core::constants::*;
use shellshock_core::enums::{ActionKind, Outcome, Phase, TerrainKind};
use shellshock_core::events::BattleEvent;
use shellshock_core::state::BattlefieldSnapshot;
use shellshock_core::types::Side;
use shellshock_terrain::Terrain;

use crate::battlefield::{self, Battlefield};
use crate::entities::{HealthPack, Projectile, Tank};
use crate::systems;

/// Configuration for starting a new battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// RNG seed for determinism. Same seed and actions = same battle.
    pub seed: u64,
    /// Field width in pixel columns.
    pub width: usize,
    pub gravity: f64,
    /// Fixed terrain shape; `None` picks one at random on every reset.
    pub terrain: Option<TerrainKind>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_FIELD_WIDTH,
            gravity: DEFAULT_GRAVITY,
            terrain: None,
        }
    }
}

/// The turn engine. Owns the battlefield and all match state.
///
/// Events accumulate between calls to `take_events()`. Hosts that never
/// drain them lose the oldest once `MAX_PENDING_EVENTS` are pending.
pub struct CombatRules {
    config: BattleConfig,
    rng: ChaCha8Rng,
    phase: Phase,
    pending_turn_switch: bool,
    battlefield: Battlefield,
    events: Vec<BattleEvent>,
}

impl CombatRules {
    /// Create a new engine in `Setup` with a freshly generated battlefield.
    pub fn new(config: BattleConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let battlefield = battlefield::setup_battle(config.terrain, config.width, &mut rng);
        Self::assemble(config, rng, battlefield)
    }

    /// Create an engine in `Setup` around a prepared battlefield.
    pub fn from_battlefield(config: BattleConfig, battlefield: Battlefield) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config, rng, battlefield)
    }

    fn assemble(config: BattleConfig, rng: ChaCha8Rng, battlefield: Battlefield) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Setup,
            pending_turn_switch: false,
            battlefield,
            events: Vec::new(),
        }
    }

    /// Discard the current match and build a new battlefield. Back to `Setup`.
    pub fn reset(&mut self) {
        self.battlefield =
            battlefield::setup_battle(self.config.terrain, self.config.width, &mut self.rng);
        self.phase = Phase::Setup;
        self.pending_turn_switch = false;
        info!(
            "Battle reset on {} terrain",
            self.battlefield.terrain.kind().as_str()
        );
    }

    /// Apply one player or AI action. Actions that are not valid in the
    /// current phase, or that come from the side not on turn, are ignored.
    pub fn apply_action(&mut self, action: Action) {
        match (self.phase, action.kind) {
            (Phase::Setup, ActionKind::StartOrRestart) => self.start(),
            (Phase::GameOver, ActionKind::StartOrRestart) => self.reset(),
            (Phase::Turn, kind) if kind != ActionKind::StartOrRestart => {
                if action.side != self.battlefield.active_side {
                    trace!("Ignoring {kind:?} from {:?}: not on turn", action.side);
                    return;
                }
                self.handle_turn_action(action.side, kind);
            }
            (phase, kind) => {
                trace!("Ignoring {kind:?} from {:?} during {phase:?}", action.side);
            }
        }
        self.trim_events();
    }

    /// Advance the shell in flight by `dt` seconds and resolve any impact.
    /// Does nothing outside `InFlight`.
    pub fn tick(&mut self, dt: f64) {
        if self.phase != Phase::InFlight || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        systems::ballistics::run(&mut self.battlefield, self.config.gravity, dt);

        let Some(projectile) = self.battlefield.projectile.as_ref() else {
            self.end_flight();
            self.trim_events();
            return;
        };
        let owner = projectile.owner();
        if let Some(impact) = systems::collision::detect(&self.battlefield, projectile) {
            systems::collision::apply(&mut self.battlefield, impact, owner, &mut self.events);
            self.end_flight();
        }
        self.trim_events();
    }

    /// Winner once a tank is destroyed. Side A is checked first, so two dead
    /// tanks still yield a single winner.
    pub fn check_winner(&self) -> Outcome {
        if !self.battlefield.tank(Side::A).is_alive() {
            Outcome::Won(Side::B)
        } else if !self.battlefield.tank(Side::B).is_alive() {
            Outcome::Won(Side::A)
        } else {
            Outcome::Ongoing
        }
    }

    /// Build a serializable view of the whole battlefield.
    pub fn snapshot(&self) -> BattlefieldSnapshot {
        systems::snapshot::build_snapshot(&self.battlefield, self.phase, self.check_winner())
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Aiming inputs for `side`, available only while it is that side's turn.
    pub fn targeting_context(&self, side: Side) -> Option<TargetingContext> {
        if self.phase != Phase::Turn || self.battlefield.active_side != side {
            return None;
        }
        let own = self.battlefield.tank(side);
        let target = self.battlefield.tank(side.opponent());
        Some(TargetingContext {
            own_x: own.x(),
            own_y: own.y(),
            own_angle: own.angle(),
            own_power: own.power(),
            target_x: target.x(),
            target_y: target.y(),
            field_width: self.battlefield.width(),
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    pub fn terrain(&self) -> &Terrain {
        &self.battlefield.terrain
    }

    pub fn tank(&self, side: Side) -> &Tank {
        self.battlefield.tank(side)
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.battlefield.projectile.as_ref()
    }

    pub fn pickup(&self) -> Option<&HealthPack> {
        self.battlefield.pickup.as_ref()
    }

    pub fn wind(&self) -> f64 {
        self.battlefield.wind
    }

    pub fn active_side(&self) -> Side {
        self.battlefield.active_side
    }

    pub fn movement_budget(&self) -> u32 {
        self.battlefield.movement_budget
    }

    pub fn trajectory(&self, side: Side) -> &[glam::DVec2] {
        self.battlefield.trajectory(side)
    }

    pub fn pending_turn_switch(&self) -> bool {
        self.pending_turn_switch
    }

    /// Mutable battlefield access (for tests that stage a position).
    #[cfg(test)]
    pub fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    fn trim_events(&mut self) {
        if self.events.len() > MAX_PENDING_EVENTS {
            let excess = self.events.len() - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
    }

    fn start(&mut self) {
        self.phase = Phase::Turn;
        let first = self.battlefield.active_side;
        let terrain = self.battlefield.terrain.kind();
        info!(
            "Battle started on {} terrain, {first:?} to move, wind {:.2}",
            terrain.as_str(),
            self.battlefield.wind
        );
        self.events.push(BattleEvent::BattleStarted { terrain, first });
    }

    fn handle_turn_action(&mut self, side: Side, kind: ActionKind) {
        match kind {
            ActionKind::MoveLeft => self.try_move(side, -MOVE_STEP),
            ActionKind::MoveRight => self.try_move(side, MOVE_STEP),
            ActionKind::IncreaseAngle => self.battlefield.tank_mut(side).adjust_angle(ANGLE_STEP),
            ActionKind::DecreaseAngle => self.battlefield.tank_mut(side).adjust_angle(-ANGLE_STEP),
            ActionKind::IncreasePower => self.battlefield.tank_mut(side).adjust_power(POWER_STEP),
            ActionKind::DecreasePower => self.battlefield.tank_mut(side).adjust_power(-POWER_STEP),
            ActionKind::Fire => self.fire(side),
            ActionKind::StartOrRestart => {}
        }
    }

    fn try_move(&mut self, side: Side, delta: f64) {
        if self.battlefield.movement_budget == 0 {
            trace!("Ignoring move from {side:?}: no movement left this turn");
            return;
        }
        let width = self.battlefield.width();
        let target_x = self.battlefield.tank(side).x() + delta;
        if target_x <= MOVE_MARGIN || target_x >= width - MOVE_MARGIN {
            trace!("Ignoring move from {side:?}: x={target_x:.1} is past the margin");
            return;
        }

        let Battlefield { terrain, tanks, .. } = &mut self.battlefield;
        tanks[side.index()].move_by(delta, terrain);
        self.battlefield.movement_budget -= 1;
    }

    fn fire(&mut self, side: Side) {
        if self.battlefield.projectile.as_ref().is_some_and(|p| p.is_active()) {
            trace!("Ignoring fire from {side:?}: a shell is already in flight");
            return;
        }

        let tank = self.battlefield.tank(side);
        let (angle, power) = (tank.angle(), tank.power());
        let projectile = tank.fire();
        debug!("{side:?} fires at {angle:.0} degrees, power {power:.0}");

        let trail = &mut self.battlefield.trajectories[side.index()];
        trail.clear();
        trail.push(projectile.position());

        self.battlefield.projectile = Some(projectile);
        self.pending_turn_switch = true;
        self.phase = Phase::InFlight;
        self.events.push(BattleEvent::ShotFired { side, angle, power });
    }

    /// Close out a shot: new wind, maybe a health pack, fresh movement, and
    /// hand the turn over (or end the match).
    fn end_flight(&mut self) {
        if let Some(mut projectile) = self.battlefield.projectile.take() {
            projectile.deactivate();
        }

        self.battlefield.wind = battlefield::random_wind(&mut self.rng);
        if let Some(position) = systems::pickups::run(&mut self.battlefield, &mut self.rng) {
            self.events.push(BattleEvent::PickupSpawned {
                x: position.x,
                y: position.y,
            });
        }
        self.battlefield.movement_budget = self.battlefield.max_movement_budget;
        if self.pending_turn_switch {
            self.battlefield.active_side = self.battlefield.active_side.opponent();
            self.pending_turn_switch = false;
        }

        match self.check_winner() {
            Outcome::Won(winner) => {
                self.phase = Phase::GameOver;
                info!("Game over, {winner:?} wins");
                self.events.push(BattleEvent::GameOver { winner });
            }
            Outcome::Ongoing => {
                self.phase = Phase::Turn;
                let side = self.battlefield.active_side;
                let wind = self.battlefield.wind;
                debug!("Turn passes to {side:?}, wind {wind:.2}");
                self.events.push(BattleEvent::TurnChanged { side, wind });
            }
        }
    }
}
