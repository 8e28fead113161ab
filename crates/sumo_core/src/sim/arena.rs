//! Deterministic toy ring simulation.
//!
//! A minimal physical stand-in for the real hardware: a circular ring, the
//! robot integrating its wheel commands, and an opponent drifting toward it
//! under a seeded RNG. All four ports view the same shared world, which the
//! driver advances once per behavior tick. Same seed, same bout — the
//! determinism tests rely on it.
//!
//! This is a demo/test harness, not a sensor driver: geometry and motion are
//! deliberately crude.

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::bout_log::BoutRecorder;
use crate::engine::ports::{BoundarySensor, DriveMotor, Indicator, ProximitySensor};
use crate::engine::scheduler::BehaviorLoop;
use crate::engine::types::Direction;

/// Ring and sensor geometry, centimeters.
#[derive(Debug, Clone, Copy)]
pub struct ArenaConfig {
    pub seed: u64,
    pub ring_radius_cm: f32,
    pub sonar_range_cm: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { seed: 7, ring_radius_cm: 75.0, sonar_range_cm: 60.0 }
    }
}

const ROBOT_RADIUS_CM: f32 = 10.0;
const CM_PER_SPEED_UNIT: f32 = 1.0;
const RAD_PER_SPEED_UNIT: f32 = 0.08;
const OPPONENT_STEP_CM: f32 = 1.2;

#[derive(Debug)]
struct World {
    config: ArenaConfig,
    rng: ChaCha8Rng,
    robot_pos: (f32, f32),
    robot_heading: f32,
    opponent_pos: (f32, f32),
    wheels: (i8, i8),
    led: bool,
    beeps: u32,
    /// An echo arrives every other tick; consumed by the first freshness query.
    fresh: bool,
    ping_parity: bool,
}

impl World {
    fn new(config: ArenaConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = config.ring_radius_cm * 0.6;
        Self {
            config,
            rng,
            robot_pos: (0.0, 0.0),
            robot_heading: 0.0,
            opponent_pos: (radius * angle.cos(), radius * angle.sin()),
            wheels: (0, 0),
            led: false,
            beeps: 0,
            fresh: false,
            ping_parity: false,
        }
    }

    fn advance(&mut self) {
        let (left, right) = self.wheels;
        let forward = (left as f32 + right as f32) * 0.5 * CM_PER_SPEED_UNIT;
        let turn = (right as f32 - left as f32) * 0.5 * RAD_PER_SPEED_UNIT;

        self.robot_heading += turn;
        self.robot_pos.0 += forward * self.robot_heading.cos();
        self.robot_pos.1 += forward * self.robot_heading.sin();

        // Keep the robot from escaping the model entirely.
        let limit = self.config.ring_radius_cm + ROBOT_RADIUS_CM;
        let r = (self.robot_pos.0.powi(2) + self.robot_pos.1.powi(2)).sqrt();
        if r > limit {
            self.robot_pos.0 *= limit / r;
            self.robot_pos.1 *= limit / r;
        }

        // Opponent drifts toward the robot with some jitter.
        let dx = self.robot_pos.0 - self.opponent_pos.0;
        let dy = self.robot_pos.1 - self.opponent_pos.1;
        let dist = (dx * dx + dy * dy).sqrt().max(1.0);
        self.opponent_pos.0 +=
            dx / dist * OPPONENT_STEP_CM + self.rng.gen_range(-0.5..0.5);
        self.opponent_pos.1 +=
            dy / dist * OPPONENT_STEP_CM + self.rng.gen_range(-0.5..0.5);

        self.ping_parity = !self.ping_parity;
        if self.ping_parity {
            self.fresh = true;
        }
    }

    fn opponent_range_cm(&self) -> f32 {
        let dx = self.opponent_pos.0 - self.robot_pos.0;
        let dy = self.opponent_pos.1 - self.robot_pos.1;
        (dx * dx + dy * dy).sqrt()
    }

    fn region(&self) -> Option<Direction> {
        if self.opponent_range_cm() > self.config.sonar_range_cm {
            return None;
        }
        let dx = self.opponent_pos.0 - self.robot_pos.0;
        let dy = self.opponent_pos.1 - self.robot_pos.1;
        let forward = dx * self.robot_heading.cos() + dy * self.robot_heading.sin();
        if forward >= 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    }

    fn contact(&self) -> Option<Direction> {
        let r = (self.robot_pos.0.powi(2) + self.robot_pos.1.powi(2)).sqrt();
        if r + ROBOT_RADIUS_CM < self.config.ring_radius_cm {
            return None;
        }
        let outward = self.robot_pos.0 / r.max(1.0) * self.robot_heading.cos()
            + self.robot_pos.1 / r.max(1.0) * self.robot_heading.sin();
        if outward >= 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    }
}

type Shared = Rc<RefCell<World>>;

pub struct ArenaProximity(Shared);
pub struct ArenaBoundary(Shared);
pub struct ArenaDrive(Shared);
pub struct ArenaIndicator(Shared);

impl ProximitySensor for ArenaProximity {
    fn region(&mut self) -> Option<Direction> {
        self.0.borrow().region()
    }

    fn is_fresh(&mut self, _toward: Option<Direction>) -> bool {
        let mut world = self.0.borrow_mut();
        let fresh = world.fresh;
        world.fresh = false;
        fresh
    }

    fn raw_distance(&mut self) -> u16 {
        self.0.borrow().opponent_range_cm() as u16
    }
}

impl BoundarySensor for ArenaBoundary {
    fn contact(&mut self) -> Option<Direction> {
        self.0.borrow().contact()
    }
}

impl DriveMotor for ArenaDrive {
    fn set_speed(&mut self, left: i8, right: i8) {
        self.0.borrow_mut().wheels = (left, right);
    }

    fn current_speed(&self) -> (i8, i8) {
        self.0.borrow().wheels
    }
}

impl Indicator for ArenaIndicator {
    fn set_visual(&mut self, on: bool) {
        self.0.borrow_mut().led = on;
    }

    fn beep(&mut self) {
        self.0.borrow_mut().beeps += 1;
    }
}

/// Shared world plus its four port views.
pub struct Arena {
    world: Shared,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { world: Rc::new(RefCell::new(World::new(config))) }
    }

    pub fn ports(&self) -> (ArenaProximity, ArenaBoundary, ArenaDrive, ArenaIndicator) {
        (
            ArenaProximity(Rc::clone(&self.world)),
            ArenaBoundary(Rc::clone(&self.world)),
            ArenaDrive(Rc::clone(&self.world)),
            ArenaIndicator(Rc::clone(&self.world)),
        )
    }

    /// Integrate one physics step. Call once per behavior tick.
    pub fn advance(&self) {
        self.world.borrow_mut().advance();
    }
}

/// Run a seeded bout for a fixed tick budget and return its trace.
pub fn run_demo(seed: u64, ticks: u32) -> BoutRecorder {
    let arena = Arena::new(ArenaConfig { seed, ..ArenaConfig::default() });
    let (proximity, boundary, drive, indicator) = arena.ports();
    let mut behavior = BehaviorLoop::new(proximity, boundary, drive, indicator);

    let mut recorder = BoutRecorder::new();
    for _ in 0..ticks {
        arena.advance();
        behavior.tick();
        recorder.record(behavior.log_entry());
    }
    recorder
}
