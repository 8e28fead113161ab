//! # sumo_core - Sumo Ring Behavior Engine
//!
//! Behavior-selection core for an autonomous two-wheeled sumo robot: decide,
//! from live proximity and boundary readings, whether to sweep for the
//! opponent, charge it, pivot out of a push, or back off after a win.
//!
//! ## Features
//! - Strict Search → Attack → {Evade | Recover} → Search cycle
//! - Discrete, individually testable step functions (no busy-wait loops)
//! - Hardware behind four small port traits; drivers stay out of this crate
//! - Deterministic scripted and seeded simulation harnesses (same seed =
//!   same bout)

pub mod engine;
pub mod sim;

pub use engine::{
    AttackController, AttackOutcome, BehaviorLoop, BoutRecorder, BoutSummary, Direction,
    EvadeManeuver, ModeKind, ProximitySample, RecoverManeuver, SearchController,
};
