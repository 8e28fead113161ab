//! Top-level behavior loop.
//!
//! Owns the four ports and the active controller, and drives the strict
//! Search → Attack → {Evade | Recover} → Search cycle one `tick()` at a
//! time. A tick is one poll-act cycle; pacing against the physical actuation
//! rate belongs to whatever calls `tick()`.
//!
//! A charge that ends in pure tracking loss (no edge contact) re-enters
//! Search directly.

use super::attack::{AttackController, AttackOutcome, AttackStep};
use super::bout_log::{BoutLogEntry, CounterSnapshot};
use super::evade::EvadeManeuver;
use super::ports::{BoundarySensor, DriveMotor, Indicator, ProximitySensor};
use super::recover::RecoverManeuver;
use super::search::{SearchController, SearchStep};
use super::types::Direction;

use serde::{Deserialize, Serialize};

/// Discriminant-only view of the active mode, for traces and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    Search,
    Attack,
    Evade,
    Recover,
}

#[derive(Debug)]
enum BehaviorMode {
    Search(SearchController),
    Attack(AttackController),
    Evade(EvadeManeuver),
    Recover(RecoverManeuver),
}

pub struct BehaviorLoop<P, B, D, I> {
    proximity: P,
    boundary: B,
    drive: D,
    indicator: I,
    mode: BehaviorMode,
    /// Last non-straight rotational sense commanded; biases sweep and pivot.
    turn_sense: Direction,
    tick: u64,
}

impl<P, B, D, I> BehaviorLoop<P, B, D, I>
where
    P: ProximitySensor,
    B: BoundarySensor,
    D: DriveMotor,
    I: Indicator,
{
    /// Take ownership of the ports and start sweeping.
    pub fn new(proximity: P, boundary: B, mut drive: D, indicator: I) -> Self {
        let turn_sense = turn_sense_of(&drive).unwrap_or(Direction::Right);
        let search = SearchController::begin(turn_sense, &mut drive);
        Self {
            proximity,
            boundary,
            drive,
            indicator,
            mode: BehaviorMode::Search(search),
            turn_sense,
            tick: 0,
        }
    }

    /// One poll-act cycle of the active controller.
    pub fn tick(&mut self) {
        self.tick += 1;
        if let Some(sense) = turn_sense_of(&self.drive) {
            self.turn_sense = sense;
        }

        match &mut self.mode {
            BehaviorMode::Search(ctrl) => {
                if let SearchStep::TargetConfirmed(bearing) =
                    ctrl.step(&mut self.proximity, &mut self.boundary, &mut self.drive)
                {
                    log::debug!("tick {}: target confirmed {:?}, charging", self.tick, bearing);
                    self.mode =
                        BehaviorMode::Attack(AttackController::begin(bearing, &mut self.drive));
                }
            }
            BehaviorMode::Attack(ctrl) => {
                if let AttackStep::Done(outcome) = ctrl.step(&mut self.proximity, &mut self.boundary)
                {
                    self.leave_attack(outcome);
                }
            }
            BehaviorMode::Evade(maneuver) => {
                if !maneuver.step(&mut self.proximity) {
                    self.enter_search();
                }
            }
            BehaviorMode::Recover(maneuver) => {
                if !maneuver.step(&mut self.proximity, &mut self.indicator) {
                    self.enter_search();
                }
            }
        }
    }

    fn leave_attack(&mut self, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::OpponentOut(back) => {
                log::debug!("tick {}: edge on charge side, backing away {:?}", self.tick, back);
                self.mode = BehaviorMode::Recover(RecoverManeuver::begin(
                    back,
                    &mut self.drive,
                    &mut self.indicator,
                ));
            }
            AttackOutcome::PushedOut(side) => {
                log::debug!("tick {}: pushed toward edge {:?}, pivoting out", self.tick, side);
                self.mode = BehaviorMode::Evade(EvadeManeuver::begin(
                    side,
                    self.turn_sense,
                    &mut self.drive,
                ));
            }
            AttackOutcome::Lost => {
                log::debug!("tick {}: tracking lost, resuming search", self.tick);
                self.enter_search();
            }
        }
    }

    fn enter_search(&mut self) {
        self.mode = BehaviorMode::Search(SearchController::begin(self.turn_sense, &mut self.drive));
    }

    pub fn mode(&self) -> ModeKind {
        match self.mode {
            BehaviorMode::Search(_) => ModeKind::Search,
            BehaviorMode::Attack(_) => ModeKind::Attack,
            BehaviorMode::Evade(_) => ModeKind::Evade,
            BehaviorMode::Recover(_) => ModeKind::Recover,
        }
    }

    pub fn counters(&self) -> CounterSnapshot {
        let mut snapshot = CounterSnapshot::default();
        match &self.mode {
            BehaviorMode::Search(ctrl) => snapshot.spotted = ctrl.spotted(),
            BehaviorMode::Attack(ctrl) => {
                snapshot.misses = ctrl.misses();
                snapshot.bounds = ctrl.bounds();
            }
            BehaviorMode::Evade(maneuver) => snapshot.countdown = maneuver.remaining(),
            BehaviorMode::Recover(maneuver) => snapshot.countdown = maneuver.remaining(),
        }
        snapshot
    }

    pub fn log_entry(&self) -> BoutLogEntry {
        BoutLogEntry {
            tick: self.tick,
            mode: self.mode(),
            counters: self.counters(),
            wheels: self.drive.current_speed(),
        }
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Tear down and hand the ports back, for post-bout inspection.
    pub fn into_ports(self) -> (P, B, D, I) {
        (self.proximity, self.boundary, self.drive, self.indicator)
    }
}

/// Rotational sense implied by a wheel command; `None` when driving straight.
fn turn_sense_of<D: DriveMotor>(drive: &D) -> Option<Direction> {
    let (left, right) = drive.current_speed();
    if left < right {
        Some(Direction::Left)
    } else if left > right {
        Some(Direction::Right)
    } else {
        None
    }
}
