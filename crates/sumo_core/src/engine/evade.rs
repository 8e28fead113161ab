//! Evade maneuver: pivot out of an opponent's push.
//!
//! Fired when the trailing side touches the edge during a charge. One wheel
//! gets a small counter-offset, the other full speed in the matching sense,
//! pivoting the robot off the push line. The pivot runs a fixed cycle count
//! and never exits early; sensor input during the maneuver is ignored except
//! to keep the distance pipeline current.

use super::ports::{DriveMotor, ProximitySensor};
use super::thresholds::{FULL_SPEED, NUDGE_SPEED, SPINOFF_COUNT};
use super::types::Direction;

#[derive(Debug)]
pub struct EvadeManeuver {
    remaining: u8,
}

impl EvadeManeuver {
    /// Command the pivot. `contact` is the side that touched the edge,
    /// `turn_sense` the robot's current rotational configuration.
    pub fn begin<D: DriveMotor>(contact: Direction, turn_sense: Direction, drive: &mut D) -> Self {
        let sign = contact.signum();
        match turn_sense {
            Direction::Left => drive.set_speed(-NUDGE_SPEED * sign, FULL_SPEED * sign),
            Direction::Right => drive.set_speed(FULL_SPEED * sign, -NUDGE_SPEED * sign),
        }
        Self { remaining: SPINOFF_COUNT }
    }

    /// One pacing cycle. Returns `false` once the fixed duration is spent.
    pub fn step<P: ProximitySensor>(&mut self, proximity: &mut P) -> bool {
        if self.remaining == 0 {
            return false;
        }
        proximity.raw_distance();
        self.remaining -= 1;
        self.remaining > 0
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}
