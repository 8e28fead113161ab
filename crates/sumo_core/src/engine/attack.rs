//! Attack mode: charge a confirmed bearing at full speed.
//!
//! The charge bearing is locked for the whole episode. Two independent
//! debounce counters decide when it ends: consecutive fresh readings that no
//! longer show the opponent on the charge bearing, and consecutive boundary
//! contacts. Either one reaching its threshold ends the charge, and the last
//! observed contact decides what happens next.

use super::ports::{BoundarySensor, DriveMotor, ProximitySensor};
use super::thresholds::{FULL_SPEED, MAX_TRACKING_BOUNDS, MAX_TRACKING_MISSES};
use super::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStep {
    Charging,
    Done(AttackOutcome),
}

/// How a charge ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Edge contact on the charge side: the opponent went out. Carries the
    /// back-away bearing (opposite of the charge).
    OpponentOut(Direction),
    /// Edge contact on the trailing side: we are the ones being pushed.
    /// Carries the contacted side.
    PushedOut(Direction),
    /// Tracking lost with no edge contact.
    Lost,
}

#[derive(Debug)]
pub struct AttackController {
    heading: Direction,
    misses: u8,
    bounds: u8,
}

impl AttackController {
    /// Lock the bearing and launch the charge.
    pub fn begin<D: DriveMotor>(heading: Direction, drive: &mut D) -> Self {
        let speed = FULL_SPEED * heading.signum();
        drive.set_speed(speed, speed);
        Self { heading, misses: 0, bounds: 0 }
    }

    /// One polling cycle of the active charge.
    pub fn step<P, B>(&mut self, proximity: &mut P, boundary: &mut B) -> AttackStep
    where
        P: ProximitySensor,
        B: BoundarySensor,
    {
        let region = proximity.region();
        if proximity.is_fresh(Some(self.heading)) {
            if region != Some(self.heading) {
                self.misses += 1;
            } else {
                self.misses = 0;
            }
        }

        let contact = boundary.contact();
        if contact.is_some() {
            // Could still be a stray line-sensor signal; trust it only after
            // MAX_TRACKING_BOUNDS cycles in a row.
            self.bounds += 1;
        } else {
            self.bounds = 0;
        }

        if self.misses < MAX_TRACKING_MISSES && self.bounds < MAX_TRACKING_BOUNDS {
            return AttackStep::Charging;
        }

        AttackStep::Done(match contact {
            Some(side) if side == self.heading => AttackOutcome::OpponentOut(self.heading.opposite()),
            Some(side) => AttackOutcome::PushedOut(side),
            None => AttackOutcome::Lost,
        })
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn misses(&self) -> u8 {
        self.misses
    }

    pub fn bounds(&self) -> u8 {
        self.bounds
    }
}
