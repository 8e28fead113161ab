//! Recover maneuver: back away from the edge after a presumed win.
//!
//! Fired when the charge side touches the edge, meaning the opponent went
//! over the line first. Both wheels run full speed along the given (reversed)
//! bearing, the LED stays on for the whole maneuver and the buzzer chirps
//! every cycle. Like the evade pivot this runs a fixed cycle count with no
//! early exit, then leaves the LED off.

use super::ports::{DriveMotor, Indicator, ProximitySensor};
use super::thresholds::{BACKUP_COUNT, FULL_SPEED};
use super::types::Direction;

#[derive(Debug)]
pub struct RecoverManeuver {
    remaining: u8,
}

impl RecoverManeuver {
    /// Command the back-away along `bearing` and light the indicator.
    pub fn begin<D, I>(bearing: Direction, drive: &mut D, indicator: &mut I) -> Self
    where
        D: DriveMotor,
        I: Indicator,
    {
        let speed = FULL_SPEED * bearing.signum();
        drive.set_speed(speed, speed);
        indicator.set_visual(true);
        Self { remaining: BACKUP_COUNT }
    }

    /// One pacing cycle. Returns `false` once the fixed duration is spent;
    /// the final cycle switches the indicator off.
    pub fn step<P, I>(&mut self, proximity: &mut P, indicator: &mut I) -> bool
    where
        P: ProximitySensor,
        I: Indicator,
    {
        if self.remaining == 0 {
            return false;
        }
        indicator.beep();
        proximity.region();
        self.remaining -= 1;
        if self.remaining == 0 {
            indicator.set_visual(false);
            return false;
        }
        true
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::ProximitySample;
    use crate::sim::scripted::{RecordingDrive, RecordingIndicator, ScriptedProximity};

    #[test]
    fn test_backs_away_at_full_speed() {
        let mut drive = RecordingDrive::default();
        let mut indicator = RecordingIndicator::default();
        RecoverManeuver::begin(Direction::Left, &mut drive, &mut indicator);
        assert_eq!(drive.current_speed(), (-FULL_SPEED, -FULL_SPEED));
        assert!(indicator.visual());
    }

    #[test]
    fn test_runs_exactly_backup_count_cycles_with_feedback() {
        let mut drive = RecordingDrive::default();
        let mut indicator = RecordingIndicator::default();
        let mut proximity = ScriptedProximity::default();
        let mut maneuver = RecoverManeuver::begin(Direction::Left, &mut drive, &mut indicator);

        let mut cycles = 1;
        while maneuver.step(&mut proximity, &mut indicator) {
            cycles += 1;
        }
        assert_eq!(cycles, BACKUP_COUNT as usize);
        assert_eq!(indicator.beeps(), BACKUP_COUNT as u32);
    }

    #[test]
    fn test_indicator_off_after_completion() {
        let mut drive = RecordingDrive::default();
        let mut indicator = RecordingIndicator::default();
        let mut proximity = ScriptedProximity::default();
        // Sensor input mid-maneuver must not shorten or extend it.
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        let mut maneuver = RecoverManeuver::begin(Direction::Right, &mut drive, &mut indicator);

        assert!(indicator.visual());
        while maneuver.step(&mut proximity, &mut indicator) {}
        assert!(!indicator.visual());
        assert!(!maneuver.step(&mut proximity, &mut indicator));
        assert_eq!(indicator.beeps(), BACKUP_COUNT as u32);
    }
}
