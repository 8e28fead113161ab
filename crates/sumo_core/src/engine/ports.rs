//! Sensor and actuator ports.
//!
//! The physical drivers (sonar region classifier, line sensors, PWM motor
//! control, LED/buzzer) live outside this crate. The engine talks to them
//! through these traits only, one owner per port, accessed synchronously
//! from whichever controller is active.

use super::types::Direction;

/// Directional proximity sensing (sonar region classifier).
pub trait ProximitySensor {
    /// Coarse region of the nearest detected object, `None` when clear.
    fn region(&mut self) -> Option<Direction>;

    /// Whether an unconsumed reading exists for the queried bearing.
    ///
    /// Counters may only move on fresh readings; a stale poll is inert.
    fn is_fresh(&mut self, toward: Option<Direction>) -> bool;

    /// Raw distance in centimeters. Maneuvers poll this purely to keep the
    /// sensor pipeline current while they run.
    fn raw_distance(&mut self) -> u16;
}

/// Ring edge detection. Reports which side of the robot crossed the line.
pub trait BoundarySensor {
    fn contact(&mut self) -> Option<Direction>;
}

/// Independent signed wheel speeds, range −FULL_SPEED..=FULL_SPEED.
pub trait DriveMotor {
    fn set_speed(&mut self, left: i8, right: i8);

    /// Last commanded speeds. Read back for the sign-flip on a sweep
    /// reversal; this is the only state that survives across episodes.
    fn current_speed(&self) -> (i8, i8);
}

/// LED and buzzer feedback.
pub trait Indicator {
    fn set_visual(&mut self, on: bool);
    fn beep(&mut self);
}
