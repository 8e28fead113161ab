//! Behavior thresholds and speed scalars.
//!
//! Every decision in the engine is a comparison against one of these
//! compile-time constants; there is no runtime configuration.

/// Consecutive confirmed sightings required before a charge begins.
pub const SPOTTED_THRESHOLD: u8 = 3;

/// Consecutive tracking misses before an active charge is abandoned.
pub const MAX_TRACKING_MISSES: u8 = 8;

/// Consecutive boundary contacts before contact is trusted (debounce).
pub const MAX_TRACKING_BOUNDS: u8 = 2;

/// Cycle count of the evade counter-steer ("spinoff").
pub const SPINOFF_COUNT: u8 = 5;

/// Cycle count of the victory back-away.
pub const BACKUP_COUNT: u8 = 5;

/// Cycle count of the evade maneuver used by the momentum logic.
/// Declared for that adjacent logic; nothing in this engine reads it.
pub const EVADE_COUNT: u8 = 5;

/// Distance (cm) below which momentum reversal is allowed.
/// Declared for the momentum logic; nothing in this engine reads it.
pub const MOMENTUM_SWITCH_DIST: u16 = 8;

/// Full wheel speed, used for charging and backing away.
pub const FULL_SPEED: i8 = 3;

/// Wheel speed of the in-place search sweep.
pub const SWEEP_SPEED: i8 = 3;

/// Small counter-rotation offset applied to one wheel during an evade pivot.
pub const NUDGE_SPEED: i8 = 1;

// Contact must debounce strictly faster than tracking gives up, otherwise an
// edge hit during a charge could be resolved as a plain tracking loss.
const _: () = assert!(MAX_TRACKING_BOUNDS < MAX_TRACKING_MISSES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_values() {
        assert_eq!(SPOTTED_THRESHOLD, 3);
        assert_eq!(MAX_TRACKING_MISSES, 8);
        assert_eq!(MAX_TRACKING_BOUNDS, 2);
        assert_eq!(SPINOFF_COUNT, 5);
        assert_eq!(BACKUP_COUNT, 5);
    }

    #[test]
    fn test_speed_scalars() {
        assert_eq!(FULL_SPEED, 3);
        assert_eq!(SWEEP_SPEED, 3);
        assert!(NUDGE_SPEED < FULL_SPEED);
    }
}
