//! Shared value types for the behavior engine.

use serde::{Deserialize, Serialize};

/// Signed unit bearing, rotational or linear depending on context.
///
/// `Left` is −1 (left turn sense / trailing side), `Right` is +1 (right turn
/// sense / leading side). The bearing carries no magnitude; wheel speed
/// scalars are applied separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The raw signed unit value (−1 or +1).
    pub fn signum(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Classify a signed value. Zero has no bearing.
    pub fn from_sign(value: i8) -> Option<Self> {
        match value.signum() {
            -1 => Some(Direction::Left),
            1 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One proximity poll: coarse region of the nearest detected object (`None`
/// when nothing is in view) plus a freshness flag for the queried bearing.
///
/// Stale samples are inert: they must not advance or reset any counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximitySample {
    pub region: Option<Direction>,
    pub fresh: bool,
}

impl ProximitySample {
    pub fn fresh(region: Option<Direction>) -> Self {
        Self { region, fresh: true }
    }

    pub fn stale(region: Option<Direction>) -> Self {
        Self { region, fresh: false }
    }
}
