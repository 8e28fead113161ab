//! Behavior engine: port traits, thresholds, and the four ring behaviors.

pub mod attack;
pub mod bout_log;
pub mod evade;
pub mod ports;
pub mod recover;
pub mod scheduler;
pub mod search;
pub mod thresholds;
pub mod types;

pub use attack::{AttackController, AttackOutcome, AttackStep};
pub use bout_log::{BoutLogEntry, BoutRecorder, BoutSummary, CounterSnapshot};
pub use evade::EvadeManeuver;
pub use ports::{BoundarySensor, DriveMotor, Indicator, ProximitySensor};
pub use recover::RecoverManeuver;
pub use scheduler::{BehaviorLoop, ModeKind};
pub use search::{SearchController, SearchStep};
pub use types::{Direction, ProximitySample};
