//! Test and demo harnesses: scripted ports, declarative scenarios, and a
//! seeded toy arena. Nothing here ships to the robot.

pub mod arena;
pub mod scenario;
pub mod scripted;

pub use arena::{run_demo, Arena, ArenaConfig};
pub use scenario::{load_scenario, run_scenario, ScenarioBuilder, ScenarioSpec, TickInputs};
pub use scripted::{RecordingDrive, RecordingIndicator, ScriptedBoundary, ScriptedProximity};
