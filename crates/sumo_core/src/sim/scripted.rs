//! Scripted port implementations.
//!
//! Deterministic fixtures for unit tests and scenario replay: sensors feed
//! from pre-loaded queues, actuators record everything they are told.
//!
//! Queues are consumed one entry per poll, not per tick. When a sensor queue
//! runs dry the proximity sensor keeps reporting its last region as stale
//! (inert to every counter) and the boundary sensor reports no contact, so a
//! short script simply lets the engine idle.

use std::collections::VecDeque;

use crate::engine::ports::{BoundarySensor, DriveMotor, Indicator, ProximitySensor};
use crate::engine::types::{Direction, ProximitySample};

#[derive(Debug, Default)]
pub struct ScriptedProximity {
    samples: VecDeque<ProximitySample>,
    distances: VecDeque<u16>,
    current: Option<ProximitySample>,
    raw_polls: u32,
}

impl ScriptedProximity {
    pub fn push(&mut self, sample: ProximitySample) {
        self.samples.push_back(sample);
    }

    pub fn push_distance(&mut self, distance_cm: u16) {
        self.distances.push_back(distance_cm);
    }

    /// Number of raw-distance polls issued so far (maneuver pacing checks).
    pub fn raw_polls(&self) -> u32 {
        self.raw_polls
    }
}

impl ProximitySensor for ScriptedProximity {
    fn region(&mut self) -> Option<Direction> {
        match self.samples.pop_front() {
            Some(sample) => {
                self.current = Some(sample);
                sample.region
            }
            // Script exhausted: the last echo lingers, but it is stale.
            None => {
                let region = self.current.and_then(|s| s.region);
                self.current = Some(ProximitySample::stale(region));
                region
            }
        }
    }

    fn is_fresh(&mut self, _toward: Option<Direction>) -> bool {
        self.current.map(|s| s.fresh).unwrap_or(false)
    }

    fn raw_distance(&mut self) -> u16 {
        self.raw_polls += 1;
        self.distances.pop_front().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct ScriptedBoundary {
    contacts: VecDeque<Option<Direction>>,
}

impl ScriptedBoundary {
    pub fn push(&mut self, contact: Option<Direction>) {
        self.contacts.push_back(contact);
    }
}

impl BoundarySensor for ScriptedBoundary {
    fn contact(&mut self) -> Option<Direction> {
        self.contacts.pop_front().unwrap_or(None)
    }
}

/// Drive that remembers the current command and the full command history.
#[derive(Debug, Default)]
pub struct RecordingDrive {
    current: (i8, i8),
    history: Vec<(i8, i8)>,
}

impl RecordingDrive {
    pub fn history(&self) -> &[(i8, i8)] {
        &self.history
    }
}

impl DriveMotor for RecordingDrive {
    fn set_speed(&mut self, left: i8, right: i8) {
        self.current = (left, right);
        self.history.push((left, right));
    }

    fn current_speed(&self) -> (i8, i8) {
        self.current
    }
}

#[derive(Debug, Default)]
pub struct RecordingIndicator {
    visual: bool,
    beeps: u32,
    visual_history: Vec<bool>,
}

impl RecordingIndicator {
    pub fn visual(&self) -> bool {
        self.visual
    }

    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    pub fn visual_history(&self) -> &[bool] {
        &self.visual_history
    }
}

impl Indicator for RecordingIndicator {
    fn set_visual(&mut self, on: bool) {
        self.visual = on;
        self.visual_history.push(on);
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
