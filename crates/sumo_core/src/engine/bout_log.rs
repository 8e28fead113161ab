//! Bout trace logging.
//!
//! Pure observation of the behavior loop: one serializable entry per tick
//! (active mode, debounce counters, last wheel command), a recorder, and a
//! post-bout summary. Used by the CLI and by determinism tests; nothing in
//! the control flow depends on it.

use serde::{Deserialize, Serialize};

use super::scheduler::ModeKind;

/// Counter view of the active controller. Fields that do not apply to the
/// current mode are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Sighting streak (Search).
    pub spotted: u8,
    /// Consecutive tracking misses (Attack).
    pub misses: u8,
    /// Consecutive boundary contacts (Attack).
    pub bounds: u8,
    /// Cycles left in the running maneuver (Evade/Recover).
    pub countdown: u8,
}

/// One tick of the bout trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutLogEntry {
    pub tick: u64,
    pub mode: ModeKind,
    pub counters: CounterSnapshot,
    /// Last commanded (left, right) wheel speeds.
    pub wheels: (i8, i8),
}

/// Aggregated view of a finished (or truncated) bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutSummary {
    pub ticks: u64,
    pub search_ticks: u64,
    pub attack_ticks: u64,
    pub evade_ticks: u64,
    pub recover_ticks: u64,
    /// `(tick, entered_mode)` for every mode change.
    pub transitions: Vec<(u64, ModeKind)>,
}

#[derive(Debug, Default)]
pub struct BoutRecorder {
    entries: Vec<BoutLogEntry>,
}

impl BoutRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: BoutLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[BoutLogEntry] {
        &self.entries
    }

    pub fn summary(&self) -> BoutSummary {
        let mut summary = BoutSummary {
            ticks: self.entries.len() as u64,
            search_ticks: 0,
            attack_ticks: 0,
            evade_ticks: 0,
            recover_ticks: 0,
            transitions: Vec::new(),
        };
        let mut previous = None;
        for entry in &self.entries {
            match entry.mode {
                ModeKind::Search => summary.search_ticks += 1,
                ModeKind::Attack => summary.attack_ticks += 1,
                ModeKind::Evade => summary.evade_ticks += 1,
                ModeKind::Recover => summary.recover_ticks += 1,
            }
            if previous != Some(entry.mode) {
                summary.transitions.push((entry.tick, entry.mode));
                previous = Some(entry.mode);
            }
        }
        summary
    }
}
