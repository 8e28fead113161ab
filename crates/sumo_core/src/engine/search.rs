//! Search mode: sweep in place until an opponent is confirmed.
//!
//! The robot rotates at a fixed sweep speed, polling the proximity sensor.
//! A sighting only counts when a fresh reading repeats the previous fresh
//! region and that region is non-null; anything else resets the streak.
//! Hitting the ring edge mid-sweep just reverses the rotation sense.
//! There is no timeout: search runs until a target is confirmed.

use super::ports::{BoundarySensor, DriveMotor, ProximitySensor};
use super::thresholds::{SPOTTED_THRESHOLD, SWEEP_SPEED};
use super::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    Sweeping,
    /// Sighting streak reached threshold; charge this bearing.
    TargetConfirmed(Direction),
}

#[derive(Debug)]
pub struct SearchController {
    spotted: u8,
    last_region: Option<Direction>,
}

impl SearchController {
    /// Start (or resume) the sweep in the given turn sense.
    pub fn begin<D: DriveMotor>(turn_sense: Direction, drive: &mut D) -> Self {
        match turn_sense {
            Direction::Left => drive.set_speed(-SWEEP_SPEED, SWEEP_SPEED),
            Direction::Right => drive.set_speed(SWEEP_SPEED, -SWEEP_SPEED),
        }
        Self { spotted: 0, last_region: None }
    }

    /// One polling cycle.
    pub fn step<P, B, D>(&mut self, proximity: &mut P, boundary: &mut B, drive: &mut D) -> SearchStep
    where
        P: ProximitySensor,
        B: BoundarySensor,
        D: DriveMotor,
    {
        if boundary.contact().is_some() {
            // Edge reached with nothing currently in view: flip the rotation
            // sense and keep sweeping. The sighting streak is untouched.
            if self.last_region.is_none() {
                let (left, right) = drive.current_speed();
                drive.set_speed(-left, -right);
            }
            return SearchStep::Sweeping;
        }

        let region = proximity.region();
        if proximity.is_fresh(region) {
            match region {
                Some(bearing) if self.last_region == region => {
                    self.spotted += 1;
                    if self.spotted >= SPOTTED_THRESHOLD {
                        return SearchStep::TargetConfirmed(bearing);
                    }
                }
                _ => self.spotted = 0,
            }
            self.last_region = region;
        }
        SearchStep::Sweeping
    }

    pub fn spotted(&self) -> u8 {
        self.spotted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::ProximitySample;
    use crate::sim::scripted::{RecordingDrive, ScriptedBoundary, ScriptedProximity};

    fn sweep_ports() -> (ScriptedProximity, ScriptedBoundary, RecordingDrive) {
        (ScriptedProximity::default(), ScriptedBoundary::default(), RecordingDrive::default())
    }

    fn step_all(
        ctrl: &mut SearchController,
        proximity: &mut ScriptedProximity,
        boundary: &mut ScriptedBoundary,
        drive: &mut RecordingDrive,
        ticks: usize,
    ) -> Vec<SearchStep> {
        (0..ticks).map(|_| ctrl.step(proximity, boundary, drive)).collect()
    }

    #[test]
    fn test_begin_sets_sweep_by_turn_sense() {
        let mut drive = RecordingDrive::default();
        SearchController::begin(Direction::Left, &mut drive);
        assert_eq!(drive.current_speed(), (-SWEEP_SPEED, SWEEP_SPEED));

        SearchController::begin(Direction::Right, &mut drive);
        assert_eq!(drive.current_speed(), (SWEEP_SPEED, -SWEEP_SPEED));
    }

    #[test]
    fn test_confirms_after_consecutive_identical_sightings() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        for _ in 0..4 {
            proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        }
        let mut ctrl = SearchController::begin(Direction::Right, &mut drive);

        let steps = step_all(&mut ctrl, &mut proximity, &mut boundary, &mut drive, 4);
        assert_eq!(steps[..3], [SearchStep::Sweeping; 3]);
        assert_eq!(steps[3], SearchStep::TargetConfirmed(Direction::Right));
    }

    #[test]
    fn test_never_confirms_below_threshold() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        // Three identical fresh sightings: streak reaches 2, not threshold.
        for _ in 0..3 {
            proximity.push(ProximitySample::fresh(Some(Direction::Left)));
        }
        let mut ctrl = SearchController::begin(Direction::Left, &mut drive);

        let steps = step_all(&mut ctrl, &mut proximity, &mut boundary, &mut drive, 3);
        assert!(steps.iter().all(|s| *s == SearchStep::Sweeping));
        assert_eq!(ctrl.spotted(), 2);
    }

    #[test]
    fn test_null_or_mismatched_fresh_sample_resets_streak() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        proximity.push(ProximitySample::fresh(None));
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        let mut ctrl = SearchController::begin(Direction::Right, &mut drive);

        step_all(&mut ctrl, &mut proximity, &mut boundary, &mut drive, 4);
        // The null reading wiped the streak; the trailing sighting no longer
        // matches a previous fresh region.
        assert_eq!(ctrl.spotted(), 0);
    }

    #[test]
    fn test_stale_samples_are_inert() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        proximity.push(ProximitySample::stale(None));
        proximity.push(ProximitySample::stale(Some(Direction::Left)));
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        let mut ctrl = SearchController::begin(Direction::Right, &mut drive);

        let steps = step_all(&mut ctrl, &mut proximity, &mut boundary, &mut drive, 6);
        // Streak: reset, 1, (inert), (inert), 2, 3 -> confirmed.
        assert_eq!(steps[5], SearchStep::TargetConfirmed(Direction::Right));
    }

    #[test]
    fn test_boundary_contact_reverses_sweep_and_keeps_streak() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        boundary.push(Some(Direction::Right));
        let mut ctrl = SearchController::begin(Direction::Left, &mut drive);
        ctrl.spotted = 2;

        let step = ctrl.step(&mut proximity, &mut boundary, &mut drive);
        assert_eq!(step, SearchStep::Sweeping);
        assert_eq!(drive.current_speed(), (SWEEP_SPEED, -SWEEP_SPEED));
        assert_eq!(ctrl.spotted(), 2);
    }

    #[test]
    fn test_no_sweep_reversal_while_object_in_view() {
        let (mut proximity, mut boundary, mut drive) = sweep_ports();
        proximity.push(ProximitySample::fresh(Some(Direction::Right)));
        boundary.push(None);
        boundary.push(Some(Direction::Left));
        let mut ctrl = SearchController::begin(Direction::Left, &mut drive);

        ctrl.step(&mut proximity, &mut boundary, &mut drive);
        ctrl.step(&mut proximity, &mut boundary, &mut drive);
        // Contact arrived while something was detected: wheels stay put.
        assert_eq!(drive.current_speed(), (-SWEEP_SPEED, SWEEP_SPEED));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn sample_strategy() -> impl Strategy<Value = ProximitySample> {
            ((-1i8..=1), any::<bool>())
                .prop_map(|(sign, fresh)| ProximitySample { region: Direction::from_sign(sign), fresh })
        }

        proptest! {
            /// Property: confirmation happens exactly when the reference fold
            /// over fresh samples reaches the threshold, and never before.
            #[test]
            fn prop_spotted_matches_reference_model(
                samples in prop::collection::vec(sample_strategy(), 0..40)
            ) {
                let mut proximity = ScriptedProximity::default();
                let mut boundary = ScriptedBoundary::default();
                let mut drive = RecordingDrive::default();
                for s in &samples {
                    proximity.push(*s);
                }

                let mut ctrl = SearchController::begin(Direction::Right, &mut drive);
                let mut confirmed_at = None;
                for i in 0..samples.len() {
                    if let SearchStep::TargetConfirmed(d) = ctrl.step(&mut proximity, &mut boundary, &mut drive) {
                        confirmed_at = Some((i, d));
                        break;
                    }
                }

                let mut streak = 0u8;
                let mut prev = None;
                let mut expected = None;
                for (i, s) in samples.iter().enumerate() {
                    if !s.fresh {
                        continue;
                    }
                    match s.region {
                        Some(bearing) if prev == s.region => {
                            streak += 1;
                            if streak >= SPOTTED_THRESHOLD {
                                expected = Some((i, bearing));
                                break;
                            }
                        }
                        _ => streak = 0,
                    }
                    prev = s.region;
                }

                prop_assert_eq!(confirmed_at, expected);
            }
        }
    }
}
