//! Step bookkeeping for the dial state machine.
//!
//! Each hidden digit is searched for in its own step, with its own
//! movement rules. This module holds the step index and the transient
//! registers the second step's mechanics need: the full-rotation tracker
//! and the stiff-zone press counter.

use picklock_core::{
    constants::{FULL_ROTATION_TURNS, STIFF_PRESSES_REQUIRED},
    normalize,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which digit the player is currently searching for.
///
/// `Complete` is not an acceptance state; it only means all digits are
/// confirmed and submission is allowed. Acceptance happens through an
/// explicit submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialStep {
    /// Searching for the first digit (clockwise click-seek).
    First,
    /// Searching for the second digit (counter-clockwise, resistance).
    Second,
    /// Searching for the third digit (clockwise-only).
    Third,
    /// All digits confirmed; submission allowed.
    Complete,
}

impl DialStep {
    /// Zero-based index of this step (`Complete` is 3).
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DialStep::First => 0,
            DialStep::Second => 1,
            DialStep::Third => 2,
            DialStep::Complete => 3,
        }
    }

    /// The step after this one. `Complete` stays `Complete`.
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DialStep::First => DialStep::Second,
            DialStep::Second => DialStep::Third,
            DialStep::Third | DialStep::Complete => DialStep::Complete,
        }
    }

    /// Whether a digit is still being searched for.
    #[inline]
    #[must_use]
    pub fn is_searching(self) -> bool {
        !matches!(self, DialStep::Complete)
    }
}

impl fmt::Display for DialStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let step = match self {
            DialStep::First => "first",
            DialStep::Second => "second",
            DialStep::Third => "third",
            DialStep::Complete => "complete",
        };
        write!(f, "{step}")
    }
}

/// Tracks the full counter-clockwise unwinding required by the second
/// step before its resistance mechanic engages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationTracker {
    /// Cumulative counter-clockwise turns this step.
    ccw_turns: u16,

    /// Set once `ccw_turns` reaches a full revolution.
    complete: bool,
}

impl RotationTracker {
    /// Fresh tracker with no rotation recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the full rotation has been completed.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Counter-clockwise turns recorded so far.
    #[inline]
    #[must_use]
    pub fn ccw_turns(&self) -> u16 {
        self.ccw_turns
    }

    /// Record one counter-clockwise turn.
    ///
    /// Clockwise turns are not recorded and do not undo progress.
    pub fn record_ccw_turn(&mut self) {
        if self.complete {
            return;
        }
        self.ccw_turns += 1;
        if self.ccw_turns >= FULL_ROTATION_TURNS {
            self.complete = true;
        }
    }

    /// Clear all recorded rotation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Press counter for the resistance region before the second digit.
///
/// While the dial sits against a stiff position, repeated
/// counter-clockwise presses at that exact position accumulate here;
/// the move is only applied on the final press. Leaving the zone
/// clockwise, completing the step, or resetting clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StiffZone {
    /// The zone position currently being pressed against, if any.
    position: Option<u8>,

    /// Presses registered at `position`.
    presses: u8,
}

impl StiffZone {
    /// Fresh register with no pending presses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The position currently being pressed against.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<u8> {
        self.position
    }

    /// Presses registered so far at the current position.
    #[inline]
    #[must_use]
    pub fn presses(&self) -> u8 {
        self.presses
    }

    /// Register a press toward `target_position`.
    ///
    /// Returns `true` when enough presses have accumulated and the move
    /// should be applied; the register clears itself on that press.
    /// A press at a different position restarts the count there.
    pub fn press(&mut self, target_position: u8) -> bool {
        if self.position != Some(target_position) {
            self.position = Some(target_position);
            self.presses = 1;
            return false;
        }

        self.presses += 1;
        if self.presses < STIFF_PRESSES_REQUIRED {
            return false;
        }

        self.clear();
        true
    }

    /// Drop any pending presses.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `position` lies inside the zone before `target`.
    ///
    /// The zone is the `width` positions strictly before the target in
    /// the counter-clockwise travel direction: distance
    /// `(position - target) mod DIAL_RANGE` in `1..=width`.
    #[must_use]
    pub fn contains(position: u8, target: u8, width: u8) -> bool {
        let distance = normalize(i32::from(position) - i32::from(target));
        (1..=width).contains(&distance)
    }
}

/// One-shot flags for assistive guidance, reset with the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistFlags {
    /// The session-start assist has been shown.
    pub intro_shown: bool,

    /// The third-step entry assist has been shown.
    pub third_step_shown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklock_core::constants::STIFF_ZONE_WIDTH;
    use rstest::rstest;

    #[test]
    fn test_step_ordering() {
        assert_eq!(DialStep::First.next(), DialStep::Second);
        assert_eq!(DialStep::Second.next(), DialStep::Third);
        assert_eq!(DialStep::Third.next(), DialStep::Complete);
        assert_eq!(DialStep::Complete.next(), DialStep::Complete);
    }

    #[test]
    fn test_step_indices() {
        assert_eq!(DialStep::First.index(), 0);
        assert_eq!(DialStep::Second.index(), 1);
        assert_eq!(DialStep::Third.index(), 2);
        assert_eq!(DialStep::Complete.index(), 3);
    }

    #[test]
    fn test_only_complete_stops_searching() {
        assert!(DialStep::First.is_searching());
        assert!(DialStep::Second.is_searching());
        assert!(DialStep::Third.is_searching());
        assert!(!DialStep::Complete.is_searching());
    }

    #[test]
    fn test_rotation_completes_at_full_revolution() {
        let mut tracker = RotationTracker::new();
        for _ in 0..39 {
            tracker.record_ccw_turn();
        }
        assert!(!tracker.is_complete());

        tracker.record_ccw_turn();
        assert!(tracker.is_complete());
        assert_eq!(tracker.ccw_turns(), 40);
    }

    #[test]
    fn test_rotation_reset() {
        let mut tracker = RotationTracker::new();
        for _ in 0..40 {
            tracker.record_ccw_turn();
        }
        tracker.reset();
        assert!(!tracker.is_complete());
        assert_eq!(tracker.ccw_turns(), 0);
    }

    #[test]
    fn test_stiff_zone_requires_three_presses() {
        let mut zone = StiffZone::new();
        assert!(!zone.press(7));
        assert!(!zone.press(7));
        assert!(zone.press(7));
        // The register clears itself on the releasing press.
        assert_eq!(zone.position(), None);
        assert_eq!(zone.presses(), 0);
    }

    #[test]
    fn test_stiff_zone_restarts_on_new_position() {
        let mut zone = StiffZone::new();
        assert!(!zone.press(7));
        assert!(!zone.press(7));
        // Moving to a different position restarts the count there.
        assert!(!zone.press(6));
        assert_eq!(zone.position(), Some(6));
        assert_eq!(zone.presses(), 1);
    }

    // Zone for target 1 is positions 2..=6; for target 38 it wraps
    // through zero: 39, 0, 1, 2, 3.
    #[rstest]
    #[case(2, 1, true)]
    #[case(6, 1, true)]
    #[case(1, 1, false)]
    #[case(7, 1, false)]
    #[case(0, 1, false)]
    #[case(39, 38, true)]
    #[case(0, 38, true)]
    #[case(3, 38, true)]
    #[case(4, 38, false)]
    #[case(37, 38, false)]
    fn test_stiff_zone_membership(#[case] position: u8, #[case] target: u8, #[case] inside: bool) {
        assert_eq!(
            StiffZone::contains(position, target, STIFF_ZONE_WIDTH),
            inside
        );
    }
}
