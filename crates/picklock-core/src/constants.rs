//! Core constants for the dial-lock puzzle simulation.
//!
//! This module centralizes the tunable physical-simulation parameters of
//! the rotary combination dial and the player-facing feedback strings.
//! The values model a standard 40-position combination padlock.
//!
//! # Dial Geometry
//!
//! The dial has [`DIAL_RANGE`] discrete positions. One turn moves the
//! dial by exactly one position and rotates the dial graphic by
//! [`DEGREES_PER_TICK`] degrees in the opposite direction of the
//! numbering (turning clockwise decreases the visual angle).
//!
//! # Picking Mechanics
//!
//! - The first digit announces itself with a click [`CLICK_OFFSET`]
//!   positions before the digit on a clockwise pass.
//! - The second digit sits behind a resistance region of
//!   [`STIFF_ZONE_WIDTH`] positions which only engages after one full
//!   counter-clockwise rotation; each position inside it must be pushed
//!   [`STIFF_PRESSES_REQUIRED`] times.
//! - The third digit is found by clockwise-only exploration.

use std::time::Duration;

// ============================================================================
// Dial Geometry
// ============================================================================

/// Number of discrete positions on the dial.
///
/// Positions are numbered `0..DIAL_RANGE`. All dial arithmetic is modulo
/// this value; see [`crate::types::normalize`].
///
/// # Value: 40 (standard combination padlock)
pub const DIAL_RANGE: u8 = 40;

/// Degrees of visual rotation per single-position turn.
///
/// Derived from a full circle over [`DIAL_RANGE`] positions: 360 / 40.
///
/// # Examples
///
/// ```
/// use picklock_core::constants::{DEGREES_PER_TICK, DIAL_RANGE};
///
/// assert_eq!(DEGREES_PER_TICK, 360.0 / DIAL_RANGE as f32);
/// ```
pub const DEGREES_PER_TICK: f32 = 360.0 / DIAL_RANGE as f32;

/// Number of digits in a dial combination.
///
/// The engine searches for exactly this many digits before a submission
/// is accepted for comparison.
///
/// # Value: 3
pub const COMBINATION_LENGTH: usize = 3;

// ============================================================================
// Picking Mechanics
// ============================================================================

/// Offset between the first digit's click position and the digit itself.
///
/// During the first step, the primary click fires at
/// `(target - CLICK_OFFSET) mod DIAL_RANGE` on clockwise landings; the
/// player adds this offset to recover the digit.
///
/// # Value: 5 positions
pub const CLICK_OFFSET: u8 = 5;

/// Width of the resistance region before the second digit.
///
/// Counter-clockwise travel through the `STIFF_ZONE_WIDTH` positions
/// strictly before the second target is slowed by the press mechanic.
///
/// # Value: 5 positions
pub const STIFF_ZONE_WIDTH: u8 = 5;

/// Presses required to advance one position inside the stiff zone.
///
/// A counter-clockwise turn into a new stiff-zone position is only
/// applied once the player has repeated it this many times at that exact
/// position. Leaving the zone clockwise resets the count.
///
/// # Value: 3 presses
pub const STIFF_PRESSES_REQUIRED: u8 = 3;

/// Counter-clockwise turns that make up one full unwinding rotation.
///
/// The stiff-zone mechanic of the second step stays dormant until the
/// player has accumulated this many counter-clockwise turns.
///
/// # Value: one full revolution ([`DIAL_RANGE`] turns)
pub const FULL_ROTATION_TURNS: u16 = DIAL_RANGE as u16;

// ============================================================================
// Feedback Timing
// ============================================================================

/// How long a non-assist feedback event stays visible (milliseconds).
///
/// Assist events are exempt: they persist until the player dismisses
/// them. See [`crate::types::FeedbackKind::auto_dismiss`].
///
/// # Value: 2500ms (2.5 seconds)
pub const FEEDBACK_DISMISS_MS: u64 = 2500;

/// [`FEEDBACK_DISMISS_MS`] as a [`Duration`].
pub const FEEDBACK_DISMISS: Duration = Duration::from_millis(FEEDBACK_DISMISS_MS);

// ============================================================================
// Player-Facing Messages
// ============================================================================

/// Assist shown when a dial session starts.
pub const MSG_ASSIST_FIRST: &str =
    "Listen for a click as you turn, then add 5. That's the first number.";

/// Assist shown after the first digit is confirmed.
pub const MSG_ASSIST_SECOND: &str =
    "Second number: turn counter-clockwise one full rotation, then feel for resistance.";

/// Assist shown on first entry to the third step.
pub const MSG_ASSIST_THIRD: &str =
    "Turn clockwise. When you hear a louder click, that's the number.";

/// Hint for a wrong-direction confirm on the first digit.
pub const MSG_HINT_FIRST_CONFIRM: &str = "Turn clockwise to find the first number.";

/// Hint for a wrong-direction confirm on the second digit.
pub const MSG_HINT_SECOND_CONFIRM: &str = "Turn counter-clockwise to confirm the second number.";

/// Hint for a rejected counter-clockwise turn in the third step.
pub const MSG_HINT_THIRD_TURN: &str = "Turn clockwise to find the third number.";

/// Hint for a wrong-direction confirm on the third digit.
pub const MSG_HINT_THIRD_CONFIRM: &str = "Turn clockwise to confirm the third number.";

/// Info shown when the first digit is confirmed on the click position.
pub const MSG_INFO_ADD_OFFSET: &str = "Add 5 to the click position. That's the first number.";

/// Info shown when the third digit is confirmed off-target.
pub const MSG_INFO_OTHER_CLICK: &str = "Listen for a different click.";

/// Info shown when submitting an incomplete attempt.
pub const MSG_INFO_INCOMPLETE: &str = "Enter all numbers first.";

/// Success message for a correct submission.
pub const MSG_SUCCESS_UNLOCKED: &str = "Unlocked!";

/// Error message for an incorrect submission.
pub const MSG_ERROR_INCORRECT: &str = "Incorrect combination.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_per_tick_divides_full_circle() {
        assert_eq!(DEGREES_PER_TICK * DIAL_RANGE as f32, 360.0);
    }

    #[test]
    fn test_stiff_zone_narrower_than_dial() {
        assert!((STIFF_ZONE_WIDTH as usize) < DIAL_RANGE as usize);
        assert!(STIFF_PRESSES_REQUIRED > 0);
    }

    #[test]
    fn test_full_rotation_matches_range() {
        assert_eq!(FULL_ROTATION_TURNS, DIAL_RANGE as u16);
    }

    #[test]
    fn test_dismiss_duration_matches_millis() {
        assert_eq!(FEEDBACK_DISMISS.as_millis() as u64, FEEDBACK_DISMISS_MS);
    }
}
