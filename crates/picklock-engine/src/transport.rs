//! Raw dial movement: position, accumulated angle, last direction.
//!
//! The transport owns the physical reading of the dial and nothing else.
//! It applies bounded wraparound moves and tracks the signed rotation
//! angle for continuous dial graphics; the step rules that decide
//! whether a move is allowed live in [`crate::session`].

use picklock_core::{Direction, constants::DEGREES_PER_TICK, normalize};
use serde::{Deserialize, Serialize};

/// Position and rotation state of the dial.
///
/// `angle` accumulates without wrapping so a dial graphic can rotate
/// continuously across multiple revolutions: forty clockwise turns read
/// as position 0 again but -360 degrees of angle.
///
/// # Examples
///
/// ```
/// use picklock_core::Direction;
/// use picklock_engine::DialTransport;
///
/// let mut dial = DialTransport::new();
/// dial.record_direction(Direction::Clockwise);
/// dial.apply_turn(Direction::Clockwise);
///
/// assert_eq!(dial.position(), 1);
/// assert_eq!(dial.angle(), -9.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialTransport {
    /// Current dial reading in `[0, DIAL_RANGE)`.
    position: u8,

    /// Accumulated signed rotation in degrees. Never wrapped.
    angle: f32,

    /// Direction of the most recent turn request, applied or not.
    last_direction: Option<Direction>,
}

impl DialTransport {
    /// Create a transport at position 0 with no rotation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: 0,
            angle: 0.0,
            last_direction: None,
        }
    }

    /// Current dial reading.
    #[inline]
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Accumulated visual rotation in degrees.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Direction of the most recent turn request.
    ///
    /// This is recorded before the step rules run, so a rejected move
    /// still updates it. Confirm gates read this value.
    #[inline]
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// The position one turn away in the given direction, without moving.
    #[inline]
    #[must_use]
    pub fn peek(&self, direction: Direction) -> u8 {
        normalize(i32::from(self.position) + i32::from(direction.to_i8()))
    }

    /// Record the direction of a turn request.
    ///
    /// Called for every request, including ones the step rules reject.
    pub fn record_direction(&mut self, direction: Direction) {
        self.last_direction = Some(direction);
    }

    /// Apply a one-position turn unconditionally.
    ///
    /// Moves the reading and accumulates the visual angle. The angle
    /// moves opposite to the numbering: clockwise turns decrease it.
    pub fn apply_turn(&mut self, direction: Direction) {
        self.position = self.peek(direction);
        self.angle -= f32::from(direction.to_i8()) * DEGREES_PER_TICK;
    }

    /// Reinitialize to construction defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DialTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transport_is_zeroed() {
        let dial = DialTransport::new();
        assert_eq!(dial.position(), 0);
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.last_direction(), None);
    }

    #[test]
    fn test_clockwise_turn_increments_and_unwinds_angle() {
        let mut dial = DialTransport::new();
        dial.apply_turn(Direction::Clockwise);
        assert_eq!(dial.position(), 1);
        assert_eq!(dial.angle(), -9.0);
    }

    #[test]
    fn test_counter_clockwise_turn_wraps_below_zero() {
        let mut dial = DialTransport::new();
        dial.apply_turn(Direction::CounterClockwise);
        assert_eq!(dial.position(), 39);
        assert_eq!(dial.angle(), 9.0);
    }

    #[test]
    fn test_angle_accumulates_across_full_revolution() {
        let mut dial = DialTransport::new();
        for _ in 0..40 {
            dial.apply_turn(Direction::Clockwise);
        }
        // Position wrapped back, angle did not.
        assert_eq!(dial.position(), 0);
        assert_eq!(dial.angle(), -360.0);
    }

    #[test]
    fn test_peek_does_not_move() {
        let dial = DialTransport::new();
        assert_eq!(dial.peek(Direction::Clockwise), 1);
        assert_eq!(dial.peek(Direction::CounterClockwise), 39);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_record_direction_without_movement() {
        let mut dial = DialTransport::new();
        dial.record_direction(Direction::CounterClockwise);
        assert_eq!(dial.last_direction(), Some(Direction::CounterClockwise));
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut dial = DialTransport::new();
        dial.record_direction(Direction::Clockwise);
        dial.apply_turn(Direction::Clockwise);
        dial.apply_turn(Direction::Clockwise);

        dial.reset();

        assert_eq!(dial, DialTransport::new());
    }
}
