use crate::{
    Result,
    constants::{COMBINATION_LENGTH, DIAL_RANGE, FEEDBACK_DISMISS},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Wrap an arbitrary integer onto the dial.
///
/// The result is always in `[0, DIAL_RANGE)`, for negative inputs too,
/// and the function is idempotent over its own output.
///
/// # Examples
///
/// ```
/// use picklock_core::normalize;
///
/// assert_eq!(normalize(0), 0);
/// assert_eq!(normalize(40), 0);
/// assert_eq!(normalize(-2), 38);
/// assert_eq!(normalize(normalize(-2) as i32), 38);
/// ```
#[inline]
#[must_use]
pub fn normalize(value: i32) -> u8 {
    let range = i32::from(DIAL_RANGE);
    (((value % range) + range) % range) as u8
}

/// Turn direction of the dial.
///
/// Clockwise turns increase the dial reading; counter-clockwise turns
/// decrease it. The raw wire encoding is `+1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Create a direction from its raw `+1` / `-1` encoding.
    ///
    /// Any other code is a collaborator bug, not player input, and is
    /// rejected without touching engine state.
    ///
    /// # Errors
    /// Returns `Error::InvalidDirection` if the code is not `+1` or `-1`.
    #[inline]
    pub fn from_i8(code: i8) -> Result<Self> {
        match code {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            _ => Err(Error::InvalidDirection { code }),
        }
    }

    /// Raw `+1` / `-1` encoding of this direction.
    #[inline]
    #[must_use]
    pub fn to_i8(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Returns `true` for clockwise.
    #[inline]
    #[must_use]
    pub fn is_clockwise(self) -> bool {
        matches!(self, Direction::Clockwise)
    }

    /// The opposite direction.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

/// A three-digit dial combination.
///
/// Every digit is guaranteed to be in `[0, DIAL_RANGE)`. External
/// puzzle data is sanitized through [`Combination::from_raw`]: malformed
/// or out-of-range entries are coerced to `0` rather than faulting, per
/// the contract with the puzzle-retrieval collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination([u8; COMBINATION_LENGTH]);

impl Combination {
    /// Create a combination from exact digits, validating range.
    ///
    /// # Errors
    /// Returns `Error::InvalidDigit` if any digit is outside
    /// `[0, DIAL_RANGE)`.
    pub fn new(digits: [u8; COMBINATION_LENGTH]) -> Result<Self> {
        for &digit in &digits {
            if digit >= DIAL_RANGE {
                return Err(Error::InvalidDigit {
                    value: i64::from(digit),
                    max: DIAL_RANGE - 1,
                });
            }
        }
        Ok(Combination(digits))
    }

    /// Create a combination from untrusted numeric data.
    ///
    /// Out-of-range and missing entries are coerced to `0`; extra
    /// entries are ignored. This never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use picklock_core::Combination;
    ///
    /// let combo = Combination::from_raw(&[3, 1, 4]);
    /// assert_eq!(combo.digits(), [3, 1, 4]);
    ///
    /// // Out-of-range and short inputs fall back to 0
    /// assert_eq!(Combination::from_raw(&[99, -7]).digits(), [0, 0, 0]);
    /// ```
    #[must_use]
    pub fn from_raw(values: &[i64]) -> Self {
        let mut digits = [0u8; COMBINATION_LENGTH];
        for (slot, value) in digits.iter_mut().zip(values.iter()) {
            if (0..i64::from(DIAL_RANGE)).contains(value) {
                *slot = *value as u8;
            }
        }
        Combination(digits)
    }

    /// The digits in order.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> [u8; COMBINATION_LENGTH] {
        self.0
    }

    /// The target digit for a given step index.
    ///
    /// Returns `None` once all steps are complete.
    #[inline]
    #[must_use]
    pub fn digit(&self, step: usize) -> Option<u8> {
        self.0.get(step).copied()
    }

    /// Number of digits in the combination.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        COMBINATION_LENGTH
    }

    /// Always `false`; combinations have a fixed length.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Compare an attempt element-wise against this combination.
    ///
    /// Exact-match policy: the attempt must have the full length and
    /// every digit must be equal.
    #[must_use]
    pub fn matches(&self, attempt: &[u8]) -> bool {
        attempt.len() == self.0.len() && attempt == self.0
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Discrete audio cue identifiers exposed to the audio collaborator.
///
/// The engine never plays sound; it reports which cue a state change
/// produced and the presentation layer maps it to playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// The primary click: a landmark or digit-correct position.
    PrimaryClick,
    /// The quieter sub-click heard on non-target positions.
    SecondaryClick,
    /// The shackle opening after a correct submission.
    LockOpen,
}

impl Cue {
    /// Stable asset name for this cue.
    ///
    /// These match the sound files shipped with the game front-end.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Cue::PrimaryClick => "click.wav",
            Cue::SecondaryClick => "subclick.wav",
            Cue::LockOpen => "lockopen.wav",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cue::PrimaryClick => write!(f, "click"),
            Cue::SecondaryClick => write!(f, "sub-click"),
            Cue::LockOpen => write!(f, "lock-open"),
        }
    }
}

/// Category of a feedback event.
///
/// The category decides presentation and lifetime: `Assist` events stay
/// until dismissed, everything else auto-expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Info,
    Hint,
    Assist,
    Success,
    Error,
}

impl FeedbackKind {
    /// How long an event of this kind stays visible on its own.
    ///
    /// Returns `None` for [`FeedbackKind::Assist`]: assist guidance
    /// persists until the player dismisses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use picklock_core::FeedbackKind;
    ///
    /// assert!(FeedbackKind::Assist.auto_dismiss().is_none());
    /// assert!(FeedbackKind::Hint.auto_dismiss().is_some());
    /// ```
    #[must_use]
    pub fn auto_dismiss(self) -> Option<Duration> {
        match self {
            FeedbackKind::Assist => None,
            _ => Some(FEEDBACK_DISMISS),
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self {
            FeedbackKind::Info => "info",
            FeedbackKind::Hint => "hint",
            FeedbackKind::Assist => "assist",
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        };
        write!(f, "{kind}")
    }
}

/// A message for the player, produced by the engine and consumed by the
/// presentation layer.
///
/// Events are ephemeral: the engine emits them from `turn`, `confirm`,
/// and `submit` outcomes and keeps no record of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// Player-facing text.
    pub text: String,

    /// Presentation category.
    pub kind: FeedbackKind,
}

impl FeedbackEvent {
    /// Create an event with an explicit kind.
    pub fn new(text: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Informational event.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Info)
    }

    /// Hint for a recoverable rule violation.
    pub fn hint(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Hint)
    }

    /// Persistent assistive guidance.
    pub fn assist(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Assist)
    }

    /// Successful unlock.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Success)
    }

    /// Failed submission.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Error)
    }
}

impl fmt::Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}
