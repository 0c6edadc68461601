//! The dial puzzle session: step state machine and attempt controller.
//!
//! [`DialLock`] reproduces the step-by-step technique for picking a
//! rotary combination lock:
//!
//! 1. **First digit**: turn clockwise and listen for the click fired
//!    five positions before the digit, then add five.
//! 2. **Second digit**: unwind one full counter-clockwise rotation, then
//!    push through the stiff zone guarding the digit.
//! 3. **Third digit**: clockwise-only exploration; the target answers
//!    with the primary click, everything else with the quieter sub-click.
//!
//! Confirmation is direction-locked per step, but the engine never
//! blocks an incorrect digit: correctness is judged only at submission.
//! No operation here returns an error. Rule violations become
//! [`FeedbackEvent`]s and invalid collaborator input is normalized
//! before it reaches this type.
//!
//! # Examples
//!
//! ```
//! use picklock_core::{Combination, Cue, Direction};
//! use picklock_engine::DialLock;
//!
//! let combo = Combination::new([3, 1, 4]).unwrap();
//! let mut lock = DialLock::new(combo);
//!
//! // The click fires five positions before the first digit.
//! let mut last_cue = None;
//! for _ in 0..38 {
//!     last_cue = lock.turn(Direction::Clockwise).cue;
//! }
//! assert_eq!(lock.position(), 38);
//! assert_eq!(last_cue, Some(Cue::PrimaryClick));
//! ```

use crate::steps::{AssistFlags, DialStep, RotationTracker, StiffZone};
use crate::transport::DialTransport;
use picklock_core::{
    Combination, Cue, Direction, FeedbackEvent, normalize,
    constants::{
        CLICK_OFFSET, MSG_ASSIST_FIRST, MSG_ASSIST_SECOND, MSG_ASSIST_THIRD, MSG_ERROR_INCORRECT,
        MSG_HINT_FIRST_CONFIRM, MSG_HINT_SECOND_CONFIRM, MSG_HINT_THIRD_CONFIRM,
        MSG_HINT_THIRD_TURN, MSG_INFO_ADD_OFFSET, MSG_INFO_INCOMPLETE, MSG_INFO_OTHER_CLICK,
        MSG_SUCCESS_UNLOCKED, STIFF_ZONE_WIDTH,
    },
};
use serde::{Deserialize, Serialize};

/// Result of a single turn request.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Whether the dial actually moved.
    pub moved: bool,

    /// Audio cue produced by the landing position, if any.
    pub cue: Option<Cue>,

    /// Feedback for a rejected or noteworthy turn, if any.
    pub message: Option<FeedbackEvent>,
}

impl TurnOutcome {
    fn moved(cue: Option<Cue>) -> Self {
        Self {
            moved: true,
            cue,
            message: None,
        }
    }

    fn held() -> Self {
        Self {
            moved: false,
            cue: None,
            message: None,
        }
    }

    fn rejected(message: FeedbackEvent) -> Self {
        Self {
            moved: false,
            cue: None,
            message: Some(message),
        }
    }
}

/// Result of a confirm request.
///
/// `cues` and `messages` are ordered; when several messages are present
/// the presentation layer shows them in sequence, each replacing the
/// previous (in practice the last one wins the overlay slot).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmOutcome {
    /// Whether a digit was recorded and the step advanced.
    pub advanced: bool,

    /// Audio cues, in firing order.
    pub cues: Vec<Cue>,

    /// Feedback events, in emission order.
    pub messages: Vec<FeedbackEvent>,
}

impl ConfirmOutcome {
    fn noop() -> Self {
        Self::default()
    }

    fn rejected(message: FeedbackEvent) -> Self {
        Self {
            advanced: false,
            cues: Vec::new(),
            messages: vec![message],
        }
    }
}

/// Verdict of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Not all digits are confirmed yet; no comparison was made.
    Incomplete,
    /// The attempt matches the combination exactly.
    Solved,
    /// The attempt is complete but wrong. The session is left intact
    /// for an explicit reset.
    Incorrect,
}

impl SubmitOutcome {
    /// Whether the lock opened.
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        matches!(self, SubmitOutcome::Solved)
    }

    /// `Some(verdict)` if a comparison happened, `None` if the attempt
    /// was incomplete.
    #[inline]
    #[must_use]
    pub fn judged(self) -> Option<bool> {
        match self {
            SubmitOutcome::Incomplete => None,
            SubmitOutcome::Solved => Some(true),
            SubmitOutcome::Incorrect => Some(false),
        }
    }

    /// The feedback event for this verdict.
    #[must_use]
    pub fn message(self) -> FeedbackEvent {
        match self {
            SubmitOutcome::Incomplete => FeedbackEvent::info(MSG_INFO_INCOMPLETE),
            SubmitOutcome::Solved => FeedbackEvent::success(MSG_SUCCESS_UNLOCKED),
            SubmitOutcome::Incorrect => FeedbackEvent::error(MSG_ERROR_INCORRECT),
        }
    }

    /// The audio cue for this verdict, if any.
    #[must_use]
    pub fn cue(self) -> Option<Cue> {
        match self {
            SubmitOutcome::Solved => Some(Cue::LockOpen),
            _ => None,
        }
    }
}

/// Serializable view of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialSnapshot {
    /// Current dial reading.
    pub position: u8,

    /// Accumulated visual rotation in degrees.
    pub angle: f32,

    /// Zero-based step index (3 = all digits confirmed).
    pub step: usize,

    /// Digits confirmed so far.
    pub attempt: Vec<u8>,

    /// Direction of the most recent turn request.
    pub last_direction: Option<Direction>,
}

/// A rotary combination-dial puzzle session.
///
/// One instance per active puzzle. All operations run synchronously to
/// completion; there is no shared state between sessions.
///
/// # Examples
///
/// ```
/// use picklock_core::{Combination, Direction};
/// use picklock_engine::{DialLock, SubmitOutcome};
///
/// let mut lock = DialLock::new(Combination::new([1, 0, 2]).unwrap());
///
/// // Submitting before all digits are confirmed is refused.
/// assert_eq!(lock.submit(), SubmitOutcome::Incomplete);
/// ```
#[derive(Debug, Clone)]
pub struct DialLock {
    /// The hidden target sequence.
    combination: Combination,

    /// Raw dial position and rotation.
    transport: DialTransport,

    /// Which digit is being searched for.
    step: DialStep,

    /// Digits confirmed so far; length equals the step index.
    attempt: Vec<u8>,

    /// Full-rotation tracker for the second step.
    rotation: RotationTracker,

    /// Stiff-zone press register for the second step.
    stiff: StiffZone,

    /// One-shot assist flags.
    assist: AssistFlags,
}

impl DialLock {
    /// Create a fresh session for the given combination.
    #[must_use]
    pub fn new(combination: Combination) -> Self {
        Self {
            combination,
            transport: DialTransport::new(),
            step: DialStep::First,
            attempt: Vec::with_capacity(combination.len()),
            rotation: RotationTracker::new(),
            stiff: StiffZone::new(),
            assist: AssistFlags::default(),
        }
    }

    /// Current dial reading.
    #[inline]
    #[must_use]
    pub fn position(&self) -> u8 {
        self.transport.position()
    }

    /// Accumulated visual rotation in degrees.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.transport.angle()
    }

    /// Which digit is being searched for.
    #[inline]
    #[must_use]
    pub fn step(&self) -> DialStep {
        self.step
    }

    /// Digits confirmed so far.
    #[inline]
    #[must_use]
    pub fn attempt(&self) -> &[u8] {
        &self.attempt
    }

    /// Direction of the most recent turn request.
    #[inline]
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.transport.last_direction()
    }

    /// The target combination this session was created with.
    #[inline]
    #[must_use]
    pub fn combination(&self) -> Combination {
        self.combination
    }

    /// Serializable view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> DialSnapshot {
        DialSnapshot {
            position: self.position(),
            angle: self.angle(),
            step: self.step.index(),
            attempt: self.attempt.clone(),
            last_direction: self.last_direction(),
        }
    }

    /// The session-start assist, shown exactly once per session.
    ///
    /// The presentation layer calls this when the puzzle becomes
    /// visible. [`DialLock::reset`] re-arms it.
    pub fn intro_assist(&mut self) -> Option<FeedbackEvent> {
        if self.assist.intro_shown {
            return None;
        }
        self.assist.intro_shown = true;
        Some(FeedbackEvent::assist(MSG_ASSIST_FIRST))
    }

    /// Turn the dial one position.
    ///
    /// The request direction is recorded even when the current step
    /// rejects the move, so confirm gates see what the player tried.
    pub fn turn(&mut self, direction: Direction) -> TurnOutcome {
        self.transport.record_direction(direction);
        let landing = self.transport.peek(direction);

        match self.step {
            DialStep::First => self.turn_first(direction, landing),
            DialStep::Second => self.turn_second(direction, landing),
            DialStep::Third => self.turn_third(direction, landing),
            // All digits confirmed: the dial still spins freely but has
            // no effect on puzzle state beyond wrapping.
            DialStep::Complete => {
                self.transport.apply_turn(direction);
                TurnOutcome::moved(None)
            }
        }
    }

    /// First step: free movement, click on clockwise landings at the
    /// click position.
    fn turn_first(&mut self, direction: Direction, landing: u8) -> TurnOutcome {
        let click_pos = self.first_click_position();
        let cue = (direction.is_clockwise() && landing == click_pos).then_some(Cue::PrimaryClick);
        self.transport.apply_turn(direction);
        TurnOutcome::moved(cue)
    }

    /// Second step: free until the full counter-clockwise rotation is
    /// done, then resistance on the approach to the target.
    fn turn_second(&mut self, direction: Direction, landing: u8) -> TurnOutcome {
        if !self.rotation.is_complete() {
            if !direction.is_clockwise() {
                self.rotation.record_ccw_turn();
            }
            self.transport.apply_turn(direction);
            return TurnOutcome::moved(None);
        }

        // Clockwise is always legal but leaving the approach resets any
        // stiff-zone progress.
        if direction.is_clockwise() {
            self.stiff.clear();
            self.transport.apply_turn(direction);
            return TurnOutcome::moved(None);
        }

        let target = self.combination.digits()[DialStep::Second.index()];
        if StiffZone::contains(landing, target, STIFF_ZONE_WIDTH)
            && !self.stiff.press(landing)
        {
            return TurnOutcome::held();
        }

        // Overshoot guard: the dial never lands one past the target.
        if landing == normalize(i32::from(target) - 1) {
            return TurnOutcome::held();
        }

        self.transport.apply_turn(direction);
        TurnOutcome::moved(None)
    }

    /// Third step: clockwise only; every landing answers with a cue.
    fn turn_third(&mut self, direction: Direction, landing: u8) -> TurnOutcome {
        if !direction.is_clockwise() {
            return TurnOutcome::rejected(FeedbackEvent::hint(MSG_HINT_THIRD_TURN));
        }

        self.transport.apply_turn(direction);
        let target = self.combination.digits()[DialStep::Third.index()];
        let cue = if landing == target {
            Cue::PrimaryClick
        } else {
            Cue::SecondaryClick
        };
        TurnOutcome::moved(Some(cue))
    }

    /// Confirm the current position as the digit for the current step.
    ///
    /// Requires the last turn to match the step's direction; otherwise a
    /// hint is emitted and nothing advances. On a legal confirm the
    /// position is recorded and the step advances whether or not the
    /// digit is correct.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if !self.step.is_searching() {
            return ConfirmOutcome::noop();
        }

        let current = self.position();
        let direction = self.last_direction();

        let mut outcome = match self.step {
            DialStep::First => {
                if direction != Some(Direction::Clockwise) {
                    return ConfirmOutcome::rejected(FeedbackEvent::hint(MSG_HINT_FIRST_CONFIRM));
                }
                self.confirm_first(current)
            }
            DialStep::Second => {
                if direction != Some(Direction::CounterClockwise) {
                    return ConfirmOutcome::rejected(FeedbackEvent::hint(MSG_HINT_SECOND_CONFIRM));
                }
                self.confirm_second(current)
            }
            DialStep::Third => {
                if direction != Some(Direction::Clockwise) {
                    return ConfirmOutcome::rejected(FeedbackEvent::hint(MSG_HINT_THIRD_CONFIRM));
                }
                self.confirm_third(current)
            }
            DialStep::Complete => return ConfirmOutcome::noop(),
        };

        outcome.advanced = true;
        self.attempt.push(current);
        self.step = self.step.next();
        outcome
    }

    fn confirm_first(&mut self, current: u8) -> ConfirmOutcome {
        let mut outcome = ConfirmOutcome::noop();
        let click_pos = self.first_click_position();
        let correct = normalize(i32::from(click_pos) + i32::from(CLICK_OFFSET));

        if current == click_pos {
            outcome.cues.push(Cue::SecondaryClick);
            outcome
                .messages
                .push(FeedbackEvent::info(MSG_INFO_ADD_OFFSET));
        }
        if current == correct {
            outcome.cues.push(Cue::PrimaryClick);
        }

        // Entering the second step: the rotation requirement starts over.
        self.rotation.reset();
        outcome
            .messages
            .push(FeedbackEvent::assist(MSG_ASSIST_SECOND));
        outcome
    }

    fn confirm_second(&mut self, current: u8) -> ConfirmOutcome {
        let mut outcome = ConfirmOutcome::noop();
        if current == self.combination.digits()[DialStep::Second.index()] {
            outcome.cues.push(Cue::PrimaryClick);
        }

        self.stiff.clear();

        if !self.assist.third_step_shown {
            self.assist.third_step_shown = true;
            outcome
                .messages
                .push(FeedbackEvent::assist(MSG_ASSIST_THIRD));
        }
        outcome
    }

    fn confirm_third(&mut self, current: u8) -> ConfirmOutcome {
        let mut outcome = ConfirmOutcome::noop();
        if current == self.combination.digits()[DialStep::Third.index()] {
            outcome.cues.push(Cue::PrimaryClick);
        } else {
            outcome
                .messages
                .push(FeedbackEvent::info(MSG_INFO_OTHER_CLICK));
        }
        outcome
    }

    /// Compare the attempt against the combination.
    ///
    /// Refused with an info event while digits are missing. A failed
    /// comparison does not reset the session; the player decides.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.attempt.len() != self.combination.len() {
            return SubmitOutcome::Incomplete;
        }
        if self.combination.matches(&self.attempt) {
            SubmitOutcome::Solved
        } else {
            SubmitOutcome::Incorrect
        }
    }

    /// Reinitialize every field to construction defaults.
    pub fn reset(&mut self) {
        self.transport.reset();
        self.step = DialStep::First;
        self.attempt.clear();
        self.rotation.reset();
        self.stiff.clear();
        self.assist = AssistFlags::default();
    }

    /// Where the first step's click fires.
    fn first_click_position(&self) -> u8 {
        let target = self.combination.digits()[DialStep::First.index()];
        normalize(i32::from(target) - i32::from(CLICK_OFFSET))
    }
}
