//! Property-based tests for the dial engine invariants.

use picklock_core::{Combination, Direction, normalize};
use picklock_engine::{DialLock, DialStep, StiffZone, SubmitOutcome};
use proptest::prelude::*;

/// Steer the dial onto `digit` and confirm it, obeying the current
/// step's direction rule. Works for any digit, correct or not.
fn steer_and_confirm(lock: &mut DialLock, digit: u8) {
    let direction = match lock.step() {
        DialStep::First | DialStep::Third => Direction::Clockwise,
        DialStep::Second => Direction::CounterClockwise,
        DialStep::Complete => return,
    };

    let span = i32::from(digit) - i32::from(lock.position());
    let mut distance = match direction {
        Direction::Clockwise => normalize(span),
        Direction::CounterClockwise => normalize(-span),
    } as usize;
    // Zero distance still needs a turn in the right direction for the
    // confirm gate; a full lap lands back on the digit.
    if distance == 0 {
        distance = 40;
    }
    for _ in 0..distance {
        lock.turn(direction);
    }
    assert_eq!(lock.position(), digit);
    assert!(lock.confirm().advanced);
}

fn digit() -> impl Strategy<Value = u8> {
    0u8..40
}

proptest! {
    #[test]
    fn normalize_stays_on_dial(n in any::<i32>()) {
        let wrapped = normalize(n);
        prop_assert!(wrapped < 40);
        prop_assert_eq!(normalize(i32::from(wrapped)), wrapped);
    }

    #[test]
    fn third_step_rejects_ccw_without_moving(
        combo in [digit(), digit(), digit()],
        walk in prop::collection::vec(any::<bool>(), 1..50),
    ) {
        let mut lock = DialLock::new(Combination::new(combo).unwrap());
        lock.turn(Direction::Clockwise);
        lock.confirm();
        lock.turn(Direction::CounterClockwise);
        lock.confirm();
        prop_assert_eq!(lock.step(), DialStep::Third);

        for clockwise in walk {
            let before = lock.position();
            if clockwise {
                let outcome = lock.turn(Direction::Clockwise);
                prop_assert!(outcome.moved);
                prop_assert!(outcome.cue.is_some());
            } else {
                let outcome = lock.turn(Direction::CounterClockwise);
                prop_assert!(!outcome.moved);
                prop_assert!(outcome.message.is_some());
                prop_assert_eq!(lock.position(), before);
            }
        }
    }

    #[test]
    fn resistance_never_lands_one_past_the_target(
        combo in [digit(), digit(), digit()],
        presses in 41usize..300,
    ) {
        let mut lock = DialLock::new(Combination::new(combo).unwrap());
        lock.turn(Direction::Clockwise);
        lock.confirm();
        prop_assert_eq!(lock.step(), DialStep::Second);

        let forbidden = normalize(i32::from(combo[1]) - 1);
        for _ in 0..presses {
            lock.turn(Direction::CounterClockwise);
            // The guard only exists once the full rotation is done, but
            // during free movement the landing is transient; assert the
            // strong form after the mechanic engages.
        }
        // 40 of the presses completed the rotation; everything after
        // ran under the resistance rules.
        prop_assert_ne!(lock.position(), forbidden);
    }

    #[test]
    fn submission_is_exact_match(
        combo in [digit(), digit(), digit()],
        attempt in [digit(), digit(), digit()],
    ) {
        let mut lock = DialLock::new(Combination::new(combo).unwrap());
        for d in attempt {
            steer_and_confirm(&mut lock, d);
        }
        prop_assert_eq!(lock.attempt(), &attempt[..]);

        let verdict = lock.submit();
        if attempt == combo {
            prop_assert_eq!(verdict, SubmitOutcome::Solved);
        } else {
            prop_assert_eq!(verdict, SubmitOutcome::Incorrect);
        }
    }

    #[test]
    fn stiff_zone_membership_is_a_five_position_band(
        target in digit(),
    ) {
        let mut members = 0;
        for position in 0u8..40 {
            if StiffZone::contains(position, target, 5) {
                members += 1;
                // Members sit 1..=5 ahead of the target.
                let distance = normalize(i32::from(position) - i32::from(target));
                prop_assert!((1..=5).contains(&distance));
            }
        }
        prop_assert_eq!(members, 5);
    }

    #[test]
    fn reset_always_restores_the_initial_snapshot(
        combo in [digit(), digit(), digit()],
        turns in prop::collection::vec(any::<bool>(), 0..120),
        confirms in 0usize..4,
    ) {
        let mut lock = DialLock::new(Combination::new(combo).unwrap());
        let initial = lock.snapshot();

        for clockwise in turns {
            let direction = if clockwise {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            lock.turn(direction);
        }
        for _ in 0..confirms {
            lock.confirm();
        }

        lock.reset();
        prop_assert_eq!(lock.snapshot(), initial);
    }
}
