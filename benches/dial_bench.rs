//! Benchmarks for the dial engine turn and solve paths.

use criterion::{Criterion, criterion_group, criterion_main};
use picklock_core::{Combination, Direction};
use picklock_engine::DialLock;
use std::hint::black_box;

fn bench_turns(c: &mut Criterion) {
    let combo = Combination::new([3, 1, 4]).expect("valid combination");

    c.bench_function("turn_full_revolution_cw", |b| {
        b.iter(|| {
            let mut lock = DialLock::new(combo);
            for _ in 0..40 {
                black_box(lock.turn(Direction::Clockwise));
            }
            lock
        });
    });

    c.bench_function("turn_resistance_phase", |b| {
        b.iter(|| {
            let mut lock = DialLock::new(combo);
            lock.turn(Direction::Clockwise);
            lock.confirm();
            // Arm the resistance, then grind against the stiff zone.
            for _ in 0..40 {
                lock.turn(Direction::CounterClockwise);
            }
            for _ in 0..20 {
                black_box(lock.turn(Direction::CounterClockwise));
            }
            lock
        });
    });
}

fn bench_full_solve(c: &mut Criterion) {
    let combo = Combination::new([3, 1, 4]).expect("valid combination");

    c.bench_function("solve_guided_path", |b| {
        b.iter(|| {
            let mut lock = DialLock::new(combo);
            for _ in 0..43 {
                lock.turn(Direction::Clockwise);
            }
            lock.confirm();
            for _ in 0..40 {
                lock.turn(Direction::CounterClockwise);
            }
            for _ in 0..6 {
                lock.turn(Direction::CounterClockwise);
            }
            lock.confirm();
            for _ in 0..3 {
                lock.turn(Direction::Clockwise);
            }
            lock.confirm();
            black_box(lock.submit())
        });
    });
}

criterion_group!(benches, bench_turns, bench_full_solve);
criterion_main!(benches);
