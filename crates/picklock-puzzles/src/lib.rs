//! Puzzle catalog and session collaborators for the picklock engine.
//!
//! This crate covers everything around the dial engine: the puzzle
//! dataset model (with its embedded `solution_code` payloads), the
//! bundled demo catalog, the solve-reporting collaborators, and the
//! elapsed-time session clock.
//!
//! All traits use native `async fn` methods (Edition 2024 RPITIT),
//! eliminating the need for the `async_trait` macro.

#![allow(async_fn_in_trait)]

pub mod clock;
pub mod demo;
pub mod model;
pub mod report;

pub use clock::SessionClock;
pub use demo::{demo_catalog, demo_puzzle};
pub use model::{Puzzle, PuzzleKind};
pub use report::{LogReporter, MockReporter, SolveReport, SolveReporter};
