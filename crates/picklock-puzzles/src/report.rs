//! Solve reporting collaborators.
//!
//! After every complete submission the session controller forwards a
//! [`SolveReport`] to a [`SolveReporter`] for persistence and scoring.
//! The forwarding is fire-and-forget from the engine's point of view:
//! the local verdict is computed before reporting and never depends on
//! the reporter's outcome.
//!
//! # Object Safety and Dynamic Dispatch
//!
//! `SolveReporter` uses native `async fn` (Edition 2024 RPITIT) and is
//! therefore not object-safe; use generic type parameters rather than
//! `Box<dyn SolveReporter>`.

use chrono::{DateTime, Utc};
use picklock_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Record of one completed submission.
///
/// Reports are written for solved and failed attempts alike, so the
/// scoring side sees the full history, not just wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Session identifier, stable across attempts within one session.
    pub session_id: Uuid,

    /// Catalog id of the puzzle being played.
    pub puzzle_id: u32,

    /// The submitted digit sequence.
    pub attempt: Vec<u8>,

    /// Local verdict at submission time.
    pub solved: bool,

    /// Whole seconds spent in the session so far.
    pub elapsed_secs: u64,

    /// When the submission happened.
    pub recorded_at: DateTime<Utc>,
}

impl SolveReport {
    /// Create a report stamped with the current time.
    #[must_use]
    pub fn new(
        session_id: Uuid,
        puzzle_id: u32,
        attempt: Vec<u8>,
        solved: bool,
        elapsed_secs: u64,
    ) -> Self {
        Self {
            session_id,
            puzzle_id,
            attempt,
            solved,
            elapsed_secs,
            recorded_at: Utc::now(),
        }
    }
}

/// Sink for completed submissions.
pub trait SolveReporter {
    /// Forward a report to the scoring collaborator.
    ///
    /// # Errors
    /// Returns an error if the sink rejected or could not accept the
    /// report. Callers log and continue; gameplay never blocks on this.
    async fn report(&mut self, report: &SolveReport) -> Result<()>;
}

/// Reporter that writes submissions to the tracing log.
///
/// The default collaborator for local play, where there is no scoring
/// backend to talk to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    /// Create a log-backed reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SolveReporter for LogReporter {
    async fn report(&mut self, report: &SolveReport) -> Result<()> {
        info!(
            session = %report.session_id,
            puzzle = report.puzzle_id,
            solved = report.solved,
            elapsed_secs = report.elapsed_secs,
            "submission recorded"
        );
        Ok(())
    }
}

/// Recording reporter for tests.
///
/// Stores every report it receives and can be told to fail the next
/// call, for exercising the fire-and-forget contract.
///
/// # Examples
///
/// ```
/// use picklock_puzzles::{MockReporter, SolveReport, SolveReporter};
/// use uuid::Uuid;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> picklock_core::Result<()> {
/// let mut reporter = MockReporter::new();
/// let report = SolveReport::new(Uuid::new_v4(), 2, vec![3, 1, 4], true, 42);
/// reporter.report(&report).await?;
///
/// assert_eq!(reporter.received().len(), 1);
/// assert!(reporter.received()[0].solved);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockReporter {
    received: Vec<SolveReport>,
    fail_next: bool,
}

impl MockReporter {
    /// Create an empty recording reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `report` call fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Reports received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> &[SolveReport] {
        &self.received
    }
}

impl SolveReporter for MockReporter {
    async fn report(&mut self, report: &SolveReport) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(Error::ReportRejected("injected failure".to_string()));
        }
        self.received.push(report.clone());
        Ok(())
    }
}
