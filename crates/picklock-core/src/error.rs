use thiserror::Error;

/// Error taxonomy for the picklock workspace.
///
/// These errors cover collaborator and programming faults only. Player
/// rule violations (wrong-direction turns, premature submits) are never
/// errors: the engine resolves them into feedback events locally.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid turn direction code: {code} (expected +1 or -1)")]
    InvalidDirection { code: i8 },

    #[error("Invalid dial digit: {value} (expected 0-{max})")]
    InvalidDigit { value: i64, max: u8 },

    // Puzzle catalog errors
    #[error("Puzzle not found: {id}")]
    PuzzleNotFound { id: u32 },

    #[error("Invalid solution code: {0}")]
    InvalidSolutionCode(String),

    #[error("Puzzle kind {kind} has no dial combination")]
    UnsupportedPuzzle { kind: String },

    // Reporting errors
    #[error("Solve report rejected: {0}")]
    ReportRejected(String),

    #[error("Reporting channel closed")]
    ReporterDisconnected,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
