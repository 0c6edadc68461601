//! Puzzle dataset model.
//!
//! Puzzles arrive from an external catalog (a remote API or a bundled
//! demo set) in a common shape: metadata plus a `solution_code` field
//! holding the solution as a JSON-encoded array *string*. The string
//! form is the dataset's wire format; it is parsed on demand and
//! sanitized through [`picklock_core::Combination::from_raw`], so a
//! malformed entry degrades to digit 0 instead of faulting mid-game.

use picklock_core::{Combination, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a puzzle in the catalog.
///
/// The dial engine only consumes [`PuzzleKind::Dial`] puzzles. The
/// pin-tumbler kind exists as dataset vocabulary; its mechanics live in
/// a separate component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    #[serde(rename = "dial")]
    Dial,
    #[serde(rename = "pin-tumbler")]
    PinTumbler,
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleKind::Dial => write!(f, "dial"),
            PuzzleKind::PinTumbler => write!(f, "pin-tumbler"),
        }
    }
}

/// A catalog puzzle entry.
///
/// # Fields
///
/// * `id` - Catalog identifier
/// * `name` - Display name
/// * `prompt` - Player-facing flavor text
/// * `kind` - Which lock simulation this puzzle drives
/// * `solution_code` - Hidden solution as a JSON-encoded array string
///
/// # Examples
///
/// ```
/// use picklock_puzzles::{Puzzle, PuzzleKind};
///
/// let puzzle = Puzzle::new(
///     2,
///     "Dial Lock (Demo)",
///     "Find each number of the 3 number combination.",
///     PuzzleKind::Dial,
///     "[3, 1, 4]",
/// );
///
/// let combo = puzzle.combination().unwrap();
/// assert_eq!(combo.digits(), [3, 1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Catalog identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Player-facing flavor text.
    pub prompt: String,

    /// Which lock simulation this puzzle drives.
    #[serde(rename = "type")]
    pub kind: PuzzleKind,

    /// Solution as a JSON-encoded array string, the catalog wire shape.
    pub solution_code: String,
}

impl Puzzle {
    /// Create a puzzle entry.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        prompt: impl Into<String>,
        kind: PuzzleKind,
        solution_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            prompt: prompt.into(),
            kind,
            solution_code: solution_code.into(),
        }
    }

    /// Parse the raw solution values out of `solution_code`.
    ///
    /// # Errors
    /// Returns `Error::InvalidSolutionCode` if the payload is not a
    /// JSON array of numbers.
    pub fn solution(&self) -> Result<Vec<i64>> {
        serde_json::from_str(&self.solution_code)
            .map_err(|e| Error::InvalidSolutionCode(e.to_string()))
    }

    /// The dial combination for this puzzle.
    ///
    /// Out-of-range solution entries are coerced to 0, matching the
    /// transport's sanitization contract.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedPuzzle` for non-dial puzzles and
    /// `Error::InvalidSolutionCode` for malformed payloads.
    pub fn combination(&self) -> Result<Combination> {
        if self.kind != PuzzleKind::Dial {
            return Err(Error::UnsupportedPuzzle {
                kind: self.kind.to_string(),
            });
        }
        Ok(Combination::from_raw(&self.solution()?))
    }
}
