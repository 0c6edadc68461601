//! Bundled demo puzzles.
//!
//! These back deep links and offline play. The solutions ship with the
//! binary in demo mode; anything that must stay hidden needs the real
//! catalog with server-side validation instead.

use crate::model::{Puzzle, PuzzleKind};

/// The demo catalog, in dataset order.
#[must_use]
pub fn demo_catalog() -> Vec<Puzzle> {
    vec![
        Puzzle::new(
            1,
            "Pin Tumbler Lock (Demo)",
            "Align all 5 pins to the correct height to unlock the cabinet and get the treat.",
            PuzzleKind::PinTumbler,
            "[40,30,50,20,60]",
        ),
        Puzzle::new(
            2,
            "Dial Lock (Demo)",
            "Follow the tips to find each number of the 3 number combination to unlock the treat.",
            PuzzleKind::Dial,
            "[3,1,4]",
        ),
    ]
}

/// Pick a demo puzzle.
///
/// A specific id wins if it exists; otherwise the first puzzle of the
/// requested kind; otherwise the first catalog entry.
#[must_use]
pub fn demo_puzzle(id: Option<u32>, kind: Option<PuzzleKind>) -> Option<Puzzle> {
    let catalog = demo_catalog();

    if let Some(id) = id
        && let Some(puzzle) = catalog.iter().find(|p| p.id == id)
    {
        return Some(puzzle.clone());
    }
    if let Some(kind) = kind {
        return catalog.iter().find(|p| p.kind == kind).cloned();
    }
    catalog.into_iter().next()
}
