//! Core constants, error taxonomy, and shared types for the picklock
//! puzzle engine.
//!
//! This crate defines the vocabulary shared by the dial engine, the
//! puzzle catalog, and the front-ends: dial geometry constants, turn
//! directions, combinations, audio cue identifiers, and feedback events.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
