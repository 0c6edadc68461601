//! Picklock engine crate providing the rotary combination-dial puzzle
//! simulation.
//!
//! This crate contains the dial transport, the per-digit step state
//! machine, the attempt/session controller, and the feedback panel the
//! presentation layer uses to manage message lifetimes.

pub mod overlay;
pub mod session;
pub mod steps;
pub mod transport;

pub use overlay::FeedbackPanel;
pub use session::{ConfirmOutcome, DialLock, DialSnapshot, SubmitOutcome, TurnOutcome};
pub use steps::{DialStep, RotationTracker, StiffZone};
pub use transport::DialTransport;
