//! State primitives (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod controllable;

// Re-export for convenience
pub use controllable::{ChangeHandler, Controllable, Routed};
