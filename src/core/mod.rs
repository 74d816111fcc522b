//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::Feedback;
pub use word::{Word, WordError};
