//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, score_words};
pub use simple::run_simple;
