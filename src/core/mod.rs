//! Core domain types for Mastermind
//!
//! Colors, code sequences and feedback scoring. Everything here is pure and
//! deterministic; randomness is always supplied by the caller.

mod code;
mod color;
mod feedback;

pub use code::{CodeError, CodeSequence, MAX_PEGS, ProblemSize};
pub use color::{Color, Paint, UiColor};
pub use feedback::{Feedback, FeedbackMarker};
