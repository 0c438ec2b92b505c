//! Terminal output formatting
//!
//! Colored text rendering of codes and feedback for line mode.

pub mod display;
pub mod formatters;

pub use display::{write_guess_row, write_round_result, write_tally, write_welcome};
pub use formatters::{BANNER, code_to_pegs, feedback_to_string};
