//! Mastermind
//!
//! The code-breaking board game for the terminal, against a random code or a
//! second player.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{CodeSequence, Feedback};
//!
//! let code = CodeSequence::parse("RGBY").unwrap();
//! let guess = CodeSequence::parse("RBKK").unwrap();
//!
//! let feedback = Feedback::score(&code, &guess);
//! assert_eq!((feedback.exact(), feedback.color_only()), (1, 1));
//! ```

// Core domain types
pub mod core;

// Session state, controller and renderer contract
pub mod game;

// Config file and log setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
