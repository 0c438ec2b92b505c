//! Interactive TUI mode

pub mod app;
pub mod input;
pub mod rendering;

pub use app::run_tui;
pub use input::{KeyboardInput, map_key};
