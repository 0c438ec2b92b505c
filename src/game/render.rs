//! Board drawing commands
//!
//! The controller never draws anything itself. After each state change,
//! `paint` walks the controller state and issues commands to a `Renderer`.
//!
//! Board coordinates: row 0 holds the secret code, rows `1..=attempts` hold
//! guesses. Guesses fill the board from the bottom row upwards.

use super::controller::{Controller, Phase, Settings, Statistics};
use super::session::Session;
use crate::core::{CodeSequence, Feedback, FeedbackMarker, Paint, UiColor};
use rand::Rng;

/// Row of the secret code
pub const CODE_ROW: usize = 0;

/// Everything the menu panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub phase: Phase,
    pub settings: Settings,
    /// Guesses left in the current round
    pub remaining: Option<u8>,
    pub stats: Statistics,
}

/// Sink for board drawing commands
pub trait Renderer {
    fn draw_peg(&mut self, row: usize, col: usize, paint: Paint);

    /// Draw one feedback slot next to a guess row
    fn draw_feedback(&mut self, row: usize, slot: usize, marker: FeedbackMarker);

    /// Mark the peg being edited
    fn draw_cursor(&mut self, row: usize, col: usize);

    fn draw_menu(&mut self, menu: &MenuView);

    /// Show the secret code at the end of a round
    fn reveal_code(&mut self, code: &CodeSequence);
}

/// Board row used by the `index`-th guess of a round with `attempts` guesses
#[must_use]
pub const fn guess_row(index: usize, attempts: u8) -> usize {
    attempts as usize - index
}

/// Issue every drawing command for the current controller state
pub fn paint<R: Rng, D: Renderer + ?Sized>(controller: &Controller<R>, renderer: &mut D) {
    let settings = controller.settings();

    if let Some(entry) = controller.code_entry() {
        draw_code(renderer, CODE_ROW, &entry.code);
        renderer.draw_cursor(CODE_ROW, entry.cursor);
        draw_empty_rows(renderer, settings.attempts, settings.size.pegs());
    } else if let Some(session) = controller.session().or_else(|| controller.last_round()) {
        paint_round(renderer, session);
    } else {
        draw_hidden(renderer, settings.size.pegs());
        draw_empty_rows(renderer, settings.attempts, settings.size.pegs());
    }

    renderer.draw_menu(&MenuView {
        phase: controller.phase(),
        settings,
        remaining: controller.session().map(Session::remaining),
        stats: controller.statistics(),
    });
}

fn paint_round<D: Renderer + ?Sized>(renderer: &mut D, session: &Session) {
    let pegs = session.size().pegs();
    let attempts = session.attempts();

    if session.is_over() {
        renderer.reveal_code(session.secret());
    } else {
        draw_hidden(renderer, pegs);
    }

    for (index, record) in session.history().iter().enumerate() {
        let row = guess_row(index, attempts);
        draw_code(renderer, row, &record.guess);
        draw_feedback(renderer, row, record.feedback);
    }

    // Rows 1..=top_empty have not been played yet
    let used = session.guesses_used();
    let mut top_empty = usize::from(attempts) - used;

    if !session.is_over() && top_empty > 0 {
        let row = guess_row(used, attempts);
        draw_code(renderer, row, session.guess());
        draw_blank_feedback(renderer, row, pegs);
        renderer.draw_cursor(row, session.cursor());
        top_empty -= 1;
    }

    for row in 1..=top_empty {
        draw_empty_row(renderer, row, pegs);
    }
}

fn draw_code<D: Renderer + ?Sized>(renderer: &mut D, row: usize, code: &CodeSequence) {
    for (col, color) in code.iter().enumerate() {
        renderer.draw_peg(row, col, Paint::Peg(color));
    }
}

fn draw_hidden<D: Renderer + ?Sized>(renderer: &mut D, pegs: usize) {
    for col in 0..pegs {
        renderer.draw_peg(CODE_ROW, col, Paint::Ui(UiColor::HiddenCode));
    }
}

fn draw_feedback<D: Renderer + ?Sized>(renderer: &mut D, row: usize, feedback: Feedback) {
    for (slot, marker) in feedback.markers().enumerate() {
        renderer.draw_feedback(row, slot, marker);
    }
}

fn draw_blank_feedback<D: Renderer + ?Sized>(renderer: &mut D, row: usize, pegs: usize) {
    for slot in 0..pegs {
        renderer.draw_feedback(row, slot, FeedbackMarker::Empty);
    }
}

fn draw_empty_row<D: Renderer + ?Sized>(renderer: &mut D, row: usize, pegs: usize) {
    for col in 0..pegs {
        renderer.draw_peg(row, col, Paint::Ui(UiColor::Unmarked));
    }
    draw_blank_feedback(renderer, row, pegs);
}

fn draw_empty_rows<D: Renderer + ?Sized>(renderer: &mut D, attempts: u8, pegs: usize) {
    for row in 1..=usize::from(attempts) {
        draw_empty_row(renderer, row, pegs);
    }
}
