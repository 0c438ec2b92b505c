//! A single round of play
//!
//! The session owns the secret code, the guess being edited and the history of
//! scored guesses. It enforces the attempt budget and decides win or loss.

use crate::core::{CodeError, CodeSequence, Feedback, ProblemSize};
use tracing::{debug, info};

/// Default number of guesses per round
pub const DEFAULT_ATTEMPTS: u8 = 12;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Guessing,
    Won,
    Lost,
    Conceded,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

/// A submitted guess and the feedback it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: CodeSequence,
    pub feedback: Feedback,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Session {
    size: ProblemSize,
    secret: CodeSequence,
    guess: CodeSequence,
    cursor: usize,
    attempts: u8,
    remaining: u8,
    history: Vec<GuessRecord>,
    status: RoundStatus,
}

impl Session {
    /// Start a round against `secret` with `attempts` guesses
    ///
    /// # Panics
    /// Panics if `secret` does not have `size` pegs, or if `attempts` is zero.
    #[must_use]
    pub fn new(size: ProblemSize, secret: CodeSequence, attempts: u8) -> Self {
        assert_eq!(
            secret.len(),
            size.pegs(),
            "secret code must match the problem size"
        );
        assert!(attempts > 0, "a round needs at least one attempt");

        Self {
            size,
            secret,
            guess: CodeSequence::all_black(size),
            cursor: 0,
            attempts,
            remaining: attempts,
            history: Vec::with_capacity(usize::from(attempts)),
            status: RoundStatus::Guessing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> ProblemSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &CodeSequence {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &CodeSequence {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Guess budget the round started with
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    pub fn cycle_up(&mut self) {
        if !self.is_over() {
            self.guess.cycle_up(self.cursor);
        }
    }

    pub fn cycle_down(&mut self) {
        if !self.is_over() {
            self.guess.cycle_down(self.cursor);
        }
    }

    pub fn move_next(&mut self) {
        self.cursor = next_position(self.cursor, self.size);
    }

    pub fn move_prev(&mut self) {
        self.cursor = prev_position(self.cursor, self.size);
    }

    /// Replace the whole in-progress guess
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if `guess` is not the round's size.
    pub fn replace_guess(&mut self, guess: CodeSequence) -> Result<(), CodeError> {
        if guess.len() != self.size.pegs() {
            return Err(CodeError::LengthMismatch {
                expected: self.size.pegs(),
                actual: guess.len(),
            });
        }
        self.guess = guess;
        Ok(())
    }

    /// Score the in-progress guess and advance the round
    ///
    /// A perfect guess wins without using up an attempt. Any other guess costs
    /// one attempt, and the round is lost when none remain. The next row
    /// starts from an all-black guess.
    ///
    /// Returns `None` without changing anything once the round is over.
    pub fn submit(&mut self) -> Option<Feedback> {
        if self.is_over() {
            return None;
        }

        let feedback = Feedback::score(&self.secret, &self.guess);
        self.history.push(GuessRecord {
            guess: self.guess,
            feedback,
        });

        debug!(
            row = self.history.len(),
            exact = feedback.exact(),
            color_only = feedback.color_only(),
            "guess scored"
        );

        if feedback.is_perfect() {
            self.status = RoundStatus::Won;
            info!(guesses = self.history.len(), "code broken");
        } else {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.status = RoundStatus::Lost;
                info!(guesses = self.history.len(), "out of guesses");
            }
        }

        self.guess = CodeSequence::all_black(self.size);
        Some(feedback)
    }

    /// Give up; the round ends as a loss
    pub fn concede(&mut self) {
        if !self.is_over() {
            self.status = RoundStatus::Conceded;
            info!(guesses = self.history.len(), "round conceded");
        }
    }
}

/// Cursor position after moving right, wrapping to the first peg
#[must_use]
pub const fn next_position(cursor: usize, size: ProblemSize) -> usize {
    (cursor + 1) % size.pegs()
}

/// Cursor position after moving left, wrapping to the last peg
#[must_use]
pub const fn prev_position(cursor: usize, size: ProblemSize) -> usize {
    (cursor + size.pegs() - 1) % size.pegs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Black, Blue, Green, Red, Yellow};

    fn code(colors: &[Color]) -> CodeSequence {
        CodeSequence::from_colors(colors).unwrap()
    }

    fn session() -> Session {
        Session::new(
            ProblemSize::Four,
            code(&[Red, Green, Blue, Yellow]),
            DEFAULT_ATTEMPTS,
        )
    }

    fn enter(session: &mut Session, colors: &[Color]) {
        session.replace_guess(code(colors)).unwrap();
    }

    #[test]
    fn new_session_starts_guessing() {
        let s = session();
        assert_eq!(s.status(), RoundStatus::Guessing);
        assert_eq!(s.remaining(), 12);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.guess(), &CodeSequence::all_black(ProblemSize::Four));
        assert!(s.history().is_empty());
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut s = session();
        s.move_prev();
        assert_eq!(s.cursor(), 3);
        s.move_next();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn cursor_wraps_for_larger_sizes() {
        assert_eq!(prev_position(0, ProblemSize::Eight), 7);
        assert_eq!(next_position(7, ProblemSize::Eight), 0);
        assert_eq!(next_position(2, ProblemSize::Six), 3);
    }

    #[test]
    fn cycling_edits_peg_under_cursor() {
        let mut s = session();
        s.move_next();
        s.cycle_up();
        s.cycle_up();
        assert_eq!(s.guess().get(1), Some(Green));
        s.cycle_down();
        assert_eq!(s.guess().get(1), Some(Red));
        assert_eq!(s.guess().get(0), Some(Black));
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut s = session();
        enter(&mut s, &[Red, Green, Blue, Yellow]);
        let feedback = s.submit().unwrap();

        assert_eq!((feedback.exact(), feedback.color_only()), (4, 0));
        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.remaining(), 12);
    }

    #[test]
    fn losing_guess_costs_one_attempt_and_resets_row() {
        let mut s = session();
        enter(&mut s, &[Green, Red, Black, Black]);
        s.move_next();
        let feedback = s.submit().unwrap();

        assert_eq!((feedback.exact(), feedback.color_only()), (0, 2));
        assert_eq!(s.remaining(), 11);
        assert_eq!(s.status(), RoundStatus::Guessing);
        assert_eq!(s.guess(), &CodeSequence::all_black(ProblemSize::Four));
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.history()[0].guess, code(&[Green, Red, Black, Black]));
    }

    #[test]
    fn twelfth_miss_loses() {
        let mut s = session();
        for _ in 0..11 {
            s.submit();
            assert_eq!(s.status(), RoundStatus::Guessing);
        }
        assert_eq!(s.remaining(), 1);

        s.submit();
        assert_eq!(s.status(), RoundStatus::Lost);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.guesses_used(), 12);
    }

    #[test]
    fn twelfth_guess_can_still_win() {
        let mut s = session();
        for _ in 0..11 {
            s.submit();
        }
        enter(&mut s, &[Red, Green, Blue, Yellow]);
        s.submit();

        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.remaining(), 1);
    }

    #[test]
    fn submit_after_round_over_is_ignored() {
        let mut s = Session::new(ProblemSize::Four, code(&[Red, Red, Red, Red]), 1);
        assert!(s.submit().is_some());
        assert_eq!(s.status(), RoundStatus::Lost);

        assert!(s.submit().is_none());
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.guesses_used(), 1);
    }

    #[test]
    fn concede_ends_round() {
        let mut s = session();
        s.concede();
        assert_eq!(s.status(), RoundStatus::Conceded);
        assert!(s.is_over());
        assert!(s.submit().is_none());
    }

    #[test]
    fn replace_guess_rejects_wrong_length() {
        let mut s = session();
        let result = s.replace_guess(code(&[Red, Green]));
        assert_eq!(
            result,
            Err(CodeError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "problem size")]
    fn secret_of_wrong_size_panics() {
        let _ = Session::new(ProblemSize::Six, code(&[Red, Green, Blue, Yellow]), 12);
    }
}
