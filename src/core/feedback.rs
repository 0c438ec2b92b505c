//! Mastermind feedback scoring
//!
//! Feedback is a pair of counts: pegs with the right color in the right
//! position, and remaining pegs with the right color in the wrong position.
//! It carries no information about which positions matched.

use super::{CodeSequence, Color};

/// Scored result of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
    pegs: u8,
}

/// Visual style of a single feedback slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMarker {
    /// Right color, right position
    Exact,
    /// Right color, wrong position
    ColorOnly,
    /// No match
    Empty,
}

impl Feedback {
    /// Score `guess` against the secret `code`
    ///
    /// # Algorithm
    /// 1. First pass: every position where the colors agree is an exact match;
    ///    both pegs are consumed
    /// 2. Second pass: count the unconsumed code pegs per color, then for each
    ///    unconsumed guess peg take one matching code peg if any remain
    ///
    /// A code peg satisfies at most one guess peg, so duplicates in either
    /// sequence are never double counted.
    ///
    /// # Panics
    /// Panics if the sequences differ in length. That is a caller bug, not a
    /// game outcome.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeSequence, Color, Feedback};
    ///
    /// let code = CodeSequence::from_colors(&[Color::Red, Color::Red, Color::Blue]).unwrap();
    /// let guess = CodeSequence::from_colors(&[Color::Red, Color::Blue, Color::Blue]).unwrap();
    /// let feedback = Feedback::score(&code, &guess);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.color_only(), 1);
    /// ```
    #[must_use]
    pub fn score(code: &CodeSequence, guess: &CodeSequence) -> Self {
        assert_eq!(
            code.len(),
            guess.len(),
            "code and guess must have the same length"
        );

        let mut exact = 0u8;
        let mut color_only = 0u8;
        let mut code_available = [0u8; Color::COUNT];
        let mut guess_unmatched = Vec::with_capacity(guess.len());

        // First pass: exact matches, and pool the leftovers
        for (secret, guessed) in code.iter().zip(guess.iter()) {
            if secret == guessed {
                exact += 1;
            } else {
                code_available[secret.index()] += 1;
                guess_unmatched.push(guessed);
            }
        }

        // Second pass: color-only matches from the leftover pool
        for guessed in guess_unmatched {
            let count = &mut code_available[guessed.index()];
            if *count > 0 {
                *count -= 1;
                color_only += 1;
            }
        }

        Self {
            exact,
            color_only,
            pegs: code.len() as u8,
        }
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact as usize
    }

    /// Remaining pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only as usize
    }

    /// Length of the sequences this feedback was scored from
    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.pegs as usize
    }

    /// Check whether the guess was the code
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == self.pegs
    }

    /// Feedback slots in display order
    ///
    /// Exact markers come first, then color-only markers, then empty slots.
    pub fn markers(self) -> impl Iterator<Item = FeedbackMarker> {
        let exact = self.exact();
        let color_only = self.color_only();
        (0..self.pegs()).map(move |slot| {
            if slot < exact {
                FeedbackMarker::Exact
            } else if slot < exact + color_only {
                FeedbackMarker::ColorOnly
            } else {
                FeedbackMarker::Empty
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Black, Blue, Cyan, Green, Purple, Red, White, Yellow};

    fn code(colors: &[Color]) -> CodeSequence {
        CodeSequence::from_colors(colors).unwrap()
    }

    fn pair(feedback: Feedback) -> (usize, usize) {
        (feedback.exact(), feedback.color_only())
    }

    #[test]
    fn identical_all_black_is_perfect() {
        let black = code(&[Black; 4]);
        let feedback = Feedback::score(&black, &black);

        assert_eq!(pair(feedback), (4, 0));
        assert!(feedback.is_perfect());
    }

    #[test]
    fn disjoint_colors_score_nothing() {
        let secret = code(&[Black, Red, Green, Yellow]);
        let guess = code(&[Blue, Purple, Cyan, White]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (0, 0));
    }

    #[test]
    fn duplicate_guess_color_not_double_counted() {
        let secret = code(&[Red, Red, Blue]);
        let guess = code(&[Red, Blue, Blue]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (1, 1));
    }

    #[test]
    fn exact_match_consumes_before_color_only() {
        // Blue at index 2 is exact, so the guess's other blue finds nothing left
        let secret = code(&[Red, Green, Blue, Yellow]);
        let guess = code(&[Blue, Black, Blue, Black]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (1, 0));
    }

    #[test]
    fn duplicate_code_color_satisfies_each_guess_once() {
        let secret = code(&[Red, Red, Green, Green]);
        let guess = code(&[Green, Green, Red, Red]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (0, 4));
    }

    #[test]
    fn single_code_peg_matches_one_of_many_guess_pegs() {
        let secret = code(&[Yellow, Black, Black, Black]);
        let guess = code(&[Red, Yellow, Yellow, Yellow]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (0, 1));
    }

    #[test]
    fn permutation_is_all_color_only() {
        let secret = code(&[Red, Green, Blue, Yellow, Cyan, Purple]);
        let guess = code(&[Purple, Red, Green, Blue, Yellow, Cyan]);

        assert_eq!(pair(Feedback::score(&secret, &guess)), (0, 6));
    }

    #[test]
    fn win_scenario() {
        let secret = code(&[Red, Green, Blue, Yellow]);
        let feedback = Feedback::score(&secret, &secret);

        assert_eq!(pair(feedback), (4, 0));
        assert!(feedback.is_perfect());
    }

    #[test]
    fn empty_sequences_are_trivially_perfect() {
        let empty = code(&[]);
        let feedback = Feedback::score(&empty, &empty);
        assert_eq!(pair(feedback), (0, 0));
        assert!(feedback.is_perfect());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn length_mismatch_panics() {
        let _ = Feedback::score(&code(&[Red, Green]), &code(&[Red, Green, Blue]));
    }

    #[test]
    fn scoring_properties_hold_for_all_small_codes() {
        // Every pair of length-3 codes over a 3-color alphabet
        let alphabet = [Red, Green, Blue];
        let mut codes = Vec::new();
        for a in alphabet {
            for b in alphabet {
                for c in alphabet {
                    codes.push(code(&[a, b, c]));
                }
            }
        }

        for secret in &codes {
            assert_eq!(pair(Feedback::score(secret, secret)), (3, 0));

            for guess in &codes {
                let forward = Feedback::score(secret, guess);
                let backward = Feedback::score(guess, secret);

                assert!(forward.exact() + forward.color_only() <= 3);
                assert_eq!(forward, backward, "{secret} vs {guess}");
                assert_eq!(forward.is_perfect(), secret == guess);
            }
        }
    }

    #[test]
    fn markers_list_exact_then_color_only_then_empty() {
        let secret = code(&[Red, Green, Blue, Yellow, Black, White]);
        let guess = code(&[Red, Blue, Green, Cyan, Cyan, White]);
        let feedback = Feedback::score(&secret, &guess);

        assert_eq!(pair(feedback), (2, 2));
        let markers: Vec<_> = feedback.markers().collect();
        assert_eq!(
            markers,
            vec![
                FeedbackMarker::Exact,
                FeedbackMarker::Exact,
                FeedbackMarker::ColorOnly,
                FeedbackMarker::ColorOnly,
                FeedbackMarker::Empty,
                FeedbackMarker::Empty,
            ]
        );
    }
}
