//! Line-mode display functions

use super::formatters::{BANNER, code_to_pegs, feedback_to_colored, palette_legend};
use crate::game::{GuessRecord, RoundStatus, Session, Settings};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title art and how to play
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_welcome<W: Write>(out: &mut W, settings: Settings) -> io::Result<()> {
    writeln!(out)?;
    for row in BANNER {
        writeln!(out, "{}", row.bright_cyan().bold())?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Break the {}-peg code in {} guesses. Colors never repeat in a random code.",
        settings.size.pegs(),
        settings.attempts
    )?;
    writeln!(out, "Type a guess as color symbols, e.g. {}", "RGBY".bold())?;
    writeln!(out, "\n  {}\n", palette_legend())?;
    writeln!(
        out,
        "  {} right color, right place   {} right color, wrong place\n",
        "●".red().bold(),
        "○".white().bold()
    )?;
    writeln!(
        out,
        "Commands: 'concede' to give up the round, 'quit' to exit\n"
    )
}

/// Print one scored guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_guess_row<W: Write>(out: &mut W, turn: usize, record: &GuessRecord) -> io::Result<()> {
    writeln!(
        out,
        "  {:>2}. {}  {}",
        turn.to_string().bright_black(),
        code_to_pegs(&record.guess),
        feedback_to_colored(record.feedback)
    )
}

/// Print how the round ended and reveal the code
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_round_result<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match session.status() {
        RoundStatus::Won => {
            let used = session.guesses_used();
            writeln!(
                out,
                "{}",
                format!(
                    "  Code broken in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        }
        RoundStatus::Lost => {
            writeln!(out, "{}", "  Out of guesses. The code survives.".red().bold())?;
        }
        RoundStatus::Conceded => {
            writeln!(out, "{}", "  Round conceded.".yellow().bold())?;
        }
        RoundStatus::Guessing => {}
    }
    writeln!(out, "  The code was: {}", code_to_pegs(session.secret()))?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Print the running tally for this run of the program
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_tally<W: Write>(out: &mut W, played: usize, won: usize) -> io::Result<()> {
    writeln!(
        out,
        "Rounds: {} | Won: {} | Lost: {}\n",
        played.to_string().bright_cyan(),
        won.to_string().bright_green(),
        (played - won).to_string().red()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeSequence, ProblemSize};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn session(secret: &str) -> Session {
        Session::new(ProblemSize::Four, CodeSequence::parse(secret).unwrap(), 3)
    }

    #[test]
    fn won_round_reports_guess_count() {
        let mut round = session("RGBY");
        round.replace_guess(CodeSequence::parse("RGBY").unwrap()).unwrap();
        round.submit();

        let text = render(|out| write_round_result(out, &round));
        assert!(text.contains("Code broken in 1 guess!"));
        assert!(text.contains("The code was"));
    }

    #[test]
    fn conceded_round_is_labelled() {
        let mut round = session("RGBY");
        round.concede();

        let text = render(|out| write_round_result(out, &round));
        assert!(text.contains("Round conceded."));
    }

    #[test]
    fn guess_row_shows_turn_and_pegs() {
        let mut round = session("RGBY");
        round.replace_guess(CodeSequence::parse("RKKK").unwrap()).unwrap();
        round.submit();

        let text = render(|out| write_guess_row(out, 1, &round.history()[0]));
        assert!(text.contains('1'));
        assert!(text.contains('R'));
        assert!(text.contains('●'));
    }

    #[test]
    fn welcome_mentions_size_and_attempts() {
        let text = render(|out| write_welcome(out, Settings::default()));
        assert!(text.contains("4-peg code in 12 guesses"));
    }
}
