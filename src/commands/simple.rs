//! Simple line mode
//!
//! Text-prompt play for terminals without raw mode support

use crate::core::{CodeSequence, ProblemSize};
use crate::game::{CodeSource, RoundStatus, Session, Settings};
use crate::output::{write_guess_row, write_round_result, write_tally, write_welcome};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run line mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(settings: Settings, rng: R) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play_lines(settings, rng, &mut input, &mut output)
}

/// Play rounds reading commands from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R, I, O>(settings: Settings, mut rng: R, input: &mut I, out: &mut O) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    write_welcome(out, settings)?;

    let mut played = 0;
    let mut won = 0;

    loop {
        let secret = match CodeSource::from(settings.players) {
            CodeSource::Random => CodeSequence::random_unique(settings.size, &mut rng),
            CodeSource::SecondPlayer => match read_secret(settings.size, input, out)? {
                Some(secret) => secret,
                None => break,
            },
        };

        info!(pegs = settings.size.pegs(), "line-mode round started");
        let mut session = Session::new(settings.size, secret, settings.attempts);

        while !session.is_over() {
            let prompt = format!(
                "Guess {}/{}",
                session.guesses_used() + 1,
                session.attempts()
            );
            let Some(line) = get_user_input(&prompt, input, out)? else {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(out, "\nThanks for playing!")?;
                    return Ok(());
                }
                "concede" => session.concede(),
                _ => match parse_guess(&line, settings.size) {
                    Ok(guess) => {
                        session.replace_guess(guess)?;
                        session.submit();
                        if let Some(record) = session.history().last() {
                            write_guess_row(out, session.guesses_used(), record)?;
                        }
                    }
                    Err(message) => writeln!(out, "{}", message.red())?,
                },
            }
        }

        played += 1;
        if session.status() == RoundStatus::Won {
            won += 1;
        }
        write_round_result(out, &session)?;
        write_tally(out, played, won)?;

        match get_user_input("Play again? (yes/no)", input, out)? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out)?;
            }
            _ => {
                writeln!(out, "\nThanks for playing!")?;
                break;
            }
        }
    }

    Ok(())
}

/// Parse a typed guess, explaining what is wrong with it
fn parse_guess(line: &str, size: ProblemSize) -> Result<CodeSequence, String> {
    let code = CodeSequence::parse(line).map_err(|e| format!("Invalid guess: {e}"))?;
    if code.len() == size.pegs() {
        Ok(code)
    } else {
        Err(format!(
            "Invalid guess: expected {} pegs, got {}",
            size.pegs(),
            code.len()
        ))
    }
}

/// Ask the second player for the code, then wipe it off the screen
fn read_secret<I: BufRead, O: Write>(
    size: ProblemSize,
    input: &mut I,
    out: &mut O,
) -> Result<Option<CodeSequence>> {
    writeln!(
        out,
        "{}",
        "Player 2: enter the secret code (repeats allowed)".bright_cyan()
    )?;
    loop {
        let prompt = format!("Secret ({} pegs)", size.pegs());
        let Some(line) = get_user_input(&prompt, input, out)? else {
            return Ok(None);
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }
        match parse_guess(&line, size) {
            Ok(code) => {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                writeln!(out, "{}", "Code set. Player 1, start guessing!".bright_green())?;
                return Ok(Some(code));
            }
            Err(message) => writeln!(out, "{}", message.red())?,
        }
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<I: BufRead, O: Write>(
    prompt: &str,
    input: &mut I,
    out: &mut O,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
