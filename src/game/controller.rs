//! Game session controller
//!
//! Drives the setup menu, obtains the secret code from the selected code
//! source, runs the guess loop and keeps per-process statistics. Both one and
//! two player games share the same round logic; only the code source differs.

use super::intent::{Intent, PlayerCount};
use super::session::{DEFAULT_ATTEMPTS, RoundStatus, Session, next_position, prev_position};
use crate::core::{CodeSequence, ProblemSize};
use rand::Rng;
use tracing::{debug, info, trace};

/// Round configuration chosen in the setup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: ProblemSize,
    pub players: PlayerCount,
    pub attempts: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: ProblemSize::default(),
            players: PlayerCount::default(),
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// How the secret code is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSource {
    /// Random code without repeated colors
    Random,
    /// Entered peg by peg by a second player; repeats allowed
    SecondPlayer,
}

impl From<PlayerCount> for CodeSource {
    fn from(players: PlayerCount) -> Self {
        match players {
            PlayerCount::One => Self::Random,
            PlayerCount::Two => Self::SecondPlayer,
        }
    }
}

/// Externally visible state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SettingUp,
    EnteringCode,
    Guessing,
    Won,
    Lost,
    Quit,
}

/// Secret code being set by the second player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: CodeSequence,
    pub cursor: usize,
}

/// Rounds played since the program started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub last_win_guesses: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub const fn rounds_lost(&self) -> usize {
        self.rounds_played - self.rounds_won
    }

    fn record(&mut self, session: &Session) {
        self.rounds_played += 1;
        if session.status() == RoundStatus::Won {
            self.rounds_won += 1;
            self.last_win_guesses = Some(session.guesses_used());
        }
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Menu,
    CodeEntry(CodeEntry),
    Round(Session),
    Quit,
}

/// Owns the single game session and applies intents to it
pub struct Controller<R: Rng> {
    settings: Settings,
    stage: Stage,
    last_round: Option<Session>,
    stats: Statistics,
    rng: R,
}

impl<R: Rng> Controller<R> {
    /// Create a controller waiting in the setup menu
    ///
    /// # Panics
    /// Panics if `settings.attempts` is zero.
    #[must_use]
    pub fn new(settings: Settings, rng: R) -> Self {
        assert!(settings.attempts > 0, "a round needs at least one attempt");
        Self {
            settings,
            stage: Stage::Menu,
            last_round: None,
            stats: Statistics::default(),
            rng,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.stage {
            Stage::Menu => Phase::SettingUp,
            Stage::CodeEntry(_) => Phase::EnteringCode,
            Stage::Round(session) => match session.status() {
                RoundStatus::Guessing => Phase::Guessing,
                RoundStatus::Won => Phase::Won,
                RoundStatus::Lost | RoundStatus::Conceded => Phase::Lost,
            },
            Stage::Quit => Phase::Quit,
        }
    }

    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self.stage, Stage::Quit)
    }

    /// The round in progress or just finished
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match &self.stage {
            Stage::Round(session) => Some(session),
            _ => None,
        }
    }

    /// The most recently finished round, kept on the board behind the menu
    #[must_use]
    pub const fn last_round(&self) -> Option<&Session> {
        self.last_round.as_ref()
    }

    /// The secret being entered by the second player
    #[must_use]
    pub const fn code_entry(&self) -> Option<&CodeEntry> {
        match &self.stage {
            Stage::CodeEntry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Apply one intent
    ///
    /// Intents that mean nothing in the current phase are ignored.
    pub fn handle(&mut self, intent: Intent) {
        if intent == Intent::Quit {
            info!("quit requested");
            self.stage = Stage::Quit;
            return;
        }

        let stage = std::mem::replace(&mut self.stage, Stage::Quit);
        self.stage = match stage {
            Stage::Menu => self.handle_menu(intent),
            Stage::CodeEntry(entry) => self.handle_code_entry(entry, intent),
            Stage::Round(session) => self.handle_round(session, intent),
            Stage::Quit => Stage::Quit,
        };
    }

    fn handle_menu(&mut self, intent: Intent) -> Stage {
        match intent {
            Intent::SetProblemSize(size) => {
                debug!(pegs = size.pegs(), "problem size selected");
                self.settings.size = size;
            }
            Intent::SetPlayerCount(players) => {
                debug!(players = players.count(), "player count selected");
                self.settings.players = players;
            }
            Intent::Submit => return self.begin_setup(),
            _ => {}
        }
        Stage::Menu
    }

    fn begin_setup(&mut self) -> Stage {
        match CodeSource::from(self.settings.players) {
            CodeSource::Random => {
                let secret = CodeSequence::random_unique(self.settings.size, &mut self.rng);
                self.start_round(secret)
            }
            CodeSource::SecondPlayer => {
                info!(pegs = self.settings.size.pegs(), "waiting for second player's code");
                Stage::CodeEntry(CodeEntry {
                    code: CodeSequence::all_black(self.settings.size),
                    cursor: 0,
                })
            }
        }
    }

    fn handle_code_entry(&mut self, mut entry: CodeEntry, intent: Intent) -> Stage {
        let size = self.settings.size;
        match intent {
            Intent::CycleColorUp => entry.code.cycle_up(entry.cursor),
            Intent::CycleColorDown => entry.code.cycle_down(entry.cursor),
            Intent::MoveCursorNext => entry.cursor = next_position(entry.cursor, size),
            Intent::MoveCursorPrev => entry.cursor = prev_position(entry.cursor, size),
            Intent::Submit => return self.start_round(entry.code),
            Intent::Concede => {
                debug!("code entry cancelled");
                return Stage::Menu;
            }
            _ => {}
        }
        Stage::CodeEntry(entry)
    }

    fn start_round(&mut self, secret: CodeSequence) -> Stage {
        info!(
            pegs = self.settings.size.pegs(),
            players = self.settings.players.count(),
            attempts = self.settings.attempts,
            "round started"
        );
        trace!(%secret, "secret code");
        self.last_round = None;
        Stage::Round(Session::new(self.settings.size, secret, self.settings.attempts))
    }

    fn handle_round(&mut self, mut session: Session, intent: Intent) -> Stage {
        if session.is_over() {
            if intent == Intent::Submit {
                self.last_round = Some(session);
                return Stage::Menu;
            }
            return Stage::Round(session);
        }

        match intent {
            Intent::CycleColorUp => session.cycle_up(),
            Intent::CycleColorDown => session.cycle_down(),
            Intent::MoveCursorNext => session.move_next(),
            Intent::MoveCursorPrev => session.move_prev(),
            Intent::Submit => {
                session.submit();
            }
            Intent::Concede => session.concede(),
            _ => {}
        }

        if session.is_over() {
            self.stats.record(&session);
            info!(
                played = self.stats.rounds_played,
                won = self.stats.rounds_won,
                "round finished"
            );
        }
        Stage::Round(session)
    }
}
