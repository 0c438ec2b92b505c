//! Player intents and where they come from

use crate::core::ProblemSize;
use std::collections::VecDeque;
use std::fmt;
use std::io;

/// Number of people at the keyboard
///
/// With one player the code is random; with two, the second player sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerCount {
    #[default]
    One,
    Two,
}

impl PlayerCount {
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    #[must_use]
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// A discrete action decoded from player input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    CycleColorUp,
    CycleColorDown,
    MoveCursorNext,
    MoveCursorPrev,
    Submit,
    /// Give up the current round, or cancel code entry
    Concede,
    Quit,
    SetProblemSize(ProblemSize),
    SetPlayerCount(PlayerCount),
}

/// Blocking supplier of intents
pub trait IntentSource {
    /// Wait for the next intent
    ///
    /// Returns `Ok(None)` once the source has nothing more to give.
    ///
    /// # Errors
    /// Returns an I/O error if reading the underlying input fails.
    fn next_intent(&mut self) -> io::Result<Option<Intent>>;
}

/// A pre-recorded sequence of intents, replayed in order
impl IntentSource for VecDeque<Intent> {
    fn next_intent(&mut self) -> io::Result<Option<Intent>> {
        Ok(self.pop_front())
    }
}
