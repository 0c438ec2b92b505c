//! Peg colors
//!
//! The playable palette is a closed set of eight colors whose indices match the
//! standard ANSI palette. UI-only shades live in a separate enum so that
//! cycling a peg can never land on them.

use std::fmt;

/// One of the eight playable peg colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    /// Number of playable colors
    pub const COUNT: usize = 8;

    /// All playable colors in palette order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Purple,
        Self::Cyan,
        Self::White,
    ];

    /// Palette index (0-7), identical to the ANSI color number
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by palette index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following color, wrapping from White back to Black
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The preceding color, wrapping from Black back to White
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Single-letter symbol used for typed input
    ///
    /// Black uses `K` so that it does not collide with Blue.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'K',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Purple => 'P',
            Self::Cyan => 'C',
            Self::White => 'W',
        }
    }

    /// Parse a color symbol, case-insensitive
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.symbol() == upper)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shades used only for board decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiColor {
    /// Cursor marker under the peg being edited
    Marker,
    /// Board background
    Board,
    /// Empty peg holes and empty feedback slots
    Unmarked,
    /// Covered secret code
    HiddenCode,
}

impl UiColor {
    /// xterm-256 palette index
    #[must_use]
    pub const fn xterm_index(self) -> u8 {
        match self {
            Self::Marker => 239,
            Self::Board => 242,
            Self::Unmarked => 245,
            Self::HiddenCode => 68,
        }
    }
}

/// What a single peg hole shows on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Peg(Color),
    Ui(UiColor),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Peg(color)
    }
}

impl From<UiColor> for Paint {
    fn from(shade: UiColor) -> Self {
        Self::Ui(shade)
    }
}
