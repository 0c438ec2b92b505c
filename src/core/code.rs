//! Code sequences
//!
//! A `CodeSequence` is both the secret code and a guess. It lives in a fixed
//! buffer sized to the palette, so a sequence can never hold more pegs than
//! there are colors.

use super::Color;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest supported sequence length
pub const MAX_PEGS: usize = Color::COUNT;

/// Sequence length chosen for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProblemSize {
    #[default]
    Four,
    Six,
    Eight,
}

impl ProblemSize {
    pub const ALL: [Self; 3] = [Self::Four, Self::Six, Self::Eight];

    /// Number of pegs in a code of this size
    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    #[must_use]
    pub fn from_pegs(pegs: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.pegs() == pegs)
    }
}

impl fmt::Display for ProblemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pegs())
    }
}

/// Error type for invalid code sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    TooLong(usize),
    LengthMismatch { expected: usize, actual: usize },
    UnknownSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong(len) => {
                write!(f, "Code can hold at most {MAX_PEGS} pegs, got {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Code must be exactly {expected} pegs, got {actual}")
            }
            Self::UnknownSymbol(ch) => write!(f, "'{ch}' is not a color symbol"),
        }
    }
}

impl std::error::Error for CodeError {}

/// An ordered, fixed-capacity sequence of peg colors
///
/// Equality and hashing only look at the first `len` pegs.
#[derive(Debug, Clone, Copy)]
pub struct CodeSequence {
    pegs: [Color; MAX_PEGS],
    len: u8,
}

impl CodeSequence {
    /// A sequence of `size` pegs, all the same color
    #[must_use]
    pub const fn filled(size: ProblemSize, color: Color) -> Self {
        Self {
            pegs: [color; MAX_PEGS],
            len: size.pegs() as u8,
        }
    }

    /// The initial state of every guess row
    #[must_use]
    pub const fn all_black(size: ProblemSize) -> Self {
        Self::filled(size, Color::Black)
    }

    /// The first `size` palette colors in order
    #[must_use]
    pub const fn unique_sequence(size: ProblemSize) -> Self {
        Self {
            pegs: Color::ALL,
            len: size.pegs() as u8,
        }
    }

    /// A random code with no repeated colors
    ///
    /// Shuffles the whole palette and keeps the first `size` colors.
    pub fn random_unique<R: Rng + ?Sized>(size: ProblemSize, rng: &mut R) -> Self {
        let mut pegs = Color::ALL;
        pegs.shuffle(rng);
        Self {
            pegs,
            len: size.pegs() as u8,
        }
    }

    /// Build a sequence from an arbitrary slice of colors
    ///
    /// # Errors
    /// Returns `CodeError::TooLong` if the slice holds more than `MAX_PEGS` colors.
    pub fn from_colors(colors: &[Color]) -> Result<Self, CodeError> {
        if colors.len() > MAX_PEGS {
            return Err(CodeError::TooLong(colors.len()));
        }

        let mut pegs = [Color::Black; MAX_PEGS];
        pegs[..colors.len()].copy_from_slice(colors);

        Ok(Self {
            pegs,
            len: colors.len() as u8,
        })
    }

    /// Parse a sequence from color symbols such as `"RGBY"` or `"r g b y"`
    ///
    /// Whitespace and commas between symbols are ignored.
    ///
    /// # Errors
    /// Returns `CodeError::UnknownSymbol` for a character that is not a color
    /// symbol, or `CodeError::TooLong` for more than `MAX_PEGS` symbols.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeSequence, Color};
    ///
    /// let code = CodeSequence::parse("RGby").unwrap();
    /// assert_eq!(code.as_slice(), &[Color::Red, Color::Green, Color::Blue, Color::Yellow]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let colors = text
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .map(|ch| Color::from_symbol(ch).ok_or(CodeError::UnknownSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_colors(&colors)
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.pegs[..self.len()]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Color> {
        self.as_slice().get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.as_slice().iter().copied()
    }

    /// Set the color at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    pub fn set(&mut self, position: usize, color: Color) {
        let len = self.len();
        self.pegs[..len][position] = color;
    }

    /// Advance the color at `position` to the next palette color
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    pub fn cycle_up(&mut self, position: usize) {
        let len = self.len();
        let peg = &mut self.pegs[..len][position];
        *peg = peg.next();
    }

    /// Move the color at `position` back to the previous palette color
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    pub fn cycle_down(&mut self, position: usize) {
        let len = self.len();
        let peg = &mut self.pegs[..len][position];
        *peg = peg.prev();
    }

    /// Check whether any color appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = [false; Color::COUNT];
        for color in self.iter() {
            if std::mem::replace(&mut seen[color.index()], true) {
                return true;
            }
        }
        false
    }
}

impl PartialEq for CodeSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for CodeSequence {}

impl Hash for CodeSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Display for CodeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.iter() {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}
