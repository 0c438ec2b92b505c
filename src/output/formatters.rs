//! Formatting utilities for terminal output

use crate::core::{CodeSequence, Color, Feedback, FeedbackMarker};
use colored::{ColoredString, Colorize};

/// Title art shared by the TUI header and line mode
pub const BANNER: [&str; 6] = [
    r"  __  __           _            __  __ _           _ ",
    r" |  \/  |         | |          |  \/  (_)         | |",
    r" | \  / | __ _ ___| |_ ___ _ __| \  / |_ _ __   __| |",
    r" | |\/| |/ _` / __| __/ _ \ '__| |\/| | | '_ \ / _` |",
    r" | |  | | (_| \__ \ ||  __/ |  | |  | | | | | | (_| |",
    r" |_|  |_|\__,_|___/\__\___|_|  |_|  |_|_|_| |_|\__,_|",
];

const fn term_color(color: Color) -> colored::Color {
    match color {
        Color::Black => colored::Color::Black,
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Purple => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::White => colored::Color::White,
    }
}

/// A peg as its symbol on its own color
#[must_use]
pub fn peg(color: Color) -> ColoredString {
    let text = format!(" {} ", color.symbol());
    let fg = match color {
        Color::Black | Color::Blue | Color::Purple | Color::Red => colored::Color::White,
        _ => colored::Color::Black,
    };
    text.color(fg).on_color(term_color(color))
}

/// A whole code as colored pegs
#[must_use]
pub fn code_to_pegs(code: &CodeSequence) -> String {
    code.iter().map(|color| peg(color).to_string()).collect()
}

/// Marker character for one feedback slot
#[must_use]
pub const fn marker_char(marker: FeedbackMarker) -> char {
    match marker {
        FeedbackMarker::Exact => '●',
        FeedbackMarker::ColorOnly => '○',
        FeedbackMarker::Empty => '·',
    }
}

/// Feedback as plain marker characters, exact matches first
#[must_use]
pub fn feedback_to_string(feedback: Feedback) -> String {
    feedback.markers().map(marker_char).collect()
}

/// Feedback with exact markers in red and color-only markers in white
#[must_use]
pub fn feedback_to_colored(feedback: Feedback) -> String {
    feedback
        .markers()
        .map(|marker| {
            let text = marker_char(marker).to_string();
            match marker {
                FeedbackMarker::Exact => text.red().bold().to_string(),
                FeedbackMarker::ColorOnly => text.white().bold().to_string(),
                FeedbackMarker::Empty => text.bright_black().to_string(),
            }
        })
        .collect()
}

/// One line listing every color with its symbol
#[must_use]
pub fn palette_legend() -> String {
    Color::ALL
        .iter()
        .map(|color| format!("{} {}", peg(*color), color.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProblemSize;

    fn code(text: &str) -> CodeSequence {
        CodeSequence::parse(text).unwrap()
    }

    #[test]
    fn feedback_string_puts_exact_first() {
        let feedback = Feedback::score(&code("RGBY"), &code("RBKK"));
        assert_eq!(feedback_to_string(feedback), "●○··");
    }

    #[test]
    fn feedback_string_for_a_win() {
        let secret = code("RGBYPC");
        assert_eq!(feedback_to_string(Feedback::score(&secret, &secret)), "●●●●●●");
    }

    #[test]
    fn feedback_string_for_a_miss() {
        let secret = CodeSequence::unique_sequence(ProblemSize::Four);
        let guess = CodeSequence::filled(ProblemSize::Four, Color::White);
        assert_eq!(feedback_to_string(Feedback::score(&secret, &guess)), "····");
    }

    #[test]
    fn pegs_carry_their_symbols() {
        for color in Color::ALL {
            assert!(peg(color).to_string().contains(color.symbol()));
        }
        let text = code_to_pegs(&code("KRW"));
        assert!(text.contains('K') && text.contains('R') && text.contains('W'));
    }

    #[test]
    fn legend_names_every_color() {
        let legend = palette_legend();
        for color in Color::ALL {
            assert!(legend.contains(color.name()));
        }
    }

    #[test]
    fn banner_rows_are_equal_width() {
        let width = BANNER[0].chars().count();
        assert!(BANNER.iter().all(|row| row.chars().count() == width));
    }
}
