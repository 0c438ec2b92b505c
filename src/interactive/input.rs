//! Keyboard to intent mapping

use crate::core::ProblemSize;
use crate::game::{Intent, IntentSource, PlayerCount};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Decode a key press
///
/// Returns `None` for keys with no meaning in the game.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    let intent = match key.code {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Intent::CycleColorUp,
        KeyCode::Char('s' | 'S') | KeyCode::Down => Intent::CycleColorDown,
        KeyCode::Char('d' | 'D') | KeyCode::Right => Intent::MoveCursorNext,
        KeyCode::Char('a' | 'A') | KeyCode::Left => Intent::MoveCursorPrev,
        KeyCode::Char(' ') | KeyCode::Enter => Intent::Submit,
        KeyCode::Char('q' | 'Q') => Intent::Quit,
        KeyCode::Esc => Intent::Concede,
        KeyCode::Char('1') => Intent::SetPlayerCount(PlayerCount::One),
        KeyCode::Char('2') => Intent::SetPlayerCount(PlayerCount::Two),
        KeyCode::Char('4') => Intent::SetProblemSize(ProblemSize::Four),
        KeyCode::Char('6') => Intent::SetProblemSize(ProblemSize::Six),
        KeyCode::Char('8') => Intent::SetProblemSize(ProblemSize::Eight),
        _ => return None,
    };
    Some(intent)
}

/// Reads intents from the terminal's key events
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl IntentSource for KeyboardInput {
    fn next_intent(&mut self) -> io::Result<Option<Intent>> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(intent) = map_key(key) {
                    return Ok(Some(intent));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Intent> {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn wasd_and_arrows_agree() {
        assert_eq!(press(KeyCode::Char('w')), press(KeyCode::Up));
        assert_eq!(press(KeyCode::Char('s')), press(KeyCode::Down));
        assert_eq!(press(KeyCode::Char('d')), press(KeyCode::Right));
        assert_eq!(press(KeyCode::Char('a')), press(KeyCode::Left));
        assert_eq!(press(KeyCode::Up), Some(Intent::CycleColorUp));
        assert_eq!(press(KeyCode::Left), Some(Intent::MoveCursorPrev));
    }

    #[test]
    fn space_and_enter_submit() {
        assert_eq!(press(KeyCode::Char(' ')), Some(Intent::Submit));
        assert_eq!(press(KeyCode::Enter), Some(Intent::Submit));
    }

    #[test]
    fn quit_and_concede() {
        assert_eq!(press(KeyCode::Char('q')), Some(Intent::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Intent::Concede));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn menu_keys() {
        assert_eq!(
            press(KeyCode::Char('2')),
            Some(Intent::SetPlayerCount(PlayerCount::Two))
        );
        assert_eq!(
            press(KeyCode::Char('8')),
            Some(Intent::SetProblemSize(ProblemSize::Eight))
        );
        assert_eq!(press(KeyCode::Char('5')), None);
    }

    #[test]
    fn control_combinations_are_not_game_keys() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
    }
}
