//! TUI rendering with ratatui
//!
//! Implements the board `Renderer` on top of a ratatui frame. Pegs, feedback
//! markers and the cursor are solid blocks of background color laid out on a
//! fixed grid inside the board panel.

use crate::core::{CodeSequence, Color, FeedbackMarker, Paint, ProblemSize, UiColor};
use crate::game::render::CODE_ROW;
use crate::game::{Controller, MenuView, Phase, PlayerCount, Renderer, paint};
use crate::output::formatters::BANNER;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

// Board grid, in terminal cells
const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;
const PEG_WIDTH: u16 = 5;
const PEG_PITCH: u16 = PEG_WIDTH + 1;
const ROW_PITCH: u16 = 2;
const FEEDBACK_GAP: u16 = 2;
const FEEDBACK_WIDTH: u16 = 2;
const FEEDBACK_PITCH: u16 = FEEDBACK_WIDTH + 1;

const MENU_WIDTH: u16 = 36;

/// Width of the board panel's interior for `pegs` pegs per row
#[must_use]
pub const fn board_width(pegs: usize) -> u16 {
    let pegs = pegs as u16;
    PAD_X * 2 + pegs * PEG_PITCH + FEEDBACK_GAP + pegs.div_ceil(2) * FEEDBACK_PITCH
}

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, controller: &Controller<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER.len() as u16 + 2), // Banner
            Constraint::Min(10),                         // Board and menu
            Constraint::Length(1),                       // Status bar
        ])
        .split(f.area());

    render_banner(f, chunks[0]);

    let size = board_size(controller);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width(size.pegs()) + 2),
            Constraint::Min(MENU_WIDTH),
        ])
        .split(chunks[1]);

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(xterm(UiColor::Board)));
    let board = block.inner(body[0]);
    f.render_widget(block, body[0]);

    let mut renderer = FrameRenderer {
        frame: f,
        board,
        menu: body[1],
        status: chunks[2],
        pegs: size.pegs(),
    };
    paint(controller, &mut renderer);
}

/// Size of the board currently on screen
fn board_size<R: Rng>(controller: &Controller<R>) -> ProblemSize {
    if controller.code_entry().is_some() {
        return controller.settings().size;
    }
    controller
        .session()
        .or_else(|| controller.last_round())
        .map_or(controller.settings().size, |session| session.size())
}

fn xterm(shade: UiColor) -> TermColor {
    TermColor::Indexed(shade.xterm_index())
}

fn peg_color(color: Color) -> TermColor {
    TermColor::Indexed(color.index() as u8)
}

fn paint_color(paint: Paint) -> TermColor {
    match paint {
        Paint::Peg(color) => peg_color(color),
        Paint::Ui(shade) => xterm(shade),
    }
}

fn marker_color(marker: FeedbackMarker) -> TermColor {
    match marker {
        FeedbackMarker::Exact => peg_color(Color::Red),
        FeedbackMarker::ColorOnly => peg_color(Color::White),
        FeedbackMarker::Empty => xterm(UiColor::Unmarked),
    }
}

fn render_banner(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = BANNER.iter().map(|row| Line::from(*row)).collect();
    let banner = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(TermColor::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(TermColor::Cyan)),
        );
    f.render_widget(banner, area);
}

/// `Renderer` that paints into a ratatui frame
struct FrameRenderer<'f, 'a> {
    frame: &'f mut Frame<'a>,
    board: Rect,
    menu: Rect,
    status: Rect,
    pegs: usize,
}

impl FrameRenderer<'_, '_> {
    /// Fill a rectangle relative to the board interior, clipped to it
    fn fill(&mut self, x: u16, y: u16, width: u16, color: TermColor) {
        let rect = Rect::new(
            self.board.x.saturating_add(x),
            self.board.y.saturating_add(y),
            width,
            1,
        )
        .intersection(self.board);
        if rect.is_empty() {
            return;
        }
        self.frame
            .render_widget(Block::default().style(Style::default().bg(color)), rect);
    }

    fn row_y(row: usize) -> u16 {
        PAD_Y + row as u16 * ROW_PITCH
    }

    fn peg_x(col: usize) -> u16 {
        PAD_X + col as u16 * PEG_PITCH
    }

    fn menu_lines(menu: &MenuView) -> Vec<Line<'static>> {
        let selected = Style::default()
            .fg(TermColor::Yellow)
            .add_modifier(Modifier::BOLD);
        let plain = Style::default().fg(TermColor::White);
        let key = Style::default().fg(TermColor::DarkGray);
        let heading = Style::default()
            .fg(TermColor::Cyan)
            .add_modifier(Modifier::BOLD);

        let option = |label: String, hotkey: &str, active: bool| {
            let (marker, style) = if active {
                ("▶ ", selected)
            } else {
                ("  ", plain)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label:<12}"), style),
                Span::styled(format!("[{hotkey}]"), key),
            ])
        };

        let mut lines = vec![Line::from(Span::styled("Difficulty", heading))];
        for size in ProblemSize::ALL {
            lines.push(option(
                format!("{} pegs", size.pegs()),
                &size.pegs().to_string(),
                menu.settings.size == size,
            ));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Players", heading)));
        for players in [PlayerCount::One, PlayerCount::Two] {
            let label = match players {
                PlayerCount::One => "1 player".to_string(),
                PlayerCount::Two => "2 players".to_string(),
            };
            lines.push(option(
                label,
                &players.count().to_string(),
                menu.settings.players == players,
            ));
        }

        lines.push(Line::from(""));
        for (label, hotkey) in [
            ("Start / accept", "space"),
            ("Concede", "esc"),
            ("Quit", "q"),
            ("Cycle color", "w/s ↑↓"),
            ("Move", "a/d ←→"),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<16}"), plain),
                Span::styled(hotkey.to_string(), key),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Palette", heading)));
        lines.push(Line::from(
            Color::ALL
                .iter()
                .flat_map(|color| {
                    [
                        Span::styled("  ", Style::default().bg(peg_color(*color))),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::from(Span::styled(
            Color::ALL
                .iter()
                .map(|color| format!("{}  ", color.symbol()))
                .collect::<String>(),
            key,
        )));

        lines.push(Line::from(""));
        lines.push(Self::phase_line(menu));
        lines
    }

    fn phase_line(menu: &MenuView) -> Line<'static> {
        let (text, color) = match menu.phase {
            Phase::SettingUp => (
                "Choose options, then press space".to_string(),
                TermColor::White,
            ),
            Phase::EnteringCode => (
                "Player 2: set the secret code".to_string(),
                TermColor::Cyan,
            ),
            Phase::Guessing => (
                format!("Guesses left: {}", menu.remaining.unwrap_or_default()),
                TermColor::Yellow,
            ),
            Phase::Won => (
                "Code broken! Press space".to_string(),
                TermColor::Green,
            ),
            Phase::Lost => (
                "The code survives. Press space".to_string(),
                TermColor::Red,
            ),
            Phase::Quit => ("Goodbye".to_string(), TermColor::White),
        };
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    }
}

impl Renderer for FrameRenderer<'_, '_> {
    fn draw_peg(&mut self, row: usize, col: usize, paint: Paint) {
        self.fill(Self::peg_x(col), Self::row_y(row), PEG_WIDTH, paint_color(paint));
    }

    fn draw_feedback(&mut self, row: usize, slot: usize, marker: FeedbackMarker) {
        // First half of the slots on the peg line, the rest on the line below
        let per_line = self.pegs.div_ceil(2);
        let (line, index) = if slot < per_line {
            (0, slot)
        } else {
            (1, slot - per_line)
        };
        let x = Self::peg_x(self.pegs) + FEEDBACK_GAP + index as u16 * FEEDBACK_PITCH;
        self.fill(x, Self::row_y(row) + line, FEEDBACK_WIDTH, marker_color(marker));
    }

    fn draw_cursor(&mut self, row: usize, col: usize) {
        self.fill(
            Self::peg_x(col),
            Self::row_y(row) + 1,
            PEG_WIDTH,
            xterm(UiColor::Marker),
        );
    }

    fn draw_menu(&mut self, menu: &MenuView) {
        let panel = Paragraph::new(Self::menu_lines(menu)).block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        self.frame.render_widget(panel, self.menu);

        let stats = menu.stats;
        let mut status = format!(
            "Rounds: {} | Won: {} | Lost: {}",
            stats.rounds_played,
            stats.rounds_won,
            stats.rounds_lost()
        );
        if let Some(guesses) = stats.last_win_guesses {
            status.push_str(&format!(" | Last win: {guesses} guesses"));
        }
        let status = Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(Style::default().fg(TermColor::DarkGray));
        self.frame.render_widget(status, self.status);
    }

    fn reveal_code(&mut self, code: &CodeSequence) {
        for (col, color) in code.iter().enumerate() {
            self.draw_peg(CODE_ROW, col, Paint::Peg(color));
        }
    }
}
