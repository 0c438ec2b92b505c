//! TUI application loop

use super::input::KeyboardInput;
use super::rendering::ui;
use crate::game::{self, Controller};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Run the game in the terminal until the player quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into or taken out of raw
/// mode.
pub fn run_tui<R: Rng>(controller: Controller<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(controller) => {
            let stats = controller.statistics();
            info!(
                played = stats.rounds_played,
                won = stats.rounds_won,
                "session finished"
            );
        }
        Err(err) => {
            error!("tui loop failed: {err:#}");
            eprintln!("Error: {err}");
        }
    }

    Ok(())
}

fn run_app<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut controller: Controller<R>,
) -> Result<Controller<R>> {
    terminal.clear()?;
    game::run(&mut controller, &mut KeyboardInput, |c| {
        terminal.draw(|f| ui(f, c))?;
        Ok(())
    })?;
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Intent, Phase, Settings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    #[test]
    fn scripted_round_draws_every_frame() {
        let mut terminal = Terminal::new(TestBackend::new(110, 42)).unwrap();
        let mut controller = Controller::new(Settings::default(), StdRng::seed_from_u64(7));
        let mut source: VecDeque<Intent> =
            [Intent::Submit, Intent::CycleColorUp, Intent::Concede].into();
        let mut frames = 0;

        game::run(&mut controller, &mut source, |c| {
            terminal.draw(|f| ui(f, c))?;
            frames += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(frames, 4);
        assert_eq!(controller.phase(), Phase::Lost);
    }
}
