//! Game flow
//!
//! The session controller and its two collaborator contracts: an
//! `IntentSource` feeding it player actions and a `Renderer` drawing its state.

pub mod controller;
pub mod intent;
pub mod render;
pub mod session;

pub use controller::{CodeEntry, CodeSource, Controller, Phase, Settings, Statistics};
pub use intent::{Intent, IntentSource, PlayerCount};
pub use render::{MenuView, Renderer, paint};
pub use session::{DEFAULT_ATTEMPTS, GuessRecord, RoundStatus, Session};

use anyhow::Result;
use rand::Rng;

/// Run the intent loop until the player quits or the source runs dry
///
/// `present` is called once before the first intent and again after every
/// intent has been applied.
///
/// # Errors
///
/// Returns an error if reading an intent or presenting the state fails.
pub fn run<R, S, P>(controller: &mut Controller<R>, source: &mut S, mut present: P) -> Result<()>
where
    R: Rng,
    S: IntentSource + ?Sized,
    P: FnMut(&Controller<R>) -> Result<()>,
{
    present(controller)?;

    while !controller.is_quit() {
        let Some(intent) = source.next_intent()? else {
            break;
        };
        controller.handle(intent);
        present(controller)?;
    }

    Ok(())
}
