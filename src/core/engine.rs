use std::marker::PhantomData;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::game::Game;
use crate::core::renderer::Renderer;

/// Interactive loop: draw, wait for a key, apply, repeat.
///
/// Blocks on input between frames; nothing changes without a key press.
pub struct Engine<G: Game, R: Renderer<G::State>> {
    game: G,
    _renderer: PhantomData<R>,
}

impl<G: Game, R: Renderer<G::State>> Engine<G, R> {
    pub fn new(game: G) -> Self {
        Self { game, _renderer: PhantomData }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        info!("engine started");
        loop {
            terminal
                .draw(|f| R::render(f, self.game.state()))
                .context("failed to draw frame")?;

            let Event::Key(key) = event::read().context("failed to read terminal event")? else {
                continue;
            };
            if handle_key(&mut self.game, key) == Flow::Quit {
                break;
            }
        }
        info!("engine stopped");
        Ok(self.game)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Feed one key to the game. Only presses count; repeats and releases are dropped here.
fn handle_key<G: Game>(game: &mut G, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return Flow::Quit;
    }

    match game.key_action(key) {
        Some(action) => {
            game.apply(action);
        }
        None => debug!(code = ?key.code, "key not bound"),
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::play_nine::PlayNineGame;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_only_presses_reach_the_game() {
        let mut game = PlayNineGame::new(Some(5));
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('3'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(handle_key(&mut game, release), Flow::Continue);
        assert!(game.state().selected().is_empty());

        let press = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(handle_key(&mut game, press), Flow::Continue);
        assert_eq!(game.state().selected(), &[3]);
    }

    #[test]
    fn test_quit_keys() {
        let mut game = PlayNineGame::new(Some(5));
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handle_key(&mut game, esc), Flow::Quit);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key(&mut game, q), Flow::Quit);
    }
}
