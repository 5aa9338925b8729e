use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::action::{Action, ParseActionError};
use super::round::{Outcome, RoundState};
use super::view::{confirm_control, ConfirmControl};
use crate::core::game::{Game, Transition};

/// One player's session: the round plus the random source that re-rolls it
pub struct PlayNineGame {
    state: RoundState,
    rng: StdRng,
}

impl PlayNineGame {
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let state = RoundState::new(&mut rng);
        info!(?seed, target = state.target(), "new session");
        Self { state, rng }
    }
}

impl Game for PlayNineGame {
    type State = RoundState;
    type Action = Action;
    type ParseError = ParseActionError;

    fn state(&self) -> &RoundState {
        &self.state
    }

    fn key_action(&self, key: KeyEvent) -> Option<Action> {
        if self.state.outcome().is_terminal() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('n') => Some(Action::Reset),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                // Pressing a picked digit again takes it back
                let digit = c as u8 - b'0';
                if self.state.is_selected(digit) {
                    Some(Action::Unselect(digit))
                } else {
                    Some(Action::Select(digit))
                }
            }
            KeyCode::Backspace => self.state.selected().last().map(|&d| Action::Unselect(d)),
            KeyCode::Enter | KeyCode::Char('=') | KeyCode::Char(' ') => {
                match confirm_control(&self.state) {
                    ConfirmControl::Check { enabled: true } => Some(Action::Submit),
                    ConfirmControl::Accept => Some(Action::Accept),
                    ConfirmControl::Check { enabled: false } | ConfirmControl::Reject => None,
                }
            }
            KeyCode::Char('r') => Some(Action::Redraw),
            KeyCode::Char('n') => Some(Action::Reset),
            _ => None,
        }
    }

    fn apply(&mut self, action: Action) -> Transition {
        let transition = match action {
            Action::Select(digit) => self.state.select(digit),
            Action::Unselect(digit) => self.state.unselect(digit),
            Action::Submit => self.state.submit(),
            Action::Accept => self.state.accept(&mut self.rng),
            Action::Redraw => self.state.redraw(&mut self.rng),
            Action::Reset => {
                info!("starting a new game");
                self.state.reset(&mut self.rng)
            }
        };

        debug!(
            %action,
            ?transition,
            target = self.state.target(),
            selected = ?self.state.selected(),
            verdict = ?self.state.verdict(),
            "applied action"
        );

        if transition.is_applied() {
            match self.state.outcome() {
                Outcome::Won => info!(used = self.state.used().len(), "game won"),
                Outcome::Lost => info!(used = self.state.used().len(), "game lost, out of redraws"),
                Outcome::InProgress => {}
            }
        }

        transition
    }
}

#[cfg(test)]
impl PlayNineGame {
    fn from_state(state: RoundState) -> Self {
        Self { state, rng: StdRng::seed_from_u64(1) }
    }
}
