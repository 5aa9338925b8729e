/// Core game interface for the play-nine terminal front end
use std::fmt::Debug;
use std::str::FromStr;

use crossterm::event::KeyEvent;
use serde::Serialize;

/// Whether an action changed anything.
///
/// Games are total: an action that breaks a rule is `Ignored` rather than
/// reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// Main game trait driven by both the interactive engine and the script runner
pub trait Game {
    /// Read-only state handed to renderers and written out as snapshots
    type State: Serialize;

    /// Player intent, parseable from a script line
    type Action: FromStr<Err = Self::ParseError> + Debug + Copy;

    /// Why a script line did not name an action
    type ParseError: std::error::Error + Send + Sync + 'static;

    /// Current state
    fn state(&self) -> &Self::State;

    /// Translate a key press into an action, given the current state
    fn key_action(&self, key: KeyEvent) -> Option<Self::Action>;

    /// Apply an action, including any follow-up bookkeeping, atomically
    fn apply(&mut self, action: Self::Action) -> Transition;
}
