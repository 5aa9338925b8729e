/// Read-only derivations the renderer and key mapping share
use super::round::{Outcome, RoundState, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitMark {
    Available,
    Selected,
    Used,
}

/// The button between the stars and the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmControl {
    Check { enabled: bool },
    Accept,
    Reject,
}

impl ConfirmControl {
    pub fn glyph(self) -> &'static str {
        match self {
            ConfirmControl::Check { .. } => "=",
            ConfirmControl::Accept => "✓",
            ConfirmControl::Reject => "✗",
        }
    }
}

pub fn digit_mark(state: &RoundState, digit: u8) -> DigitMark {
    // Used wins over selected
    if state.is_used(digit) {
        DigitMark::Used
    } else if state.is_selected(digit) {
        DigitMark::Selected
    } else {
        DigitMark::Available
    }
}

pub fn confirm_control(state: &RoundState) -> ConfirmControl {
    match state.verdict() {
        Verdict::Unknown => ConfirmControl::Check { enabled: !state.selected().is_empty() },
        Verdict::Correct => ConfirmControl::Accept,
        Verdict::Incorrect => ConfirmControl::Reject,
    }
}

pub fn can_redraw(state: &RoundState) -> bool {
    state.redraws_remaining() > 0 && !state.outcome().is_terminal()
}

pub fn banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won => Some("You Won!!"),
        Outcome::Lost => Some("You Lost!!"),
    }
}
