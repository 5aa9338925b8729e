use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand_core::RngCore;
use serde::Serialize;

use crate::core::game::Transition;

/// Digits the player can pick from
pub const DIGITS: RangeInclusive<u8> = 1..=9;

/// Redraw budget handed out with every fresh round
pub const INITIAL_REDRAWS: u8 = 5;

/// Result of the most recent submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Roll a new star count, uniform over 1..=9.
pub fn draw_target<R: RngCore + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(DIGITS)
}

/// State of a single Play Nine session.
///
/// Every transition runs to completion, including its terminal-condition
/// check, before returning; callers never see a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    target: u8,
    selected: Vec<u8>,
    used: BTreeSet<u8>,
    verdict: Verdict,
    redraws_remaining: u8,
    outcome: Outcome,
}

impl RoundState {
    pub fn new<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self {
            target: draw_target(rng),
            selected: Vec::new(),
            used: BTreeSet::new(),
            verdict: Verdict::Unknown,
            redraws_remaining: INITIAL_REDRAWS,
            outcome: Outcome::InProgress,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Digits of the active guess, in the order they were picked
    pub fn selected(&self) -> &[u8] {
        &self.selected
    }

    pub fn used(&self) -> &BTreeSet<u8> {
        &self.used
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn redraws_remaining(&self) -> u8 {
        self.redraws_remaining
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn selected_sum(&self) -> u32 {
        self.selected.iter().map(|&d| u32::from(d)).sum()
    }

    pub fn is_selected(&self, digit: u8) -> bool {
        self.selected.contains(&digit)
    }

    pub fn is_used(&self, digit: u8) -> bool {
        self.used.contains(&digit)
    }

    pub fn select(&mut self, digit: u8) -> Transition {
        if self.outcome.is_terminal()
            || !DIGITS.contains(&digit)
            || self.is_selected(digit)
            || self.is_used(digit)
        {
            return Transition::Ignored;
        }
        self.selected.push(digit);
        self.verdict = Verdict::Unknown;
        Transition::Applied
    }

    /// Drops `digit` from the guess. An absent digit still clears the verdict.
    pub fn unselect(&mut self, digit: u8) -> Transition {
        if self.outcome.is_terminal() {
            return Transition::Ignored;
        }
        self.selected.retain(|&d| d != digit);
        self.verdict = Verdict::Unknown;
        Transition::Applied
    }

    pub fn submit(&mut self) -> Transition {
        if self.outcome.is_terminal() {
            return Transition::Ignored;
        }
        self.verdict = if self.selected_sum() == u32::from(self.target) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        Transition::Applied
    }

    /// Retires the current guess. Does not re-check the verdict; gating on
    /// `Verdict::Correct` is the caller's job. Only the win condition is
    /// evaluated here.
    pub fn accept<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if self.outcome.is_terminal() {
            return Transition::Ignored;
        }
        self.used.extend(self.selected.drain(..));
        self.verdict = Verdict::Unknown;
        self.target = draw_target(rng);
        if self.used.len() == DIGITS.len() {
            self.outcome = Outcome::Won;
        }
        Transition::Applied
    }

    /// Spends one redraw. Only the loss condition is evaluated here.
    pub fn redraw<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if self.outcome.is_terminal() || self.redraws_remaining == 0 {
            return Transition::Ignored;
        }
        self.redraws_remaining -= 1;
        self.selected.clear();
        self.verdict = Verdict::Unknown;
        self.target = draw_target(rng);
        if self.redraws_remaining == 0 {
            self.outcome = Outcome::Lost;
        }
        Transition::Applied
    }

    pub fn reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Transition {
        *self = Self::new(rng);
        Transition::Applied
    }
}

#[cfg(test)]
impl RoundState {
    /// Build a mid-game state directly, bypassing the random source.
    pub(crate) fn with_parts(target: u8, used: &[u8], redraws_remaining: u8) -> Self {
        Self {
            target,
            selected: Vec::new(),
            used: used.iter().copied().collect(),
            verdict: Verdict::Unknown,
            redraws_remaining,
            outcome: Outcome::InProgress,
        }
    }
}
