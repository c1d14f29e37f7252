//! Chomp, the subtraction game used to exercise the search.
//!
//! Players alternately bite 1 to `max_chomp` units off a line. Whoever eats
//! the last unit wins. Positions whose length is a multiple of
//! `max_chomp + 1` are lost for the player to move.
//!
//! Every state records the bite that produced it and the player who moves
//! next, so a state doubles as the move that led to it.

use std::fmt;

use crate::alpha_beta_searcher::{
    ConfigurationError, FnGameModel, GameModel, Score, ScoreReport,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChompState {
    pub line_length: u32,
    /// Length bitten off by the move that produced this state; `None` at the start.
    pub chomped_length: Option<u32>,
    /// The player to move.
    pub player: Player,
}

impl ChompState {
    pub fn new(line_length: u32) -> Self {
        Self {
            line_length,
            chomped_length: None,
            player: Player::First,
        }
    }

    /// Bites `length` off the line. A bite longer than the line eats all of it.
    pub fn chomp(&self, length: u32) -> Self {
        Self {
            line_length: self.line_length.saturating_sub(length),
            chomped_length: Some(length),
            player: self.player.opponent(),
        }
    }
}

impl fmt::Display for ChompState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chomped_length {
            Some(chomped) => write!(
                f,
                "chomp {} -> line {}, {} to move",
                chomped, self.line_length, self.player
            ),
            None => write!(f, "line {}, {} to move", self.line_length, self.player),
        }
    }
}

/// Legal successors of `state`, smallest bite first.
pub fn successors(state: &ChompState, max_chomp: u32) -> Vec<ChompState> {
    (1..=max_chomp.min(state.line_length))
        .map(|length| state.chomp(length))
        .collect()
}

/// Chomp with a flat evaluation: every scored leaf is worth 0, so only won
/// and lost positions tell moves apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chomp {
    pub max_chomp: u32,
}

impl Default for Chomp {
    fn default() -> Self {
        Self { max_chomp: 3 }
    }
}

impl GameModel for Chomp {
    type State = ChompState;

    fn generate_moves(&self, state: &ChompState) -> Vec<ChompState> {
        successors(state, self.max_chomp)
    }

    fn check_win_conditions(&self, state: &ChompState) -> bool {
        state.line_length == 0
    }

    fn score(&self, _state: &ChompState, report: ScoreReport) {
        report.report(0);
    }
}

/// The same rules assembled from closures, with a leaf heuristic that favors
/// leaving the opponent on a multiple of `max_chomp + 1`.
///
/// Scores are from `maximizer`'s point of view, which must be the player to
/// move at the root of the search.
pub fn heuristic_model(
    max_chomp: u32,
    maximizer: Player,
) -> Result<FnGameModel<ChompState>, ConfigurationError> {
    let period = max_chomp + 1;
    FnGameModel::builder()
        .generate_moves(move |state: &ChompState| successors(state, max_chomp))
        .check_win_conditions(|state: &ChompState| state.line_length == 0)
        .score_function(move |state: &ChompState, report: ScoreReport| {
            let lost_for_mover = state.line_length % period == 0;
            let maximizer_to_move = state.player == maximizer;
            let score: Score = if lost_for_mover == maximizer_to_move {
                -100
            } else {
                100
            };
            report.report(score);
        })
        .build()
}
