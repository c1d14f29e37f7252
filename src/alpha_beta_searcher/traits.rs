//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

use futures::channel::oneshot;

/// Score of a position. Higher scores favor the maximizing side.
pub type Score = i32;

/// Upper bound of the search window. A won position for the maximizing side
/// scores `SCORE_INFINITY`, a lost one `-SCORE_INFINITY`.
pub const SCORE_INFINITY: Score = i32::MAX;

/// The rules of a two-player zero-sum game, as seen by the search.
///
/// The engine never looks inside a state. A "move" is simply the state it
/// produces, and whose turn it is follows purely from tree depth: the root
/// maximizes, its children minimize, and so on.
pub trait GameModel {
    type State: Clone + Debug;

    /// Returns the states reachable in one move, in the order they should be searched.
    /// Must be deterministic: the order decides which subtrees get pruned.
    fn generate_moves(&self, state: &Self::State) -> Vec<Self::State>;

    /// Returns true if the game is over in this state.
    fn check_win_conditions(&self, state: &Self::State) -> bool;

    /// Scores a leaf. The score is delivered through `report`, either before
    /// returning or later from anywhere else (including another thread).
    fn score(&self, state: &Self::State, report: ScoreReport);
}

/// One-shot handle used by a [`GameModel`] to deliver a leaf score.
///
/// Dropping the handle without calling [`ScoreReport::report`] abandons the
/// request and the search fails with `SearchError::ScoreAbandoned`.
#[derive(Debug)]
pub struct ScoreReport {
    sender: oneshot::Sender<Score>,
}

impl ScoreReport {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Score>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Delivers the score. Reporting to a search that has since been dropped is a no-op.
    pub fn report(self, score: Score) {
        let _ = self.sender.send(score);
    }
}
