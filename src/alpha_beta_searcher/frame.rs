//! One node of the explicit search stack.
//!
//! The recursive alpha-beta call tree is replaced by a `Vec<Frame>` so that a
//! search can stop between any two steps and pick up later. Each frame keeps
//! what the recursive version kept in its locals: the window, the candidate
//! moves, a cursor into them and the best child seen so far.

use super::{Score, SCORE_INFINITY};

#[derive(Clone, Debug)]
pub(crate) struct Frame<S> {
    pub state: S,
    pub remaining_depth: u8,
    pub alpha: Score,
    pub beta: Score,
    pub maximizing: bool,
    /// Generated once, on the first visit after the leaf checks.
    pub moves: Option<Vec<S>>,
    pub cursor: usize,
    pub best_score: Option<Score>,
    /// Best child first, leaf last.
    pub line: Vec<S>,
}

impl<S: Clone> Frame<S> {
    pub fn root(state: S, depth: u8) -> Self {
        Self::new(state, depth, -SCORE_INFINITY, SCORE_INFINITY, true)
    }

    fn new(state: S, remaining_depth: u8, alpha: Score, beta: Score, maximizing: bool) -> Self {
        Self {
            state,
            remaining_depth,
            alpha,
            beta,
            maximizing,
            moves: None,
            cursor: 0,
            best_score: None,
            line: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.moves.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.moves
            .as_ref()
            .map_or(true, |moves| self.cursor >= moves.len())
    }

    pub fn is_cut(&self) -> bool {
        self.alpha >= self.beta
    }

    /// Creates the frame for the move under the cursor and advances the cursor.
    /// The child inherits the current window and plays the other side.
    pub fn next_child(&mut self) -> Option<Frame<S>> {
        let state = self.moves.as_ref()?.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(Frame::new(
            state,
            self.remaining_depth.saturating_sub(1),
            self.alpha,
            self.beta,
            !self.maximizing,
        ))
    }

    /// Score of this frame once it has no more children to search.
    pub fn value(&self) -> Score {
        self.best_score
            .unwrap_or_else(|| Self::worst_for(self.maximizing))
    }

    /// Score of a position where `maximizing`'s side cannot improve anything:
    /// no moves to make, or the opponent has just won.
    pub fn worst_for(maximizing: bool) -> Score {
        if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        }
    }

    /// Folds a finished child into this frame. The first child is always
    /// recorded; later ones replace it only on strict improvement.
    pub fn absorb(&mut self, child: Frame<S>, score: Score) {
        let improves = match self.best_score {
            None => true,
            Some(best) if self.maximizing => score > best,
            Some(best) => score < best,
        };

        if improves {
            self.best_score = Some(score);
            self.line.clear();
            self.line.push(child.state);
            self.line.extend(child.line);
        }

        if self.maximizing {
            self.alpha = self.alpha.max(score);
        } else {
            self.beta = self.beta.min(score);
        }
    }
}
