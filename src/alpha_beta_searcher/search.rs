//! Resumable alpha-beta search.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once alpha meets beta at a node, none of its
//! remaining moves can change the result and they are never generated or scored. The root
//! maximizes and the sides alternate by tree level.
//!
//! # Explicit Stack
//!
//! Instead of recursing, the search keeps its call tree in a `Vec<Frame>` and advances it one
//! unit of work per [`AlphaBeta::step`]: enter a frame (terminal test, depth test or move
//! generation), descend into the next child, or fold a finished frame into its parent. Because
//! all traversal state lives in the frames, a search can be suspended between any two steps.
//! This is what the time-sliced stepper and the iterative deepening session build on.
//!
//! # Asynchronous Scoring
//!
//! Leaf scores arrive through a [`ScoreReport`]. If the game model reports before returning, the
//! score is folded in within the same step. Otherwise the step returns
//! [`StepStatus::AwaitingScore`] and the search stays parked on that leaf until the report
//! arrives. At most one score request is outstanding at a time, so evaluation order stays
//! strictly left to right.

use std::sync::Arc;
use std::time::Instant;

use futures::channel::oneshot;
use futures::executor::block_on;
use log::{debug, trace};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::frame::Frame;
use super::game_model::ConfigurationError;
use super::prediction::{build_prediction, Prediction};
use super::{GameModel, Score, ScoreReport};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("game model dropped a score request without reporting a score")]
    ScoreAbandoned,
}

/// How states that pass the win-condition test are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminalScoring {
    /// The side that produced the terminal state has won: `SCORE_INFINITY` for the
    /// maximizer, `-SCORE_INFINITY` for the minimizer. The game model is not asked.
    #[default]
    Decisive,
    /// Terminal states are scored by the game model like any depth-limited leaf.
    Evaluate,
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub terminal_scoring: TerminalScoring,
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            terminal_scoring: TerminalScoring::default(),
        }
    }
}

/// Outcome of a single [`AlphaBeta::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Continuing,
    /// A score was requested and has not been reported yet.
    AwaitingScore,
    Completed,
}

/// Outcome of [`AlphaBeta::run_until`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Completed,
    DeadlineReached,
}

/// Statistics collected during one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: usize,
    pub frames_entered: usize,
    pub move_generations: usize,
    pub leaves_scored: usize,
    pub terminal_nodes: usize,
    pub depth_limited_leaves: usize,
    pub cutoffs: usize,
}

/// What a step did internally. Only descents and propagations are frame
/// boundaries where a driver may check the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Advance {
    Generated,
    Descended,
    Propagated,
    AwaitingScore,
    Completed,
}

/// One alpha-beta pass over a fixed depth, held on an explicit stack.
pub struct AlphaBeta<G: GameModel> {
    model: Arc<G>,
    config: SearchConfig,
    root_state: G::State,
    stack: Vec<Frame<G::State>>,
    pending: Option<oneshot::Receiver<Score>>,
    completed: Option<Frame<G::State>>,
    root_score: Option<Score>,
    stats: SearchStats,
}

impl<G: GameModel> AlphaBeta<G> {
    pub fn new(model: G, state: G::State, depth: u8) -> Self {
        Self::with_config(model, state, SearchConfig::new(depth))
    }

    pub fn with_config(model: G, state: G::State, config: SearchConfig) -> Self {
        Self::with_shared_model(Arc::new(model), state, config)
    }

    /// Like [`AlphaBeta::with_config`], for passes that share one game model.
    pub fn with_shared_model(model: Arc<G>, state: G::State, config: SearchConfig) -> Self {
        let mut search = Self {
            model,
            config,
            root_state: state.clone(),
            stack: Vec::new(),
            pending: None,
            completed: None,
            root_score: None,
            stats: SearchStats::default(),
        };
        search.setup(state, config.depth);
        search
    }

    /// Discards any pass in progress and starts over from a single root frame.
    pub fn setup(&mut self, state: G::State, depth: u8) {
        debug!("alpha-beta setup at depth {}", depth);
        self.config.depth = depth;
        self.root_state = state.clone();
        self.stack.clear();
        self.stack.push(Frame::root(state, depth));
        self.pending = None;
        self.completed = None;
        self.root_score = None;
        self.stats = SearchStats {
            frames_entered: 1,
            ..SearchStats::default()
        };
    }

    pub fn model(&self) -> &Arc<G> {
        &self.model
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn root_state(&self) -> &G::State {
        &self.root_state
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn is_complete(&self) -> bool {
        self.completed.is_some()
    }

    /// True once a completed pass never stopped at the depth limit, i.e. it
    /// saw every line to its end and a deeper pass cannot differ.
    pub fn is_exhaustive(&self) -> bool {
        self.is_complete() && self.stats.depth_limited_leaves == 0
    }

    /// The best root move of the completed pass. `None` while the pass is
    /// running, or when the root was itself a leaf or had no moves.
    pub fn best(&self) -> Option<&G::State> {
        self.completed.as_ref().and_then(|root| root.line.first())
    }

    pub fn best_score(&self) -> Option<Score> {
        self.root_score
    }

    pub fn prediction(&self) -> Prediction<G::State> {
        build_prediction(self.completed.as_ref())
    }

    /// Advances the search by one unit of work.
    pub fn step(&mut self) -> Result<StepStatus, SearchError> {
        Ok(match self.advance()? {
            Advance::AwaitingScore => StepStatus::AwaitingScore,
            Advance::Completed => StepStatus::Completed,
            Advance::Generated | Advance::Descended | Advance::Propagated => {
                StepStatus::Continuing
            }
        })
    }

    /// Blocks until the outstanding score request, if any, is answered.
    pub fn wait_for_score(&mut self) -> Result<(), SearchError> {
        if let Some(receiver) = self.pending.take() {
            let score = block_on(receiver).map_err(|_| SearchError::ScoreAbandoned)?;
            self.finish_frame(score);
        }
        Ok(())
    }

    /// Steps until the pass completes, waiting on scores as needed.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn run(&mut self) -> Result<(), SearchError> {
        loop {
            match self.advance()? {
                Advance::Completed => return Ok(()),
                Advance::AwaitingScore => self.wait_for_score()?,
                Advance::Generated | Advance::Descended | Advance::Propagated => {}
            }
        }
    }

    /// Runs the pass to completion and hands the best move to `callback`.
    /// The callback runs exactly once unless the search fails.
    pub fn run_to_completion<F>(&mut self, callback: F) -> Result<(), SearchError>
    where
        F: FnOnce(Option<&G::State>),
    {
        self.run()?;
        callback(self.best());
        Ok(())
    }

    /// Steps until the pass completes or `deadline` has passed. The clock is
    /// only read at frame boundaries, and at least one step is always taken.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn run_until(&mut self, deadline: Instant) -> Result<Progress, SearchError> {
        loop {
            match self.advance()? {
                Advance::Completed => return Ok(Progress::Completed),
                Advance::AwaitingScore => {
                    if Instant::now() >= deadline {
                        return Ok(Progress::DeadlineReached);
                    }
                    self.wait_for_score()?;
                }
                Advance::Descended | Advance::Propagated => {
                    if Instant::now() >= deadline {
                        return Ok(Progress::DeadlineReached);
                    }
                }
                Advance::Generated => {}
            }
        }
    }

    fn advance(&mut self) -> Result<Advance, SearchError> {
        if let Some(receiver) = self.pending.as_mut() {
            return match receiver.try_recv() {
                Ok(Some(score)) => {
                    self.pending = None;
                    self.stats.steps += 1;
                    Ok(self.finish_frame(score))
                }
                Ok(None) => Ok(Advance::AwaitingScore),
                Err(oneshot::Canceled) => {
                    self.pending = None;
                    Err(SearchError::ScoreAbandoned)
                }
            };
        }

        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return Ok(Advance::Completed),
        };
        self.stats.steps += 1;

        if !frame.is_expanded() {
            return self.enter_frame();
        }

        if !frame.is_cut() {
            if let Some(child) = frame.next_child() {
                trace!("descend to {:?} ({} left)", child.state, child.remaining_depth);
                self.stats.frames_entered += 1;
                self.stack.push(child);
                return Ok(Advance::Descended);
            }
        } else if !frame.is_exhausted() {
            self.stats.cutoffs += 1;
        }

        let value = frame.value();
        Ok(self.finish_frame(value))
    }

    /// First visit of the top frame: leaf checks, then move generation.
    fn enter_frame(&mut self) -> Result<Advance, SearchError> {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return Ok(Advance::Completed),
        };

        if self.model.check_win_conditions(&frame.state) {
            self.stats.terminal_nodes += 1;
            if self.config.terminal_scoring == TerminalScoring::Decisive {
                let value = Frame::<G::State>::worst_for(frame.maximizing);
                return Ok(self.finish_frame(value));
            }
            return self.request_score();
        }

        if frame.remaining_depth == 0 {
            self.stats.depth_limited_leaves += 1;
            return self.request_score();
        }

        frame.moves = Some(self.model.generate_moves(&frame.state));
        self.stats.move_generations += 1;
        Ok(Advance::Generated)
    }

    fn request_score(&mut self) -> Result<Advance, SearchError> {
        let frame = match self.stack.last() {
            Some(frame) => frame,
            None => return Ok(Advance::Completed),
        };

        let (report, mut receiver) = ScoreReport::channel();
        self.model.score(&frame.state, report);
        self.stats.leaves_scored += 1;

        match receiver.try_recv() {
            Ok(Some(score)) => Ok(self.finish_frame(score)),
            Ok(None) => {
                self.pending = Some(receiver);
                Ok(Advance::AwaitingScore)
            }
            Err(oneshot::Canceled) => Err(SearchError::ScoreAbandoned),
        }
    }

    /// Pops the top frame with its final score and folds it into the parent.
    fn finish_frame(&mut self, score: Score) -> Advance {
        let frame = match self.stack.pop() {
            Some(frame) => frame,
            None => return Advance::Completed,
        };

        match self.stack.last_mut() {
            Some(parent) => {
                parent.absorb(frame, score);
                Advance::Propagated
            }
            None => {
                debug!(
                    "alpha-beta pass complete at depth {}: score {}, {:?}",
                    self.config.depth, score, self.stats
                );
                self.completed = Some(frame);
                self.root_score = Some(score);
                Advance::Completed
            }
        }
    }
}
