//! Iterative deepening under a time budget.
//!
//! Complete passes are run at depth d, d+1, d+2, ... against one shared
//! deadline. The outcome holds the deepest completed pass, which is the
//! answer, and the pass that was in flight when time ran out. That pass is
//! still an ordinary [`AlphaBeta`] and can be resumed by stepping it further.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::prediction::Prediction;
use super::search::{AlphaBeta, Progress, SearchConfig, SearchError};
use super::{GameModel, Score};

/// One pass of the session and the depth it searches.
pub struct Pass<G: GameModel> {
    pub depth: u8,
    pub engine: AlphaBeta<G>,
}

pub struct DeepeningOutcome<G: GameModel> {
    /// Deepest pass that finished within the budget.
    pub completed: Option<Pass<G>>,
    /// The pass after `completed`, interrupted or not yet started. `None` only
    /// when the completed pass was already at the maximum depth.
    pub incomplete: Option<Pass<G>>,
}

impl<G: GameModel> DeepeningOutcome<G> {
    pub fn depth(&self) -> Option<u8> {
        self.completed.as_ref().map(|pass| pass.depth)
    }

    pub fn best(&self) -> Option<&G::State> {
        self.completed.as_ref().and_then(|pass| pass.engine.best())
    }

    pub fn best_score(&self) -> Option<Score> {
        self.completed
            .as_ref()
            .and_then(|pass| pass.engine.best_score())
    }

    pub fn prediction(&self) -> Prediction<G::State> {
        self.completed
            .as_ref()
            .map_or_else(Prediction::empty, |pass| pass.engine.prediction())
    }
}

pub struct DeepeningSession<G: GameModel> {
    model: Arc<G>,
    root_state: G::State,
    config: SearchConfig,
}

impl<G: GameModel> DeepeningSession<G> {
    pub fn new(model: G, state: G::State, start_depth: u8) -> Self {
        Self::with_config(Arc::new(model), state, SearchConfig::new(start_depth))
    }

    /// `config.depth` is the depth of the first pass.
    pub fn with_config(model: Arc<G>, state: G::State, config: SearchConfig) -> Self {
        Self {
            model,
            root_state: state,
            config,
        }
    }

    /// A session over the same model, root and configuration as `engine`.
    pub fn from_engine(engine: &AlphaBeta<G>) -> Self {
        Self::with_config(
            Arc::clone(engine.model()),
            engine.root_state().clone(),
            engine.config(),
        )
    }

    pub fn start_depth(&self) -> u8 {
        self.config.depth
    }

    fn pass(&self, depth: u8) -> Pass<G> {
        let config = SearchConfig {
            depth,
            ..self.config
        };
        Pass {
            depth,
            engine: AlphaBeta::with_shared_model(
                Arc::clone(&self.model),
                self.root_state.clone(),
                config,
            ),
        }
    }

    /// Deepens until `budget` is spent, then invokes `callback` exactly once.
    ///
    /// Stops early once a completed pass saw every line to its end. Deeper
    /// passes would replay it unchanged, so the next pass is returned unstarted.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn increment_depth_for_budget<F>(
        &self,
        budget: Duration,
        callback: F,
    ) -> Result<(), SearchError>
    where
        F: FnOnce(DeepeningOutcome<G>),
    {
        let deadline = Instant::now() + budget;
        let mut completed: Option<Pass<G>> = None;
        let mut current = self.pass(self.config.depth);

        let incomplete = loop {
            match current.engine.run_until(deadline)? {
                Progress::DeadlineReached => {
                    debug!(
                        "deepening budget of {:?} spent during depth {}",
                        budget, current.depth
                    );
                    break Some(current);
                }
                Progress::Completed => {
                    let next_depth = current.depth.checked_add(1);
                    let exhaustive = current.engine.is_exhaustive();
                    debug!(
                        "deepening completed depth {} (score {:?}, exhaustive: {})",
                        current.depth,
                        current.engine.best_score(),
                        exhaustive
                    );
                    completed = Some(current);

                    match next_depth {
                        None => break None,
                        Some(depth) if exhaustive => break Some(self.pass(depth)),
                        Some(depth) => current = self.pass(depth),
                    }
                }
            }
        };

        callback(DeepeningOutcome {
            completed,
            incomplete,
        });
        Ok(())
    }
}

impl<G: GameModel> AlphaBeta<G> {
    /// Iterative deepening from this engine's root, starting at its depth.
    /// See [`DeepeningSession::increment_depth_for_budget`].
    pub fn increment_depth_for_budget<F>(
        &self,
        budget: Duration,
        callback: F,
    ) -> Result<(), SearchError>
    where
        F: FnOnce(DeepeningOutcome<G>),
    {
        DeepeningSession::from_engine(self).increment_depth_for_budget(budget, callback)
    }
}
