//! Domain-agnostic alpha-beta search that can be paused and resumed.
//!
//! The game is supplied through the [`GameModel`] trait (or assembled from
//! closures with [`FnGameModel::builder`]). [`AlphaBeta`] runs one pass at a
//! fixed depth, either to completion, step by step, or in time slices.
//! [`DeepeningSession`] runs passes of increasing depth under a time budget.

mod deepening;
mod frame;
mod game_model;
mod prediction;
mod search;
mod stepper;
mod traits;

pub use deepening::{DeepeningOutcome, DeepeningSession, Pass};
pub use game_model::{ConfigurationError, FnGameModel, GameModelBuilder};
pub use prediction::Prediction;
pub use search::{
    AlphaBeta, Progress, SearchConfig, SearchError, SearchStats, StepStatus, TerminalScoring,
};
pub use stepper::{Scheduler, SliceOutcome, ThreadYield};
pub use traits::{GameModel, Score, ScoreReport, SCORE_INFINITY};
