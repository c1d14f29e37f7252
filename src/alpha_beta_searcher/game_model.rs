//! A [`GameModel`] assembled from plain closures.
//!
//! Useful when the rules already exist as free functions and wrapping them in
//! a dedicated type would be noise. Presence of all three functions is checked
//! once, when the model is built.

use std::fmt::Debug;

use thiserror::Error;

use super::{GameModel, ScoreReport};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("game model is missing required function `{0}`")]
    MissingFunction(&'static str),
}

type GenerateMovesFn<S> = Box<dyn Fn(&S) -> Vec<S> + Send + Sync>;
type CheckWinConditionsFn<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;
type ScoreFn<S> = Box<dyn Fn(&S, ScoreReport) + Send + Sync>;

pub struct FnGameModel<S> {
    generate_moves: GenerateMovesFn<S>,
    check_win_conditions: CheckWinConditionsFn<S>,
    score_function: ScoreFn<S>,
}

impl<S: Clone + Debug> FnGameModel<S> {
    pub fn builder() -> GameModelBuilder<S> {
        GameModelBuilder::default()
    }
}

impl<S: Clone + Debug> GameModel for FnGameModel<S> {
    type State = S;

    fn generate_moves(&self, state: &S) -> Vec<S> {
        (self.generate_moves)(state)
    }

    fn check_win_conditions(&self, state: &S) -> bool {
        (self.check_win_conditions)(state)
    }

    fn score(&self, state: &S, report: ScoreReport) {
        (self.score_function)(state, report)
    }
}

pub struct GameModelBuilder<S> {
    generate_moves: Option<GenerateMovesFn<S>>,
    check_win_conditions: Option<CheckWinConditionsFn<S>>,
    score_function: Option<ScoreFn<S>>,
}

impl<S> Default for GameModelBuilder<S> {
    fn default() -> Self {
        Self {
            generate_moves: None,
            check_win_conditions: None,
            score_function: None,
        }
    }
}

impl<S: Clone + Debug> GameModelBuilder<S> {
    pub fn generate_moves<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> Vec<S> + Send + Sync + 'static,
    {
        self.generate_moves = Some(Box::new(f));
        self
    }

    pub fn check_win_conditions<F>(mut self, f: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.check_win_conditions = Some(Box::new(f));
        self
    }

    pub fn score_function<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, ScoreReport) + Send + Sync + 'static,
    {
        self.score_function = Some(Box::new(f));
        self
    }

    /// Fails with the first missing function, checked in declaration order.
    pub fn build(self) -> Result<FnGameModel<S>, ConfigurationError> {
        let generate_moves = self
            .generate_moves
            .ok_or(ConfigurationError::MissingFunction("generate_moves"))?;
        let check_win_conditions = self
            .check_win_conditions
            .ok_or(ConfigurationError::MissingFunction("check_win_conditions"))?;
        let score_function = self
            .score_function
            .ok_or(ConfigurationError::MissingFunction("score_function"))?;

        Ok(FnGameModel {
            generate_moves,
            check_win_conditions,
            score_function,
        })
    }
}
