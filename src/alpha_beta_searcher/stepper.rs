//! Time-sliced stepping.
//!
//! A budget here is a soft deadline. The clock is read only at frame
//! boundaries, and a pass that outlives its budget keeps going in further
//! slices until it is done. A single fixed-depth pass has no meaningful
//! partial answer to hand back early.

use std::time::{Duration, Instant};

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::search::{AlphaBeta, Progress, SearchError};
use super::GameModel;

/// Outcome of one time slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceOutcome {
    Completed,
    /// The slice ran out; the search can be resumed with another slice.
    Yielded,
}

/// Called between slices to give control back to whatever hosts the search.
pub trait Scheduler {
    fn reschedule(&mut self);
}

/// Yields the current thread's time slice to the OS scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadYield;

impl Scheduler for ThreadYield {
    fn reschedule(&mut self) {
        std::thread::yield_now();
    }
}

impl<G: GameModel> AlphaBeta<G> {
    /// Runs one slice of at most `budget` (checked at frame boundaries).
    pub fn run_slice(&mut self, budget: Duration) -> Result<SliceOutcome, SearchError> {
        match self.run_until(Instant::now() + budget)? {
            Progress::Completed => Ok(SliceOutcome::Completed),
            Progress::DeadlineReached => Ok(SliceOutcome::Yielded),
        }
    }

    /// Runs the pass in slices of `budget`, yielding the thread between
    /// slices, then hands the best move to `callback` exactly once.
    pub fn step_for_budget<F>(&mut self, budget: Duration, callback: F) -> Result<(), SearchError>
    where
        F: FnOnce(Option<&G::State>),
    {
        self.step_for_budget_with(budget, &mut ThreadYield, callback)
    }

    /// Like [`AlphaBeta::step_for_budget`] with a caller-supplied scheduler.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn step_for_budget_with<S, F>(
        &mut self,
        budget: Duration,
        scheduler: &mut S,
        callback: F,
    ) -> Result<(), SearchError>
    where
        S: Scheduler + ?Sized,
        F: FnOnce(Option<&G::State>),
    {
        let mut slices = 1;
        while self.run_slice(budget)? == SliceOutcome::Yielded {
            debug!(
                "slice {} of {:?} spent at depth {} after {} steps, continuing",
                slices,
                budget,
                self.depth(),
                self.stats().steps
            );
            scheduler.reschedule();
            slices += 1;
        }

        callback(self.best());
        Ok(())
    }
}
