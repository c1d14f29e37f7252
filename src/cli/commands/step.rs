//! Step command - run a fixed-depth pass in time slices.

use std::time::Duration;

use alphabeta::alpha_beta_searcher::Scheduler;
use structopt::StructOpt;

use super::util::{print_prediction, print_result, print_stats, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct StepArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    /// Length of one slice in milliseconds.
    #[structopt(short, long, default_value = "1")]
    pub budget_ms: u64,
}

/// Yields the thread between slices and counts them.
#[derive(Default)]
struct SliceCounter {
    slices: usize,
}

impl Scheduler for SliceCounter {
    fn reschedule(&mut self) {
        self.slices += 1;
        std::thread::yield_now();
    }
}

impl Command for StepArgs {
    fn execute(self) {
        let mut engine = self.game.engine(self.depth);
        let mut scheduler = SliceCounter::default();
        let budget = Duration::from_millis(self.budget_ms);

        let result = engine.step_for_budget_with(budget, &mut scheduler, |best| {
            print_result(best, None);
        });
        if let Err(err) = result {
            eprintln!("Search failed: {}", err);
            return;
        }

        println!(
            "finished after {} slice(s) of {:?}",
            scheduler.slices + 1,
            budget
        );
        print_prediction(&engine.prediction());
        print_stats(engine.stats());
    }
}
