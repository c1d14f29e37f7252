//! Deepen command - iterative deepening under a time budget.

use std::sync::Arc;
use std::time::Duration;

use alphabeta::alpha_beta_searcher::DeepeningSession;
use structopt::StructOpt;

use super::util::{print_prediction, print_result, print_stats, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct DeepenArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "1")]
    pub start_depth: u8,
    /// Total time for all passes in milliseconds.
    #[structopt(short, long, default_value = "500")]
    pub budget_ms: u64,
}

impl Command for DeepenArgs {
    fn execute(self) {
        let session = DeepeningSession::with_config(
            Arc::new(self.game.model()),
            self.game.root(),
            self.game.config(self.start_depth),
        );

        let result = session.increment_depth_for_budget(
            Duration::from_millis(self.budget_ms),
            |outcome| {
                match outcome.depth() {
                    Some(depth) => println!("completed depth: {}", depth),
                    None => println!("no pass completed within the budget"),
                }
                print_result(outcome.best(), outcome.best_score());
                print_prediction(&outcome.prediction());
                if let Some(pass) = &outcome.completed {
                    print_stats(pass.engine.stats());
                }
                match &outcome.incomplete {
                    Some(pass) => println!(
                        "next depth: {} ({} steps taken)",
                        pass.depth,
                        pass.engine.stats().steps
                    ),
                    None => println!("maximum depth reached"),
                }
            },
        );

        if let Err(err) = result {
            eprintln!("Search failed: {}", err);
        }
    }
}
