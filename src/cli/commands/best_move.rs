//! Best move command - run one full pass at a fixed depth.

use std::time::Instant;

use structopt::StructOpt;

use super::util::{format_score, print_prediction, print_result, print_stats, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut engine = self.game.engine(self.depth);
        let started = Instant::now();

        let result = engine.run_to_completion(|best| {
            print_result(best, None);
        });
        if let Err(err) = result {
            eprintln!("Search failed: {}", err);
            return;
        }

        if let Some(score) = engine.best_score() {
            println!("score: {}", format_score(score));
        }
        print_prediction(&engine.prediction());
        print_stats(engine.stats());
        println!("took {:?}", started.elapsed());
    }
}
