//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, deepen::DeepenArgs, step::StepArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chomp",
    about = "Resumable alpha-beta search, demonstrated on the game of Chomp"
)]
pub enum ChompCli {
    #[structopt(
        name = "best-move",
        about = "Search the line of `--length` (default: 10) to a fixed `--depth` (default: 4) and print the best move and the predicted line."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "step",
        about = "Run the same fixed-depth search in time slices of `--budget-ms` (default: 1), yielding the thread between slices."
    )]
    Step(StepArgs),
    #[structopt(
        name = "deepen",
        about = "Search at increasing depths from `--start-depth` (default: 1) until `--budget-ms` (default: 500) is spent, and report the deepest completed pass."
    )]
    Deepen(DeepenArgs),
}

impl crate::cli::commands::Command for ChompCli {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Step(cmd),
            Deepen(cmd),
        }
    }
}
