//! Shared utilities for CLI commands.

use alphabeta::alpha_beta_searcher::{
    AlphaBeta, Prediction, Score, SearchConfig, SearchStats, TerminalScoring, SCORE_INFINITY,
};
use alphabeta::chomp::{Chomp, ChompState};
use structopt::StructOpt;

/// Game arguments shared by every command.
#[derive(StructOpt)]
pub struct GameArgs {
    /// Length of the line to eat.
    #[structopt(short, long, default_value = "10")]
    pub length: u32,
    /// Largest bite allowed per move.
    #[structopt(long, default_value = "3")]
    pub max_chomp: u32,
    /// Ask the score function about finished games instead of treating them as won.
    #[structopt(long)]
    pub evaluate_terminals: bool,
}

impl GameArgs {
    pub(crate) fn model(&self) -> Chomp {
        Chomp {
            max_chomp: self.max_chomp,
        }
    }

    pub(crate) fn root(&self) -> ChompState {
        ChompState::new(self.length)
    }

    pub(crate) fn config(&self, depth: u8) -> SearchConfig {
        SearchConfig {
            depth,
            terminal_scoring: if self.evaluate_terminals {
                TerminalScoring::Evaluate
            } else {
                TerminalScoring::Decisive
            },
        }
    }

    pub(crate) fn engine(&self, depth: u8) -> AlphaBeta<Chomp> {
        AlphaBeta::with_config(self.model(), self.root(), self.config(depth))
    }
}

pub(crate) fn format_score(score: Score) -> String {
    match score {
        SCORE_INFINITY => "win".to_string(),
        s if s == -SCORE_INFINITY => "loss".to_string(),
        s => s.to_string(),
    }
}

pub(crate) fn print_result(best: Option<&ChompState>, score: Option<Score>) {
    match best {
        Some(state) => println!("best move: {}", state),
        None => println!("no move available"),
    }
    if let Some(score) = score {
        println!("score: {}", format_score(score));
    }
}

pub(crate) fn print_prediction(prediction: &Prediction<ChompState>) {
    if prediction.is_empty() {
        return;
    }
    println!("predicted line:");
    for (ply, state) in prediction.line().iter().enumerate() {
        println!("  {:>2}. {}", ply + 1, state);
    }
}

pub(crate) fn print_stats(stats: &SearchStats) {
    println!(
        "searched {} frames in {} steps ({} generations, {} scored, {} cutoffs)",
        stats.frames_entered,
        stats.steps,
        stats.move_generations,
        stats.leaves_scored,
        stats.cutoffs
    );
}
