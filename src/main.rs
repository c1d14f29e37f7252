mod cli;

use cli::commands::Command;
use cli::ChompCli;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    {
        if let Err(err) = alphabeta::instrumentation::init_tracing() {
            log::warn!("span timing disabled: {}", err);
        }
    }

    ChompCli::from_args().execute();

    #[cfg(feature = "instrumentation")]
    alphabeta::instrumentation::print_timing_statistics();
}
