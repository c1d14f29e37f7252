pub mod alpha_beta_searcher;
pub mod chomp;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
