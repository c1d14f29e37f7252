//! Command-line interface for the Chomp demo.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::ChompCli;
