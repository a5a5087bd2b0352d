//! Command-line interface orchestration for the kumo graph generators.
//!
//! Offers a `cycle` subcommand that generates a random Hamiltonian cycle and
//! a `community` subcommand that generates a two-block community-structured
//! graph; both write a JSON document of vertices and edges to a file.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommunityArgs, CycleArgs, ExecutionSummary, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
