//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod content;
pub mod init;
pub mod keywords;
pub mod report;
mod shared;
pub mod title;
pub mod tokenize;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Tokenize(cmd) => tokenize::run(&cmd),
        Commands::Keywords(cmd) => keywords::run(ctx, &cmd),
        Commands::Title(cmd) => title::run(ctx, &cmd),
        Commands::Content(cmd) => content::run(ctx, &cmd),
        Commands::Report(cmd) => report::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
