//! Implementation of `seokit tokenize`.

use std::process::ExitCode;

use seokit_keywords::tokenize;

use crate::cli::{args::TokenizeCommand, output::print_json};

/// Prints the token stream, one token per line.
pub fn run(cmd: &TokenizeCommand) -> ExitCode {
    let text = match cmd.input.read() {
        Ok(text) => text,
        Err(code) => return code,
    };

    let tokens = tokenize(&text);
    if cmd.output.json {
        return print_json(&tokens);
    }

    for token in &tokens {
        println!("{token}");
    }
    ExitCode::SUCCESS
}
