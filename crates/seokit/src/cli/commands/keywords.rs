//! Implementation of `seokit keywords`.

use std::process::ExitCode;

use seokit_keywords::KeywordExtractor;

use crate::cli::{
    args::KeywordsCommand,
    context::CommandContext,
    output::{keyword_table, print_json, subheader},
};

/// Extracts and prints ranked keywords.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let setup = match cmd.keywords.resolve(&ctx.config) {
        Ok(setup) => setup,
        Err(code) => return code,
    };
    let text = match cmd.input.read() {
        Ok(text) => text,
        Err(code) => return code,
    };

    let keywords = setup.analyzer.extract(&text, setup.top_k);
    if cmd.output.json {
        return print_json(&keywords);
    }

    let method = setup.analyzer.method();
    println!(
        "{} {}",
        subheader(&format!("Keywords ({method})")),
        method.description()
    );
    if keywords.is_empty() {
        println!("  (none)");
    } else {
        println!("{}", keyword_table(&keywords));
    }
    ExitCode::SUCCESS
}
