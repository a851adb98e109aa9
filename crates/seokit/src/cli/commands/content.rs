//! Implementation of `seokit content`.

use std::process::ExitCode;

use seokit_score::ContentAnalysis;

use super::shared::content_scorer;
use crate::cli::{
    args::ContentCommand,
    context::CommandContext,
    output::{keyword_table, print_findings, print_json, subheader},
};

/// Scores an article body and prints the findings and keywords.
pub fn run(ctx: &CommandContext, cmd: &ContentCommand) -> ExitCode {
    let targets = cmd.targets.resolve(&ctx.config);
    let setup = match cmd.keywords.resolve(&ctx.config) {
        Ok(setup) => setup,
        Err(code) => return code,
    };
    let scorer = match content_scorer(&ctx.config, &targets, &setup, cmd.extractor) {
        Ok(scorer) => scorer,
        Err(code) => return code,
    };
    let text = match cmd.input.read() {
        Ok(text) => text,
        Err(code) => return code,
    };

    let analysis = scorer.analyze(&text);
    if cmd.output.json {
        return print_json(&analysis);
    }

    print_content(&analysis);
    ExitCode::SUCCESS
}

/// Prints a content analysis in text form.
pub fn print_content(analysis: &ContentAnalysis) {
    println!("Score:       {}/100", analysis.score);
    println!("Length:      {} chars", analysis.word_count);
    println!("Readability: {}/100", analysis.readability_score);
    println!();

    print_findings(&analysis.issues, &analysis.suggestions);

    println!("{}", subheader("Keywords"));
    if analysis.keywords.is_empty() {
        println!("  (none)");
    } else {
        println!("{}", keyword_table(&analysis.keywords));
    }
}
