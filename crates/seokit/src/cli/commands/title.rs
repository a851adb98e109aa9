//! Implementation of `seokit title`.

use std::process::ExitCode;

use seokit_score::TitleAnalysis;

use super::shared::title_scorer;
use crate::cli::{
    args::TitleCommand,
    context::CommandContext,
    output::{optimized_table, print_findings, print_json, subheader},
};

/// Scores a title and prints the findings and rewrites.
pub fn run(ctx: &CommandContext, cmd: &TitleCommand) -> ExitCode {
    let targets = cmd.targets.resolve(&ctx.config);
    let analysis = title_scorer(&targets).analyze(&cmd.title);

    if cmd.output.json {
        return print_json(&analysis);
    }

    print_title(&analysis, !targets.is_empty());
    ExitCode::SUCCESS
}

/// Prints a title analysis in text form.
pub fn print_title(analysis: &TitleAnalysis, has_targets: bool) {
    println!("Title:    {}", analysis.title);
    println!("Score:    {}/100", analysis.score);
    println!("Length:   {} chars", analysis.length);
    if has_targets {
        println!("Coverage: {:.0}%", analysis.keyword_density);
    }
    println!();

    print_findings(&analysis.issues, &analysis.suggestions);

    if !analysis.optimized_versions.is_empty() {
        println!("{}", subheader("Optimized versions"));
        println!("{}", optimized_table(&analysis.optimized_versions));
    }
}
