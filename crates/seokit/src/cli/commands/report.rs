//! Implementation of `seokit report`.

use std::process::ExitCode;

use seokit_score::{ContentAnalysis, SeoScore, TitleAnalysis};
use serde::Serialize;

use super::{
    content::print_content,
    shared::{content_scorer, title_scorer},
    title::print_title,
};
use crate::cli::{
    args::ReportCommand,
    context::CommandContext,
    output::{print_json, score_table, subheader},
};

/// JSON output for `seokit report`.
#[derive(Serialize)]
struct ReportJson<'a> {
    /// Weighted score breakdown.
    score: &'a SeoScore,
    /// Title analysis.
    title: &'a TitleAnalysis,
    /// Content analysis.
    content: &'a ContentAnalysis,
}

/// Scores title and body together and prints the overall breakdown.
pub fn run(ctx: &CommandContext, cmd: &ReportCommand) -> ExitCode {
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

    let title_scorer = title_scorer(&targets);
    let has_targets = !title_scorer.targets().is_empty();
    let title = title_scorer.analyze(&cmd.title);
    let content = scorer.analyze(&text);
    let score = SeoScore::from_analyses(&title, &content, has_targets);

    if cmd.output.json {
        return print_json(&ReportJson {
            score: &score,
            title: &title,
            content: &content,
        });
    }

    println!("{}", subheader("SEO score"));
    println!("{}", score_table(&score));
    println!();
    println!("{}", subheader("Title"));
    print_title(&title, has_targets);
    println!();
    println!("{}", subheader("Content"));
    print_content(&content);
    ExitCode::SUCCESS
}
