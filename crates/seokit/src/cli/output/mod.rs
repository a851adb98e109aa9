//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use seokit_keywords::KeywordResult;
use seokit_score::{OptimizedTitle, SeoScore};
use serde::Serialize;

/// Positions shown per keyword before eliding the rest.
const MAX_POSITIONS_SHOWN: usize = 8;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a section heading.
pub fn subheader(text: &str) -> String {
    format!("{text}:")
}

/// Creates a table with the shared preset and header row.
fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// Formats positions, eliding all but the first few.
pub fn format_positions(positions: &[usize]) -> String {
    let shown: Vec<String> = positions
        .iter()
        .take(MAX_POSITIONS_SHOWN)
        .map(ToString::to_string)
        .collect();
    let mut out = shown.join(", ");
    if positions.len() > MAX_POSITIONS_SHOWN {
        out.push_str(&format!(", … (+{})", positions.len() - MAX_POSITIONS_SHOWN));
    }
    out
}

/// Renders a ranked keyword table.
pub fn keyword_table(keywords: &[KeywordResult]) -> Table {
    let mut table = new_table(vec!["#", "Keyword", "Density", "Count", "Positions"]);
    for (rank, keyword) in keywords.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&keyword.keyword),
            Cell::new(format!("{:.2}%", keyword.density)).set_alignment(CellAlignment::Right),
            Cell::new(keyword.count).set_alignment(CellAlignment::Right),
            Cell::new(format_positions(&keyword.positions)),
        ]);
    }
    table
}

/// Renders rewritten title variants.
pub fn optimized_table(versions: &[OptimizedTitle]) -> Table {
    let mut table = new_table(vec!["Title", "Score", "Change"]);
    for version in versions {
        table.add_row(vec![
            Cell::new(&version.title),
            Cell::new(version.score).set_alignment(CellAlignment::Right),
            Cell::new(version.changes.join("; ")),
        ]);
    }
    table
}

/// Renders the weighted score breakdown.
pub fn score_table(score: &SeoScore) -> Table {
    let mut table = new_table(vec!["Component", "Score", "Weight"]);
    let rows = [
        ("Title", score.title, "30%"),
        ("Content", score.content, "40%"),
        ("Keywords", score.keywords, "20%"),
        ("Readability", score.readability, "10%"),
        ("Overall", score.overall, ""),
    ];
    for (name, value, weight) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(value).set_alignment(CellAlignment::Right),
            Cell::new(weight).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Prints issues and suggestions as bullet lists, skipping empty sections.
pub fn print_findings(issues: &[String], suggestions: &[String]) {
    if !issues.is_empty() {
        println!("{}", subheader("Issues"));
        for issue in issues {
            println!("  - {issue}");
        }
        println!();
    }
    if !suggestions.is_empty() {
        println!("{}", subheader("Suggestions"));
        for suggestion in suggestions {
            println!("  - {suggestion}");
        }
        println!();
    }
}
