//! Clap argument definitions for the `seokit` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use seokit_keywords::KeywordMethod;
use seokit_score::KeywordStrategy;

/// Parse a keyword extraction method from a string.
fn parse_method(s: &str) -> Result<KeywordMethod, String> {
    s.parse()
}

/// Parse a content keyword extractor from a string.
fn parse_extractor(s: &str) -> Result<KeywordStrategy, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "seokit")]
#[command(about = "Keyword extraction and SEO scoring for Chinese articles")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the text to analyze comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to analyze (reads --file or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Target keyword flags.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Target keyword (repeat or comma-separate; overrides analysis.target_keywords)
    #[arg(short = 'k', long = "target", value_delimiter = ',')]
    pub targets: Vec<String>,
}

/// Keyword extraction overrides for the `[keywords]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Number of keywords to return [default: 15]
    #[arg(short = 'n', long)]
    pub top_k: Option<usize>,

    /// Extraction method: tfidf, textrank, combined [default: combined]
    #[arg(short = 'm', long, value_parser = parse_method)]
    pub method: Option<KeywordMethod>,

    /// TextRank co-occurrence window [default: 5]
    #[arg(long)]
    pub window_size: Option<usize>,

    /// TextRank damping factor [default: 0.85]
    #[arg(long)]
    pub damping: Option<f64>,

    /// TextRank propagation rounds [default: 50]
    #[arg(long)]
    pub iterations: Option<usize>,
}

/// Arguments for `seokit tokenize`.
#[derive(Args, Debug, Clone)]
pub struct TokenizeCommand {
    #[command(flatten)]
    /// Input source.
    pub input: InputArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `seokit keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    #[command(flatten)]
    /// Input source.
    pub input: InputArgs,

    #[command(flatten)]
    /// Extraction overrides.
    pub keywords: KeywordArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `seokit title`.
#[derive(Args, Debug, Clone)]
pub struct TitleCommand {
    /// Title to score
    pub title: String,

    #[command(flatten)]
    /// Target keywords.
    pub targets: TargetArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `seokit content`.
#[derive(Args, Debug, Clone)]
pub struct ContentCommand {
    #[command(flatten)]
    /// Input source.
    pub input: InputArgs,

    #[command(flatten)]
    /// Target keywords.
    pub targets: TargetArgs,

    /// Keyword source: analyzer, frequency [default: analyzer]
    #[arg(short = 'e', long, value_parser = parse_extractor)]
    pub extractor: Option<KeywordStrategy>,

    #[command(flatten)]
    /// Extraction overrides.
    pub keywords: KeywordArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `seokit report`.
#[derive(Args, Debug, Clone)]
pub struct ReportCommand {
    /// Article title
    #[arg(short = 't', long)]
    pub title: String,

    #[command(flatten)]
    /// Article body source.
    pub input: InputArgs,

    #[command(flatten)]
    /// Target keywords.
    pub targets: TargetArgs,

    /// Keyword source: analyzer, frequency [default: analyzer]
    #[arg(short = 'e', long, value_parser = parse_extractor)]
    pub extractor: Option<KeywordStrategy>,

    #[command(flatten)]
    /// Extraction overrides.
    pub keywords: KeywordArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `seokit init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.seokit.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `seokit` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Split text into candidate terms
    Tokenize(TokenizeCommand),

    /// Extract ranked keywords
    #[command(after_help = "\
METHODS:
  tfidf      Term frequency with length boost and frequency penalty
  textrank   Graph-based ranking over a co-occurrence window
  combined   60/40 blend of tfidf and textrank (default)

EXAMPLES:
  seokit keywords '公众号运营需要写作技巧'
  seokit keywords -f article.md -m textrank -n 10
  cat article.md | seokit keywords --json")]
    Keywords(KeywordsCommand),

    /// Score a title and suggest rewrites
    Title(TitleCommand),

    /// Score an article body
    Content(ContentCommand),

    /// Score a title and body together
    Report(ReportCommand),

    /// Initialize seokit configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

impl Commands {
    /// Returns true if the command reads the merged configuration.
    ///
    /// `init` and `check` must work when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_) | Self::Check)
    }
}
