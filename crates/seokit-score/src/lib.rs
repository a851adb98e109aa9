//! Rule-based SEO scoring for article titles and bodies.
//!
//! Every analysis starts from 100 and applies a fixed table of additive
//! adjustments, then clamps the total to `0..=100`. Rules also produce
//! human-readable issues and suggestions (in Chinese, matching the articles
//! being scored). Nothing here touches the network or keeps state between
//! calls.
//!
//! - [`analyze_title`] scores a headline and proposes rewritten variants.
//! - [`analyze_content`] scores a body for length, target keyword density,
//!   readability, and structure, and extracts its keywords.
//! - [`SeoScore`] blends the individual scores into one overall number.
//! - [`Enhancer`] is the seam for optional external annotations, which never
//!   replace the rule-based results.

#![warn(missing_docs)]

mod content;
mod enhance;
mod error;
mod findings;
mod markers;
mod readability;
mod seo;
mod title;

pub use content::{
    CONTENT_MAX_CHARS, CONTENT_MIN_CHARS, ContentAnalysis, ContentScorer, KeywordStrategy,
    analyze_content,
};
pub use enhance::{
    AnnotatedKeyword, Annotations, Enhanced, Enhancer, FALLBACK_INSIGHT, KeywordAnnotation,
    Sentiment, enhance_content, enhance_title,
};
pub use error::EnhanceError;
pub use markers::{EMOTIONAL_WORDS, HIGH_VALUE_WORDS, QUESTION_WORDS};
pub use readability::calculate_readability;
pub use seo::{DEFAULT_KEYWORD_SCORE, SeoScore};
pub use title::{
    OptimizedTitle, TITLE_MAX_CHARS, TITLE_MIN_CHARS, TitleAnalysis, TitleScorer, analyze_title,
};
