//! seokit: keyword extraction and SEO scoring for Chinese articles.
//!
//! seokit reads a headline and an article body, extracts the body's keywords
//! with TF-IDF and TextRank, and scores both against a table of heuristics
//! tuned for WeChat official-account posts: title length and wording, target
//! keyword coverage and density, sentence length, and structure. Results are
//! printed as tables or JSON.

#![warn(missing_docs)]

pub mod cli;
