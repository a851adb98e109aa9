//! TextRank keyword extraction over a token co-occurrence graph.
//!
//! Every token is a node. Tokens within `window_size` positions of each other
//! are linked, and edge weights count how often that happens across the
//! document. Ranks are then propagated for a fixed number of rounds:
//!
//! ```text
//! r'(v) = (1 - d) + d * Σ r(u) * w(u, v) / W(u)
//! ```
//!
//! where `W(u)` is the total outbound weight of `u`. Running a fixed number
//! of rounds instead of testing for convergence keeps the cost bounded and
//! the output deterministic.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use tracing::debug;

use super::{KeywordExtractor, KeywordResult};
use crate::{TermStats, tokenize};

/// Default number of tokens linked on each side of a position.
const DEFAULT_WINDOW_SIZE: usize = 5;
/// Default damping factor for rank propagation.
const DEFAULT_DAMPING_FACTOR: f64 = 0.85;
/// Default number of propagation rounds.
const DEFAULT_ITERATIONS: usize = 50;

/// Tuning parameters for TextRank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRankParams {
    /// Tokens before and after each position that count as co-occurring.
    pub window_size: usize,
    /// Probability mass propagated along edges each round.
    pub damping: f64,
    /// Number of synchronous update rounds.
    pub iterations: usize,
}

impl Default for TextRankParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            damping: DEFAULT_DAMPING_FACTOR,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Weighted co-occurrence graph over the distinct tokens of a document.
///
/// Nodes are numbered in first-occurrence order. Edges are recorded in both
/// directions, so the graph is symmetric. A token repeated inside its own
/// window gets a self-loop; it counts toward the node's outbound weight but
/// never feeds rank back into the node.
#[derive(Debug, Clone, Default)]
pub struct CoOccurrenceGraph {
    /// Node labels.
    nodes: Vec<String>,
    /// Label to node index.
    index: HashMap<String, usize>,
    /// Per-node neighbor weights, keyed by neighbor index.
    edges: Vec<BTreeMap<usize, u32>>,
}

impl CoOccurrenceGraph {
    /// Builds the graph for a token stream.
    pub fn build(tokens: &[String], window_size: usize) -> Self {
        let mut graph = Self::default();
        let ids: Vec<usize> = tokens.iter().map(|t| graph.intern(t)).collect();

        for (i, &node) in ids.iter().enumerate() {
            let start = i.saturating_sub(window_size);
            let end = ids.len().min(i.saturating_add(window_size).saturating_add(1));
            for (j, &neighbor) in ids.iter().enumerate().take(end).skip(start) {
                if i != j {
                    *graph.edges[node].entry(neighbor).or_insert(0) += 1;
                }
            }
        }

        graph
    }

    /// Returns the node index for a label, creating the node if needed.
    fn intern(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        self.edges.push(BTreeMap::new());
        idx
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges, counting each direction once.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(BTreeMap::len).sum()
    }

    /// Returns true if a label has a node.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the weight of the edge between two labels, 0 if absent.
    pub fn weight(&self, from: &str, to: &str) -> u32 {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.edges[a].get(&b).copied().unwrap_or(0),
            _ => 0,
        }
    }

    /// Sum of all edge weights leaving a node, self-loops included.
    fn outbound_weight(&self, node: usize) -> u64 {
        self.edges[node].values().map(|&w| u64::from(w)).sum()
    }

    /// Runs rank propagation and returns the final rank of each node.
    fn rank(&self, params: &TextRankParams) -> Vec<f64> {
        let n = self.node_count();
        let damping = params.damping;
        let outbound: Vec<u64> = (0..n).map(|node| self.outbound_weight(node)).collect();
        let mut scores = vec![1.0; n];

        for _ in 0..params.iterations {
            // The graph is symmetric, so a node's neighbors are also its
            // inbound sources and w(u, v) == w(v, u).
            scores = (0..n)
                .map(|node| {
                    let mut score = 1.0 - damping;
                    for (&source, &weight) in &self.edges[node] {
                        if source == node || outbound[source] == 0 {
                            continue;
                        }
                        score +=
                            damping * (scores[source] * f64::from(weight) / outbound[source] as f64);
                    }
                    score
                })
                .collect();
        }

        scores
    }
}

/// TextRank graph-based keyword extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRankExtractor {
    /// Graph and propagation parameters.
    params: TextRankParams,
}

impl TextRankExtractor {
    /// Creates an extractor with the default window, damping, and iterations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom parameters.
    pub fn with_params(params: TextRankParams) -> Self {
        Self { params }
    }

    /// Returns the extractor's parameters.
    pub fn params(&self) -> &TextRankParams {
        &self.params
    }

    /// Extracts keywords ranked by graph centrality.
    ///
    /// Returns at most `top_k` keywords, highest rank first. Ties keep the
    /// order in which terms first appear.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        self.ranked_terms(text)
            .into_iter()
            .take(top_k)
            .map(|(keyword, _)| keyword)
            .collect()
    }

    /// Ranks every distinct term, returning keyword records with their final rank.
    pub fn ranked_terms(&self, text: &str) -> Vec<(KeywordResult, f64)> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let stats = TermStats::from_tokens(&tokens);
        let graph = CoOccurrenceGraph::build(&tokens, self.params.window_size);
        let scores = graph.rank(&self.params);

        debug!(
            tokens = tokens.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            iterations = self.params.iterations,
            "ranked terms by textrank"
        );

        // Graph nodes and stats entries share first-occurrence order.
        let mut ranked: Vec<(KeywordResult, f64)> = stats
            .iter()
            .zip(scores)
            .map(|(entry, score)| (stats.keyword_result(entry), score))
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

impl KeywordExtractor for TextRankExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Vec<KeywordResult> {
        Self::extract(self, text, top_k)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn graph_has_node_per_token() {
        let stream = tokens(&["a1", "b1", "c1", "a1"]);
        let graph = CoOccurrenceGraph::build(&stream, 5);

        assert_eq!(graph.node_count(), 3);
        for t in &stream {
            assert!(graph.contains(t));
        }
    }

    #[test]
    fn graph_is_symmetric() {
        let stream = tokens(&["a1", "b1", "c1", "a1", "d1", "b1"]);
        let graph = CoOccurrenceGraph::build(&stream, 2);

        for from in ["a1", "b1", "c1", "d1"] {
            for to in ["a1", "b1", "c1", "d1"] {
                assert_eq!(graph.weight(from, to), graph.weight(to, from));
            }
        }
    }

    #[test]
    fn graph_accumulates_repeated_co_occurrence() {
        let stream = tokens(&["a1", "b1", "a1", "b1"]);
        let graph = CoOccurrenceGraph::build(&stream, 5);

        // Every pair of positions is within the window: a1/b1 co-occur at
        // (0,1), (0,3), (2,1), (2,3), and a1 sees itself at (0,2).
        assert_eq!(graph.weight("a1", "b1"), 4);
        assert_eq!(graph.weight("a1", "a1"), 2);
    }

    #[test]
    fn graph_respects_window() {
        let stream = tokens(&["a1", "b1", "c1", "d1"]);
        let graph = CoOccurrenceGraph::build(&stream, 1);

        assert_eq!(graph.weight("a1", "b1"), 1);
        assert_eq!(graph.weight("a1", "c1"), 0);
        assert_eq!(graph.weight("a1", "d1"), 0);
    }

    #[test]
    fn single_token_ranks_at_teleport_mass() {
        let ranked = TextRankExtractor::new().ranked_terms("seo");
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].1 - 0.15).abs() < 1e-12);
        assert_eq!(ranked[0].0.keyword, "seo");
        assert_eq!(ranked[0].0.count, 1);
    }

    #[test]
    fn repeated_single_token_has_only_self_loop() {
        // The self-loop carries outbound weight but no inbound rank.
        let ranked = TextRankExtractor::new().ranked_terms("seo seo seo");
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].1 - 0.15).abs() < 1e-12);
        assert_eq!(ranked[0].0.count, 3);
    }

    #[test]
    fn two_connected_tokens_keep_rank_one() {
        // Each node passes all its rank to the other, so 1.0 is a fixed point.
        let ranked = TextRankExtractor::new().ranked_terms("rust tokio");
        for (_, score) in ranked {
            assert!((score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn hub_token_ranks_first() {
        let text = "rust serde rust tokio rust axum rust clap";
        let keywords = TextRankExtractor::with_params(TextRankParams {
            window_size: 1,
            ..TextRankParams::default()
        })
        .extract(text, 3);

        assert_eq!(keywords[0].keyword, "rust");
        assert_eq!(keywords[0].count, 4);
        assert_eq!(keywords[0].positions, vec![0, 2, 4, 6]);
    }

    #[test]
    fn zero_iterations_leaves_initial_rank() {
        let extractor = TextRankExtractor::with_params(TextRankParams {
            iterations: 0,
            ..TextRankParams::default()
        });
        for (_, score) in extractor.ranked_terms("rust tokio serde") {
            assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(TextRankExtractor::new().extract("", 10).is_empty());
        assert!(TextRankExtractor::new().extract("《》", 10).is_empty());
    }

    #[test]
    fn extract_respects_top_k() {
        let keywords = TextRankExtractor::new().extract("公众号运营写作技巧", 4);
        assert_eq!(keywords.len(), 4);
    }

    #[test]
    fn default_params() {
        let params = TextRankParams::default();
        assert_eq!(params.window_size, 5);
        assert_eq!(params.damping, 0.85);
        assert_eq!(params.iterations, 50);
    }
}
