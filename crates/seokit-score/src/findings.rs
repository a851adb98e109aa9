//! Score accumulator shared by the rule tables.

/// Starting score before any rule applies.
const BASE_SCORE: i32 = 100;

/// Running score plus the issues and suggestions raised so far.
#[derive(Debug, Clone)]
pub struct Findings {
    /// Sum of the base score and every adjustment, unclamped.
    score: i32,
    /// Problems found, in rule order.
    issues: Vec<String>,
    /// Advice, in first-seen order without duplicates.
    suggestions: Vec<String>,
}

impl Findings {
    /// Starts a fresh evaluation at the base score.
    pub fn new() -> Self {
        Self {
            score: BASE_SCORE,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Adds a signed adjustment.
    pub fn adjust(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Records an issue.
    pub fn issue(&mut self, text: &str) {
        self.issues.push(text.to_string());
    }

    /// Records a suggestion unless it was already given.
    pub fn suggest(&mut self, text: &str) {
        if !self.suggestions.iter().any(|s| s == text) {
            self.suggestions.push(text.to_string());
        }
    }

    /// Returns the score clamped to `0..=100`.
    pub fn score(&self) -> u32 {
        self.score.clamp(0, BASE_SCORE).unsigned_abs()
    }

    /// Consumes the accumulator, returning the clamped score, issues, and suggestions.
    pub fn finish(self) -> (u32, Vec<String>, Vec<String>) {
        (self.score(), self.issues, self.suggestions)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        let mut findings = Findings::new();
        findings.adjust(13);
        assert_eq!(findings.score(), 100);

        findings.adjust(-200);
        assert_eq!(findings.score(), 0);
    }

    #[test]
    fn deduplicates_suggestions_in_first_seen_order() {
        let mut findings = Findings::new();
        findings.suggest("b");
        findings.suggest("a");
        findings.suggest("b");
        findings.issue("x");
        findings.issue("x");

        let (score, issues, suggestions) = findings.finish();
        assert_eq!(score, 100);
        assert_eq!(issues, vec!["x", "x"]);
        assert_eq!(suggestions, vec!["b", "a"]);
    }
}
