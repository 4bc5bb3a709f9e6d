//! Keyword analyzer — tokenizes resume and JD text and measures naive overlap.
//!
//! The trait seam exists so a semantic backend can be swapped in later without
//! touching callers.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;

use crate::analysis::report::MatchReport;

/// Only tokens longer than this count as candidate terms.
const MIN_TERM_LEN: usize = 3;
/// At most this many matched terms are kept in the report for display.
const MAX_DISPLAY_TERMS: usize = 10;

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str, job_text: &str) -> MatchReport;
}

/// Default keyword-overlap backend. Deterministic and pure apart from the
/// configurable delay, which stands in for a slower external analysis call.
pub struct KeywordAnalyzer {
    delay: Duration,
}

impl KeywordAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Analyzer for KeywordAnalyzer {
    async fn analyze(&self, resume_text: &str, job_text: &str) -> MatchReport {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        compute_match_report(resume_text, job_text)
    }
}

/// Lowercases and splits on whitespace runs. Punctuation stays attached to its
/// token; "skills." and "skills" are distinct terms.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Computes the overlap report.
///
/// Candidate terms are resume tokens longer than [`MIN_TERM_LEN`] that also
/// appear in the JD (membership, not multiset count). A single scan of the
/// resume tokens deduplicates while preserving first-occurrence order; the
/// full distinct count feeds the percentage, the first ten are displayed.
pub fn compute_match_report(resume_text: &str, job_text: &str) -> MatchReport {
    let resume_tokens = tokenize(resume_text);
    let job_tokens = tokenize(job_text);

    let job_set: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();

    let mut matched_terms: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for token in &resume_tokens {
        if token.chars().count() > MIN_TERM_LEN
            && job_set.contains(token.as_str())
            && seen.insert(token.as_str())
        {
            matched_terms.push(token.clone());
        }
    }

    let matched_term_count = matched_terms.len();
    // Explicit guard: an empty JD yields the 0.0 sentinel, never NaN/infinity.
    let match_percentage = if job_tokens.is_empty() {
        0.0
    } else {
        matched_term_count as f64 / job_tokens.len() as f64 * 100.0
    };
    matched_terms.truncate(MAX_DISPLAY_TERMS);

    MatchReport {
        matched_terms,
        matched_term_count,
        resume_char_count: resume_text.chars().count(),
        resume_word_count: resume_tokens.len(),
        job_char_count: job_text.chars().count(),
        job_word_count: job_tokens.len(),
        match_percentage,
    }
}
