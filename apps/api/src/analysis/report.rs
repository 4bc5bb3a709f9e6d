//! Match report — the fixed-template summary of resume / JD keyword overlap.

use serde::{Deserialize, Serialize};

pub const NO_MATCHES_PLACEHOLDER: &str = "No significant keyword matches found";

/// Derived keyword-overlap report. Recomputed on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// First 10 matched terms, in order of first occurrence in the resume scan.
    pub matched_terms: Vec<String>,
    /// Total distinct matched terms. Drives the percentage and may exceed the
    /// displayed 10.
    pub matched_term_count: usize,
    pub resume_char_count: usize,
    pub resume_word_count: usize,
    pub job_char_count: usize,
    pub job_word_count: usize,
    /// Distinct matches / job token count × 100. `0.0` when the JD has no tokens.
    pub match_percentage: f64,
}

impl MatchReport {
    /// Renders the fixed-structure markdown report. The recommendation and
    /// next-steps blocks are static boilerplate, not derived from the analysis.
    pub fn render(&self) -> String {
        let matches = if self.matched_terms.is_empty() {
            NO_MATCHES_PLACEHOLDER.to_string()
        } else {
            self.matched_terms
                .iter()
                .map(|term| format!("- {term}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "## Resume Analysis Report\n\
             \n\
             ### Key Matches Found\n\
             {matches}\n\
             \n\
             ### Resume Length\n\
             - Characters: {resume_chars}\n\
             - Words: {resume_words}\n\
             \n\
             ### Job Description Length\n\
             - Characters: {job_chars}\n\
             - Words: {job_words}\n\
             \n\
             ### Match Percentage\n\
             - Keyword overlap: {percentage:.1}%\n\
             \n\
             ### Recommendations\n\
             1. Add more relevant keywords from the job description\n\
             2. Highlight specific skills mentioned in the job posting\n\
             3. Quantify your achievements with numbers and metrics\n\
             4. Use action verbs that match the job requirements\n\
             \n\
             ### Next Steps\n\
             - Review the job description requirements\n\
             - Update your resume to better align with the position\n\
             - Consider adding specific examples of your relevant experience",
            matches = matches,
            resume_chars = self.resume_char_count,
            resume_words = self.resume_word_count,
            job_chars = self.job_char_count,
            job_words = self.job_word_count,
            percentage = self.match_percentage,
        )
    }
}
