//! Vocabulary richness via type-token ratio. Scalar rule: it contributes
//! its own 0-100 score instead of a plain pass/fail.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document};
use crate::text::words;
use std::collections::HashSet;

/// Scores lexical diversity as unique words over total words. Documents
/// below the minimum word count are exempt rather than scored, because TTR
/// is statistically unstable on short samples.
pub struct VocabularyRichnessRule {
    /// Word count below which the rule reports not-applicable
    pub min_words: usize,
    /// TTR at or above this value earns a full score of 100
    pub full_credit_ttr: f64,
}

impl VocabularyRichnessRule {
    pub const ID: &'static str = "vocabulary.type-token-ratio";

    pub fn new() -> Self {
        Self {
            min_words: 100,
            full_credit_ttr: 0.5,
        }
    }
}

impl Default for VocabularyRichnessRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for VocabularyRichnessRule {
    fn evaluate(&self, document: &Document, _ctx: &RuleContext) -> Vec<AuditFinding> {
        let tokens = words(&document.text());
        if tokens.len() < self.min_words {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                format!(
                    "document has {} words, below the {}-word minimum for a stable ratio",
                    tokens.len(),
                    self.min_words
                ),
            )];
        }

        let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        let ttr = unique.len() as f64 / tokens.len() as f64;
        let score = (ttr / self.full_credit_ttr * 100.0).clamp(0.0, 100.0);

        vec![AuditFinding::scalar(
            Self::ID,
            score,
            score >= 50.0,
            format!(
                "type-token ratio {:.2} over {} words",
                ttr,
                tokens.len()
            ),
        )]
    }
}
